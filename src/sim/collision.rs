//! Catch, escape and surfacing checks
//!
//! All tests run on truncated pixel positions, the same positions renderers draw.

use super::entity::{Bubble, Fish, Mover};
use super::surface::WaterSurface;
use crate::consts::*;
use crate::pixel_distance_sq;

/// Radius of the catch circle around the net center
pub const NET_RADIUS: i32 = NET_SIZE / 2;

/// Is this pixel inside the net?
#[inline]
pub fn in_net(point: (i32, i32), net_center: (i32, i32)) -> bool {
    pixel_distance_sq(point, net_center) < NET_RADIUS * NET_RADIUS
}

/// A fish is caught when its center is inside the net, or when its leading
/// edge is (it is about to swim in). The trailing edge is not tested.
pub fn fish_caught(fish: &Fish, net_center: (i32, i32)) -> bool {
    in_net(fish.visible_pos(), net_center) || in_net(fish.leading_edge(), net_center)
}

/// A fish escaped once it is fully past either edge of the scene
pub fn fish_escaped(fish: &Fish) -> bool {
    let (x, _) = fish.visible_pos();
    let margin = FISH_WIDTH / 2;
    x < -margin || x > SCENE_WIDTH - 1 + margin
}

/// A bubble pops once its top rises above the local water level
pub fn bubble_surfaced(bubble: &Bubble, surface: &WaterSurface) -> bool {
    let (x, _) = bubble.visible_pos();
    let top = bubble.body.pos.y - BUBBLE_SIZE as f64 / 2.0;
    top < surface.water_level_at(x) as f64
}
