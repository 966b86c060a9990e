//! The player's boat and its net
//!
//! The boat floats on the surface, so only its x is free. The body's y is
//! the length of the net rope in boat-local coordinates: the net hangs at
//! `water_level_at(x) + y` on screen.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::entity::MovingEntity;
use super::state::{ControlKey, KeyStates};
use super::surface::WaterSurface;
use crate::consts::*;

/// Shortest rope: the net touches the hull
pub const MIN_ROPE_LENGTH: f64 = ((NET_SIZE + BOAT_HEIGHT) / 2) as f64;
/// Longest rope: the net touches the sea floor
pub const MAX_ROPE_LENGTH: f64 = (SCENE_HEIGHT - SEA_LEVEL) as f64 - 1.0;

/// Boat with a net hanging on a rope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boat {
    /// x = boat position, y = rope length; velocity holds the boat/net speeds
    pub body: MovingEntity,
}

impl Default for Boat {
    fn default() -> Self {
        Self {
            body: MovingEntity::new(
                DVec2::new(SCENE_WIDTH as f64 / 2.0, MIN_ROPE_LENGTH),
                DVec2::new(BOAT_SPEED, NET_SPEED),
            ),
        }
    }
}

impl Boat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Boat x in pixels
    #[inline]
    pub fn x(&self) -> i32 {
        self.body.pixel().0
    }

    /// Rope length in pixels
    #[inline]
    pub fn rope_length(&self) -> i32 {
        self.body.pixel().1
    }

    /// Screen y of the boat: the water level under it, recomputed on every call
    pub fn boat_y(&self, surface: &WaterSurface) -> i32 {
        surface.water_level_at(self.x())
    }

    /// Screen position of the net center
    pub fn net_center(&self, surface: &WaterSurface) -> (i32, i32) {
        (self.x(), self.boat_y(surface) + self.rope_length())
    }

    /// Move the boat for one tick: drift, then keys, then clamp.
    /// Opposite keys held together cancel out.
    pub fn make_move(&mut self, keys: &KeyStates, surface: &WaterSurface) {
        let speed = self.body.vel();
        let pos = &mut self.body.pos;

        pos.x += surface.drift_velocity();

        if keys.is_pressed(ControlKey::Left) {
            pos.x -= speed.x;
        }
        if keys.is_pressed(ControlKey::Right) {
            pos.x += speed.x;
        }
        if keys.is_pressed(ControlKey::Up) {
            pos.y -= speed.y;
        }
        if keys.is_pressed(ControlKey::Down) {
            pos.y += speed.y;
        }

        pos.x = pos.x.clamp(0.0, SCENE_WIDTH as f64 - 1.0);
        pos.y = pos.y.clamp(MIN_ROPE_LENGTH, MAX_ROPE_LENGTH);
    }
}
