//! Demo autopilot
//!
//! Plays the game on its own: steers the net toward the fish whose
//! predicted position is closest, or parks it mid-water when there is none.

use crate::pixel_distance_sq;
use crate::sim::{ControlKey, KeyStates};
use crate::sim::spawn::{FREE_WATER_RANGE, MIN_FREE_LEVEL};
use crate::snapshot::{FishView, FrameSnapshot};

/// How far ahead of a fish to aim (pixels)
const LEAD_DISTANCE: i32 = 20;

#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Dead zone around the target, avoids jitter
    pub tolerance: i32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { tolerance: 4 }
    }
}

impl Autopilot {
    /// Keys to hold for the next tick
    pub fn steer(&self, frame: &FrameSnapshot) -> KeyStates {
        let mut keys = KeyStates::default();
        if frame.paused {
            return keys;
        }

        let net = (frame.boat.net_x, frame.boat.net_y);
        let target = frame
            .fishes
            .iter()
            .map(lead_point)
            .min_by_key(|&p| pixel_distance_sq(p, net))
            .unwrap_or((net.0, (MIN_FREE_LEVEL + FREE_WATER_RANGE / 2.0) as i32));

        let dx = target.0 - net.0;
        let dy = target.1 - net.1;
        if dx < -self.tolerance {
            keys.set(ControlKey::Left, true);
        } else if dx > self.tolerance {
            keys.set(ControlKey::Right, true);
        }
        if dy < -self.tolerance {
            keys.set(ControlKey::Up, true);
        } else if dy > self.tolerance {
            keys.set(ControlKey::Down, true);
        }
        keys
    }
}

fn lead_point(fish: &FishView) -> (i32, i32) {
    let lead = if fish.heading_right {
        LEAD_DISTANCE
    } else {
        -LEAD_DISTANCE
    };
    (fish.x + lead, fish.y)
}
