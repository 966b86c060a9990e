//! Net Fishing - a boat drags a net through the waves to catch fish
//!
//! Core modules:
//! - `sim`: Per-tick simulation (water surface, boat, fish, bubbles, spawning)
//! - `engine`: Fixed-rate worker thread with pause/game-over handling
//! - `snapshot`: Read-only frame copies handed to renderers
//! - `autopilot`: Demo driver that plays the game on its own
//! - `settings`: Runtime configuration

pub mod autopilot;
pub mod engine;
pub mod error;
pub mod settings;
pub mod sim;
pub mod snapshot;

pub use engine::{FrameSink, GameEngine};
pub use error::{Error, Result};
pub use settings::Settings;
pub use snapshot::FrameSnapshot;

use glam::DVec2;

/// Game configuration constants
pub mod consts {
    /// Scene dimensions (pixels)
    pub const SCENE_WIDTH: i32 = 500;
    pub const SCENE_HEIGHT: i32 = 500;

    /// Approximate iterations per second (same as frames per second)
    pub const ITERATIONS_PER_SEC: u32 = 20;
    /// Missing this many fish ends the game
    pub const MAX_FISHES_MISSED: u32 = 10;

    /// Water surface: sea level without waves
    pub const SEA_LEVEL: i32 = 100;
    /// Cap of the surface amplitude
    pub const MAX_SURFACE_AMPLITUDE: i32 = 44;
    pub const INITIAL_SURFACE_AMPLITUDE: f64 = 2.0;
    pub const SURFACE_OMEGA: f64 = 0.033;
    pub const SURFACE_PHASE_STEP: f64 = 0.12;
    pub const SURFACE_AMPLITUDE_STEP: f64 = 0.008;
    pub const MAX_DRIFT_VELOCITY: f64 = 3.5;

    /// Boat and net
    pub const BOAT_WIDTH: i32 = 80;
    pub const BOAT_HEIGHT: i32 = 40;
    pub const NET_SIZE: i32 = 36;
    /// Horizontal speed of the boat
    pub const BOAT_SPEED: f64 = 5.0;
    /// Vertical speed of the net (rope length change per tick)
    pub const NET_SPEED: f64 = 9.0;
    /// Boat tilt relative to the surface slope (0.7 = follows 70%)
    pub const SURFACE_FOLLOWING_DEGREE: f64 = 0.7;
    /// How deep the hull sits in the water at rest
    pub const SINKING_DEGREE: f64 = 0.15;

    /// Fish
    pub const FISH_WIDTH: i32 = 26;
    pub const FISH_HEIGHT: i32 = 10;
    pub const FISH_BASE_SPEED: f64 = 2.2;

    /// Bubbles
    pub const BUBBLE_SIZE: i32 = 5;
    pub const BUBBLE_ASCENDING_VELOCITY: f64 = -1.6;
    pub const BUBBLE_OSCILLATION_AMPLITUDE: f64 = 5.0;
    pub const BUBBLE_OSCILLATION_STEP: f64 = 0.15;

    /// Spawn probabilities per tick
    pub const FISH_SPAWN_BASE: f64 = 0.025;
    pub const FISH_SPAWN_CAP: f64 = 0.075;
    /// Iterations for the fish spawn chance to grow by 1.0
    pub const FISH_SPAWN_RAMP: f64 = 20000.0;
    pub const BUBBLE_SPAWN_CHANCE: f64 = 0.03;
}

/// Truncate a real position to the integer pixel it is shown at
#[inline]
pub fn to_pixel(pos: DVec2) -> (i32, i32) {
    (pos.x as i32, pos.y as i32)
}

/// Squared distance between two pixel positions
#[inline]
pub fn pixel_distance_sq(a: (i32, i32), b: (i32, i32)) -> i32 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    dx * dx + dy * dy
}
