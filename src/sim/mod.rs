//! Simulation module
//!
//! All gameplay logic lives here:
//! - Fixed tick only
//! - Randomness only through `Spawner`
//! - Stable iteration order (spawn order)
//! - No rendering, threading or platform dependencies

pub mod boat;
pub mod collision;
pub mod entity;
pub mod session;
pub mod spawn;
pub mod state;
pub mod surface;
pub mod tick;

pub use boat::{Boat, MAX_ROPE_LENGTH, MIN_ROPE_LENGTH};
pub use collision::{NET_RADIUS, bubble_surfaced, fish_caught, fish_escaped};
pub use entity::{Bubble, Fish, Mover, MovingEntity};
pub use session::{RunState, Session};
pub use spawn::{SpawnRates, Spawner};
pub use state::{ControlKey, GameEvent, GameModel, KeyStates};
pub use surface::WaterSurface;
pub use tick::{TickOutcome, tick};
