//! Game model and input types
//!
//! Everything a session owns lives in `GameModel`; it is rebuilt wholesale
//! when a new session starts.

use serde::{Deserialize, Serialize};

use super::boat::Boat;
use super::entity::{Bubble, Fish};
use super::surface::WaterSurface;
use crate::consts::MAX_FISHES_MISSED;

/// Movement keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlKey {
    /// Move the boat left
    Left,
    /// Move the boat right
    Right,
    /// Pull the net up (shallower)
    Up,
    /// Let the net down (deeper)
    Down,
}

impl ControlKey {
    pub const ALL: [ControlKey; 4] = [
        ControlKey::Left,
        ControlKey::Right,
        ControlKey::Up,
        ControlKey::Down,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Pressed state of every movement key. `Copy`, so a tick always works on a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyStates([bool; 4]);

impl KeyStates {
    #[inline]
    pub fn is_pressed(&self, key: ControlKey) -> bool {
        self.0[key.index()]
    }

    #[inline]
    pub fn set(&mut self, key: ControlKey, pressed: bool) {
        self.0[key.index()] = pressed;
    }

    /// Builder-style variant of `set`
    pub fn with(mut self, key: ControlKey) -> Self {
        self.set(key, true);
        self
    }

    pub fn any_pressed(&self) -> bool {
        self.0.iter().any(|&p| p)
    }
}

impl From<[bool; 4]> for KeyStates {
    fn from(pressed: [bool; 4]) -> Self {
        Self(pressed)
    }
}

/// Things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    FishCaught { id: u32 },
    FishMissed { id: u32 },
    FishSpawned { id: u32, from_left: bool },
    BubbleSpawned { id: u32 },
    BubbleSurfaced { id: u32 },
    /// Missed-fish limit reached
    GameOver { caught: u32 },
    /// Model was reset for a fresh session
    NewSession,
}

/// Complete state of one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameModel {
    pub surface: WaterSurface,
    pub boat: Boat,
    /// Fish in spawn order
    pub fishes: Vec<Fish>,
    /// Bubbles in spawn order
    pub bubbles: Vec<Bubble>,
    pub fishes_caught: u32,
    pub fishes_missed: u32,
    pub iteration_counter: u64,
    /// Next entity ID
    next_id: u32,
}

impl Default for GameModel {
    fn default() -> Self {
        Self::new()
    }
}

impl GameModel {
    /// Fresh session: calm sea, centered boat, no fish, zeroed counters
    pub fn new() -> Self {
        Self {
            surface: WaterSurface::new(),
            boat: Boat::new(),
            fishes: Vec::new(),
            bubbles: Vec::new(),
            fishes_caught: 0,
            fishes_missed: 0,
            iteration_counter: 0,
            next_id: 1,
        }
    }

    /// Replace everything with a fresh session
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// The game ends once too many fish got away
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.fishes_missed >= MAX_FISHES_MISSED
    }

    /// Screen position of the net center
    pub fn net_center(&self) -> (i32, i32) {
        self.boat.net_center(&self.surface)
    }
}
