//! Pause / game-over state machine
//!
//! A session starts paused. Game over is not a stored state: it is derived
//! from the missed-fish count, and it pauses the session. Resuming after a
//! game over starts a fresh model.

use serde::{Deserialize, Serialize};

use super::spawn::Spawner;
use super::state::{GameEvent, GameModel, KeyStates};
use super::tick::{TickOutcome, tick};

/// Whether iterations are being run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    Paused,
    Running,
}

/// A game model together with its run state and random source
#[derive(Debug, Clone)]
pub struct Session {
    model: GameModel,
    state: RunState,
    spawner: Spawner,
    /// Completed games (game overs) so far
    games_played: u32,
}

impl Session {
    pub fn new(spawner: Spawner) -> Self {
        Self {
            model: GameModel::new(),
            state: RunState::Paused,
            spawner,
            games_played: 0,
        }
    }

    pub fn model(&self) -> &GameModel {
        &self.model
    }

    /// Mutable model access for scripted setups
    pub fn model_mut(&mut self) -> &mut GameModel {
        &mut self.model
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.state == RunState::Paused
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.model.is_game_over()
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Flip between paused and running
    pub fn toggle_pause(&mut self) -> RunState {
        self.state = match self.state {
            RunState::Paused => RunState::Running,
            RunState::Running => RunState::Paused,
        };
        log::info!("Game {:?}", self.state);
        self.state
    }

    /// Run one iteration if running. A finished game is replaced by a fresh
    /// one first; a game that ends during this iteration pauses the session.
    pub fn advance(&mut self, keys: KeyStates) -> Option<TickOutcome> {
        if self.is_paused() {
            return None;
        }

        let restarted = self.is_game_over();
        if restarted {
            self.model.reset();
            log::info!("New session started");
        }

        let mut outcome = tick(&mut self.model, keys, &mut self.spawner);
        if restarted {
            outcome.events.insert(0, GameEvent::NewSession);
        }

        if self.is_game_over() {
            self.games_played += 1;
            self.state = RunState::Paused;
        }

        Some(outcome)
    }
}
