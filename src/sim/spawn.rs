//! Fish and bubble spawning
//!
//! Fish appear more often, and swim faster, as the session goes on.
//! Bubbles appear at a constant rate.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::{Bubble, Fish};
use super::state::GameModel;
use crate::consts::*;

/// Top of the band fish can always swim in (below the deepest wave trough)
pub const MIN_FREE_LEVEL: f64 = (SEA_LEVEL + MAX_SURFACE_AMPLITUDE) as f64;
/// Height of that band
pub const FREE_WATER_RANGE: f64 =
    (SCENE_HEIGHT - SEA_LEVEL - MAX_SURFACE_AMPLITUDE - FISH_HEIGHT) as f64;

/// Per-tick spawn probabilities
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRates {
    pub fish_base: f64,
    pub fish_cap: f64,
    /// Iterations for the fish chance to grow by 1.0
    pub fish_ramp: f64,
    pub bubble: f64,
}

impl Default for SpawnRates {
    fn default() -> Self {
        Self {
            fish_base: FISH_SPAWN_BASE,
            fish_cap: FISH_SPAWN_CAP,
            fish_ramp: FISH_SPAWN_RAMP,
            bubble: BUBBLE_SPAWN_CHANCE,
        }
    }
}

impl SpawnRates {
    /// Nothing ever spawns
    pub fn disabled() -> Self {
        Self {
            fish_base: 0.0,
            fish_cap: 0.0,
            fish_ramp: FISH_SPAWN_RAMP,
            bubble: 0.0,
        }
    }

    /// Chance of a new fish at the given iteration
    pub fn fish_chance(&self, iteration: u64) -> f64 {
        self.fish_cap
            .min(self.fish_base + iteration as f64 / self.fish_ramp)
    }
}

/// Random source plus spawn rules
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: Pcg32,
    pub rates: SpawnRates,
}

impl Spawner {
    pub fn new(rng: Pcg32, rates: SpawnRates) -> Self {
        Self { rng, rates }
    }

    /// Reproducible spawner (tests, replays of a single run)
    pub fn seeded(seed: u64, rates: SpawnRates) -> Self {
        Self::new(Pcg32::seed_from_u64(seed), rates)
    }

    /// Spawner seeded from entropy
    pub fn from_entropy(rates: SpawnRates) -> Self {
        Self::seeded(rand::random(), rates)
    }

    /// Roll for a new fish; adds it to the model on success
    pub fn maybe_spawn_fish<'m>(&mut self, model: &'m mut GameModel) -> Option<&'m Fish> {
        let chance = self.rates.fish_chance(model.iteration_counter);
        if self.rng.random::<f64>() < chance {
            let id = model.next_entity_id();
            let fish = self.generate_fish(id, model.iteration_counter);
            model.fishes.push(fish);
            model.fishes.last()
        } else {
            None
        }
    }

    /// Roll for a new bubble; adds it to the model on success
    pub fn maybe_spawn_bubble<'m>(&mut self, model: &'m mut GameModel) -> Option<&'m Bubble> {
        if self.rng.random::<f64>() < self.rates.bubble {
            let id = model.next_entity_id();
            let x = (self.rng.random::<f64>() * SCENE_WIDTH as f64) as i32;
            model.bubbles.push(Bubble::new(id, x));
            model.bubbles.last()
        } else {
            None
        }
    }

    /// Build a fish entering at a random side, heading for a random depth
    pub fn generate_fish(&mut self, id: u32, iteration: u64) -> Fish {
        let from_left = self.rng.random_bool(0.5);
        let half_width = (FISH_WIDTH / 2) as f64;
        let start_x = if from_left {
            -half_width
        } else {
            (SCENE_WIDTH - 1) as f64 + half_width
        };
        let start_y = MIN_FREE_LEVEL + self.rng.random::<f64>() * FREE_WATER_RANGE;
        let target_y = MIN_FREE_LEVEL + self.rng.random::<f64>() * FREE_WATER_RANGE;

        // Top speed grows by 1/20 px per tick every 20 seconds
        let speed_bonus = (iteration / ITERATIONS_PER_SEC as u64 / 20) as f64;
        let speed = FISH_BASE_SPEED + self.rng.random::<f64>() * speed_bonus;
        let vx = if from_left { speed } else { -speed };

        // Reach target_y after crossing the whole scene
        let crossing_ticks = (SCENE_WIDTH + FISH_WIDTH) as f64 / vx.abs();
        let vy = (target_y - start_y) / crossing_ticks;

        Fish::new(id, DVec2::new(start_x, start_y), DVec2::new(vx, vy))
    }
}
