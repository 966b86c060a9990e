//! One simulation iteration
//!
//! Advances the whole world by a single fixed tick.

use super::collision::{bubble_surfaced, fish_caught, fish_escaped};
use super::entity::Mover;
use super::spawn::Spawner;
use super::state::{GameEvent, GameModel, KeyStates};

/// What happened during a tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    pub events: Vec<GameEvent>,
}

impl TickOutcome {
    pub fn caught(&self) -> usize {
        self.count(|e| matches!(e, GameEvent::FishCaught { .. }))
    }

    pub fn missed(&self) -> usize {
        self.count(|e| matches!(e, GameEvent::FishMissed { .. }))
    }

    fn count(&self, pred: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

/// Advance the model by one tick using a snapshot of the movement keys
pub fn tick(model: &mut GameModel, keys: KeyStates, spawner: &mut Spawner) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    model.boat.make_move(&keys, &model.surface);
    model.surface.advance();

    // Net position is fixed for the rest of the tick
    let net = model.net_center();
    let mut caught = 0;
    let mut missed = 0;
    model.fishes.retain_mut(|fish| {
        fish.step();
        if fish_caught(fish, net) {
            log::debug!("Fish {} caught at {:?}", fish.id, fish.visible_pos());
            outcome.events.push(GameEvent::FishCaught { id: fish.id });
            caught += 1;
            false
        } else if fish_escaped(fish) {
            log::debug!("Fish {} got away", fish.id);
            outcome.events.push(GameEvent::FishMissed { id: fish.id });
            missed += 1;
            false
        } else {
            true
        }
    });
    model.fishes_caught += caught;
    model.fishes_missed += missed;

    let surface = model.surface;
    model.bubbles.retain_mut(|bubble| {
        bubble.step();
        if bubble_surfaced(bubble, &surface) {
            outcome.events.push(GameEvent::BubbleSurfaced { id: bubble.id });
            false
        } else {
            true
        }
    });

    if let Some(fish) = spawner.maybe_spawn_fish(model) {
        log::debug!("Fish {} spawned, vel {:?}", fish.id, fish.body.vel());
        outcome.events.push(GameEvent::FishSpawned {
            id: fish.id,
            from_left: fish.heading_right(),
        });
    }
    if let Some(bubble) = spawner.maybe_spawn_bubble(model) {
        outcome.events.push(GameEvent::BubbleSpawned { id: bubble.id });
    }

    model.iteration_counter += 1;

    if missed > 0 && model.is_game_over() {
        log::info!(
            "Game over after {} iterations: {} fish caught",
            model.iteration_counter,
            model.fishes_caught
        );
        outcome.events.push(GameEvent::GameOver {
            caught: model.fishes_caught,
        });
    }

    log::trace!(
        "Tick {}: {} fish, {} bubbles",
        model.iteration_counter,
        model.fishes.len(),
        model.bubbles.len()
    );

    outcome
}
