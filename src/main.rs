//! Net Fishing headless runner
//!
//! Runs the engine on its worker thread while this thread plays the input
//! side: it feeds autopilot keys, presses "space" between games and prints
//! frames.

mod cli;

use std::io::Write;
use std::sync::Arc;
use std::thread;

use clap::Parser;

use net_fishing::autopilot::Autopilot;
use net_fishing::sim::GameEvent;
use net_fishing::{FrameSink, FrameSnapshot, GameEngine, Result, Settings};

/// Prints frames as JSON lines, or logs the score now and then
struct ConsoleSink {
    json: bool,
    status_interval: u64,
}

impl FrameSink for ConsoleSink {
    fn frame_ready(&self, frame: &FrameSnapshot) {
        if self.json {
            match serde_json::to_string(frame) {
                Ok(line) => {
                    let mut out = std::io::stdout().lock();
                    let _ = writeln!(out, "{}", line);
                }
                Err(e) => log::warn!("Cannot encode frame: {}", e),
            }
        } else if let Some([headline, hint]) = frame.status_lines() {
            log::info!("{} {} ({})", headline, hint, frame.score_text());
        } else if self.status_interval > 0 && frame.iteration % self.status_interval == 0 {
            log::info!("Iteration {}: {}", frame.iteration, frame.score_text());
        }
    }

    fn events(&self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::FishCaught { id } => log::info!("Caught fish {}", id),
                GameEvent::FishMissed { id } => log::info!("Fish {} got away", id),
                _ => {}
            }
        }
    }

    fn help_requested(&self) {
        println!("{}", net_fishing::snapshot::HELP_TEXT);
    }
}

fn run(settings: Settings, json: bool) -> Result<()> {
    let sink = Arc::new(ConsoleSink {
        json,
        status_interval: settings.status_interval_ticks,
    });
    let mut engine = GameEngine::from_settings(&settings, sink);
    engine.request_help();
    engine.start()?;

    let pilot = Autopilot::default();
    // Poll input twice per tick
    let poll = settings.tick_interval() / 2;
    let mut last_caught = 0;

    loop {
        if engine.is_paused() {
            let frame = engine.snapshot();
            if frame.game_over {
                last_caught = frame.fishes_caught;
                if engine.games_played() >= settings.max_sessions {
                    break;
                }
            }
            // Same as pressing space
            engine.toggle_pause();
        }
        if settings.autopilot {
            engine.set_keys(pilot.steer(&engine.snapshot()));
        }
        thread::sleep(poll);
    }

    engine.shutdown()?;
    log::info!(
        "Played {} game(s); last score: {} fish caught",
        engine.games_played(),
        last_caught
    );
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Net Fishing starting...");

    let args = cli::Args::parse();
    let settings = args.settings();
    if let Err(e) = run(settings, args.json) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
