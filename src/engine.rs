//! Game engine: runs the session on a dedicated worker thread
//!
//! The worker is the only writer of the session. Input and render threads
//! talk to it through:
//! - a shared key-state array, copied once at the start of every tick
//! - `toggle_pause`, which wakes the worker through a condition variable
//! - `FrameSnapshot`s, copied under the lock and handed to a `FrameSink`
//!
//! While paused the worker blocks on the condition variable; nothing polls.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex, MutexGuard};

use crate::error::{Error, Result};
use crate::settings::Settings;
use crate::sim::{ControlKey, GameEvent, KeyStates, RunState, Session, SpawnRates, Spawner};
use crate::snapshot::FrameSnapshot;

/// Receiver of engine output (the render collaborator)
pub trait FrameSink: Send + Sync {
    /// A new frame is ready to be drawn
    fn frame_ready(&self, frame: &FrameSnapshot);

    /// Events of the tick that produced the next frame
    fn events(&self, _events: &[GameEvent]) {}

    /// The player asked for help
    fn help_requested(&self) {}
}

struct Shared {
    session: Mutex<Session>,
    wake: Condvar,
    keys: Mutex<KeyStates>,
    shutdown: AtomicBool,
    interval: Duration,
    sink: Arc<dyn FrameSink>,
}

impl Shared {
    #[inline]
    fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::Acquire)
    }

    /// Hand a frame to the sink without holding the session lock
    fn publish(&self, session: &mut MutexGuard<'_, Session>, events: &[GameEvent]) {
        let frame = FrameSnapshot::capture(session);
        MutexGuard::unlocked(session, || {
            if !events.is_empty() {
                self.sink.events(events);
            }
            self.sink.frame_ready(&frame);
        });
    }
}

/// Owner of the simulation worker
pub struct GameEngine {
    shared: Arc<Shared>,
    worker: Option<JoinHandle<()>>,
}

impl GameEngine {
    pub fn new(session: Session, interval: Duration, sink: Arc<dyn FrameSink>) -> Self {
        Self {
            shared: Arc::new(Shared {
                session: Mutex::new(session),
                wake: Condvar::new(),
                keys: Mutex::new(KeyStates::default()),
                shutdown: AtomicBool::new(false),
                interval,
                sink,
            }),
            worker: None,
        }
    }

    /// Engine with the fixed game rules, seeded and paced by `settings`
    pub fn from_settings(settings: &Settings, sink: Arc<dyn FrameSink>) -> Self {
        let spawner = match settings.seed {
            Some(seed) => Spawner::seeded(seed, SpawnRates::default()),
            None => Spawner::from_entropy(SpawnRates::default()),
        };
        let mut session = Session::new(spawner);
        if settings.start_running {
            session.toggle_pause();
        }
        Self::new(session, settings.tick_interval(), sink)
    }

    /// Spawn the worker thread
    pub fn start(&mut self) -> Result<()> {
        if self.worker.is_some() {
            return Err(Error::AlreadyRunning);
        }
        let shared = Arc::clone(&self.shared);
        let handle = thread::Builder::new()
            .name("simulation".into())
            .spawn(move || run_worker(&shared))?;
        self.worker = Some(handle);
        Ok(())
    }

    /// Stop the worker and wait for it to exit
    pub fn shutdown(&mut self) -> Result<()> {
        {
            // Set under the lock so a worker about to wait cannot miss it
            let _session = self.shared.session.lock();
            self.shared.shutdown.store(true, Ordering::Release);
            self.shared.wake.notify_all();
        }
        match self.worker.take() {
            Some(handle) => handle.join().map_err(|_| Error::WorkerPanicked),
            None => Ok(()),
        }
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    pub fn set_key(&self, key: ControlKey, pressed: bool) {
        self.shared.keys.lock().set(key, pressed);
    }

    pub fn set_keys(&self, keys: KeyStates) {
        *self.shared.keys.lock() = keys;
    }

    pub fn keys(&self) -> KeyStates {
        *self.shared.keys.lock()
    }

    /// Flip pause state and wake the worker
    pub fn toggle_pause(&self) -> RunState {
        let mut session = self.shared.session.lock();
        let state = session.toggle_pause();
        self.shared.wake.notify_all();
        state
    }

    pub fn request_help(&self) {
        self.shared.sink.help_requested();
    }

    /// Consistent copy of the current state
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(&self.shared.session.lock())
    }

    pub fn is_paused(&self) -> bool {
        self.shared.session.lock().is_paused()
    }

    pub fn is_game_over(&self) -> bool {
        self.shared.session.lock().is_game_over()
    }

    pub fn games_played(&self) -> u32 {
        self.shared.session.lock().games_played()
    }
}

impl Drop for GameEngine {
    fn drop(&mut self) {
        if self.worker.is_some() {
            if let Err(e) = self.shutdown() {
                log::error!("Engine shutdown failed: {}", e);
            }
        }
    }
}

fn run_worker(shared: &Shared) {
    log::info!("Simulation worker started ({:?} per tick)", shared.interval);
    let mut session = shared.session.lock();
    let mut running = false;

    loop {
        if session.is_paused() {
            if running {
                // Show the pause message
                shared.publish(&mut session, &[]);
                running = false;
            }
            while session.is_paused() && !shared.is_shutdown() {
                shared.wake.wait(&mut session);
            }
        }
        if shared.is_shutdown() {
            break;
        }
        running = true;

        let keys = *shared.keys.lock();
        let events = session
            .advance(keys)
            .map(|outcome| outcome.events)
            .unwrap_or_default();
        let game_ended = session.is_paused();
        shared.publish(&mut session, &events);

        if game_ended {
            // The frame above already shows the game over message
            running = false;
            continue;
        }

        // Fixed delay between ticks; a toggle or shutdown cuts it short
        let deadline = Instant::now() + shared.interval;
        while !session.is_paused() && !shared.is_shutdown() {
            if shared.wake.wait_until(&mut session, deadline).timed_out() {
                break;
            }
        }
    }

    log::info!("Simulation worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_FISHES_MISSED;
    use crate::sim::Fish;
    use glam::DVec2;

    #[derive(Default)]
    struct Recorder {
        frames: Mutex<Vec<FrameSnapshot>>,
        events: Mutex<Vec<GameEvent>>,
        help: AtomicBool,
    }

    impl FrameSink for Recorder {
        fn frame_ready(&self, frame: &FrameSnapshot) {
            self.frames.lock().push(frame.clone());
        }

        fn events(&self, events: &[GameEvent]) {
            self.events.lock().extend_from_slice(events);
        }

        fn help_requested(&self) {
            self.help.store(true, Ordering::SeqCst);
        }
    }

    fn quiet_engine(recorder: &Arc<Recorder>) -> GameEngine {
        let session = Session::new(Spawner::seeded(8, SpawnRates::disabled()));
        GameEngine::new(session, Duration::from_millis(1), recorder.clone())
    }

    fn wait_for(what: &str, cond: impl Fn() -> bool) {
        let deadline = Instant::now() + Duration::from_secs(10);
        while !cond() {
            assert!(Instant::now() < deadline, "timed out waiting for {}", what);
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn test_paused_engine_does_not_tick() {
        let recorder = Arc::new(Recorder::default());
        let mut engine = quiet_engine(&recorder);
        engine.start().unwrap();
        thread::sleep(Duration::from_millis(30));
        assert_eq!(engine.snapshot().iteration, 0);
        assert!(recorder.frames.lock().is_empty());
        engine.shutdown().unwrap();
    }

    #[test]
    fn test_run_then_pause() {
        let recorder = Arc::new(Recorder::default());
        let mut engine = quiet_engine(&recorder);
        engine.start().unwrap();

        assert_eq!(engine.toggle_pause(), RunState::Running);
        wait_for("ten ticks", || engine.snapshot().iteration >= 10);

        assert_eq!(engine.toggle_pause(), RunState::Paused);
        wait_for("pause frame", || {
            recorder.frames.lock().last().is_some_and(|f| f.paused)
        });
        let stopped_at = engine.snapshot().iteration;
        thread::sleep(Duration::from_millis(20));
        assert_eq!(engine.snapshot().iteration, stopped_at);

        let frames = recorder.frames.lock();
        // One frame per tick plus the pause frame
        assert_eq!(frames.len() as u64, stopped_at + 1);
        assert!(frames.windows(2).all(|w| w[0].iteration <= w[1].iteration));
        drop(frames);

        engine.shutdown().unwrap();
        assert!(!engine.is_running());
    }

    #[test]
    fn test_keys_reach_the_boat() {
        let recorder = Arc::new(Recorder::default());
        let mut engine = quiet_engine(&recorder);
        engine.set_key(ControlKey::Down, true);
        assert!(engine.keys().is_pressed(ControlKey::Down));
        engine.start().unwrap();
        engine.toggle_pause();
        wait_for("net at the bottom", || {
            let frame = engine.snapshot();
            frame.boat.net_y - frame.boat.y == 399
        });
        engine.shutdown().unwrap();
    }

    #[test]
    fn test_game_over_pauses_engine() {
        let recorder = Arc::new(Recorder::default());
        let mut session = Session::new(Spawner::seeded(8, SpawnRates::disabled()));
        let model = session.model_mut();
        model.fishes_missed = MAX_FISHES_MISSED - 1;
        let id = model.next_entity_id();
        model
            .fishes
            .push(Fish::new(id, DVec2::new(-12.0, 450.0), DVec2::new(-2.2, 0.0)));
        session.toggle_pause();

        let mut engine = GameEngine::new(session, Duration::from_millis(1), recorder.clone());
        engine.start().unwrap();
        wait_for("game over", || engine.is_paused());

        assert!(engine.is_game_over());
        assert_eq!(engine.games_played(), 1);
        let last = recorder.frames.lock().last().cloned().expect("a frame");
        assert!(last.paused && last.game_over);
        assert!(recorder
            .events
            .lock()
            .contains(&GameEvent::GameOver { caught: 0 }));

        // Resuming starts a fresh game
        engine.toggle_pause();
        wait_for("new session", || {
            recorder.events.lock().contains(&GameEvent::NewSession)
        });
        assert_eq!(engine.snapshot().fishes_missed, 0);
        engine.shutdown().unwrap();
    }

    #[test]
    fn test_start_twice_fails() {
        let recorder = Arc::new(Recorder::default());
        let mut engine = quiet_engine(&recorder);
        engine.start().unwrap();
        assert!(matches!(engine.start(), Err(Error::AlreadyRunning)));
        engine.shutdown().unwrap();
        // Shutting down twice is harmless
        engine.shutdown().unwrap();
    }

    #[test]
    fn test_help_is_forwarded() {
        let recorder = Arc::new(Recorder::default());
        let engine = quiet_engine(&recorder);
        engine.request_help();
        assert!(recorder.help.load(Ordering::SeqCst));
    }
}
