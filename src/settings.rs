//! Runtime settings
//!
//! Stored as JSON. Game rules are fixed; these only shape how the engine runs.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::ITERATIONS_PER_SEC;
use crate::error::{Error, Result};

/// Engine/runner settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulation cadence
    pub iterations_per_sec: u32,
    /// RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Begin running instead of paused
    pub start_running: bool,
    /// Let the demo autopilot steer the boat
    pub autopilot: bool,
    /// Stop the runner after this many finished games
    pub max_sessions: u32,
    /// Log the score line every N iterations (0 = never)
    pub status_interval_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            iterations_per_sec: ITERATIONS_PER_SEC,
            seed: None,
            start_running: false,
            autopilot: true,
            max_sessions: 1,
            status_interval_ticks: 100,
        }
    }
}

impl Settings {
    /// Pause between two iterations
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(1000 / self.iterations_per_sec.max(1) as u64)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<()> {
        if self.iterations_per_sec == 0 || self.iterations_per_sec > 1000 {
            return Err(Error::Settings(format!(
                "iterations_per_sec must be in 1..=1000, got {}",
                self.iterations_per_sec
            )));
        }
        Ok(())
    }

    /// Load settings from a file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read {}: {}; using default settings", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
