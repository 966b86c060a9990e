//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use net_fishing::Settings;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "net-fishing")]
#[command(about = "Headless Net Fishing: the autopilot plays until the game is over", long_about = None)]
pub struct Args {
    /// Settings file (JSON)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// RNG seed for a reproducible run
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Simulation cadence
    #[arg(long, value_name = "N")]
    pub ticks_per_sec: Option<u32>,

    /// Number of games to play before exiting
    #[arg(long, value_name = "N")]
    pub sessions: Option<u32>,

    /// Disable the autopilot (the boat only drifts)
    #[arg(long)]
    pub manual: bool,

    /// Print every frame as a JSON line on stdout
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Settings from the config file (if any) with command-line overrides applied
    pub fn settings(&self) -> Settings {
        let mut settings = match &self.config {
            Some(path) => Settings::load_from(path),
            None => Settings::default(),
        };
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        if let Some(rate) = self.ticks_per_sec {
            settings.iterations_per_sec = rate.clamp(1, 1000);
        }
        if let Some(sessions) = self.sessions {
            settings.max_sessions = sessions.max(1);
        }
        if self.manual {
            settings.autopilot = false;
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "net-fishing",
            "--seed",
            "7",
            "--ticks-per-sec",
            "0",
            "--sessions",
            "3",
            "--manual",
        ]);
        let settings = args.settings();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.iterations_per_sec, 1);
        assert_eq!(settings.max_sessions, 3);
        assert!(!settings.autopilot);
        assert!(!args.json);
    }

    #[test]
    fn test_no_args_gives_defaults() {
        let args = Args::parse_from(["net-fishing"]);
        assert_eq!(args.settings(), Settings::default());
    }
}
