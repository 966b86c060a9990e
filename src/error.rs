//! Error types for the engine shell.
//!
//! The simulation itself cannot fail; only threads and settings files can.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Engine already running")]
    AlreadyRunning,

    #[error("Simulation worker panicked")]
    WorkerPanicked,
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Settings(err.to_string())
    }
}
