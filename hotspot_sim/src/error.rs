//! Error types for the simulation driver.

use hotspot_core::CoreError;
use hotspot_env::EnvError;
use thiserror::Error;

/// Errors that abort a simulation run.
#[derive(Debug, Error)]
pub enum SimError {
    /// Round count below zero
    #[error("Invalid iteration count: {0}")]
    InvalidIterationCount(i64),

    /// Clustering, assignment or generation failed
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The random context could not be built
    #[error(transparent)]
    Env(#[from] EnvError),

    /// `run` called on a controller that already left `Idle`
    #[error("Simulation already run")]
    AlreadyRun,

    /// A snapshot sink rejected a snapshot
    #[error("Sink error: {0}")]
    Sink(String),

    /// Reading a config file or writing an export failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config or export JSON was malformed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimError {
    /// Creates a sink error.
    pub fn sink(msg: impl Into<String>) -> Self {
        Self::Sink(msg.into())
    }
}
