//! Error types for the hotspot environment abstraction.

use thiserror::Error;

/// Errors that can occur while building a context.
#[derive(Debug, Error)]
pub enum EnvError {
    /// The OS entropy source could not be read
    #[error("Entropy source unavailable: {0}")]
    EntropyUnavailable(String),
}

impl EnvError {
    /// Creates an entropy error.
    pub fn entropy(msg: impl Into<String>) -> Self {
        Self::EntropyUnavailable(msg.into())
    }
}
