//! Error types for clustering and assignment.

use thiserror::Error;

/// Errors raised at the boundary of a core operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// `k` must lie in `1..=points`
    #[error("Invalid cluster count: k={k} for {points} points")]
    InvalidClusterCount { k: usize, points: usize },

    /// Assignment requested against an empty center list
    #[error("No centers available for assignment")]
    NoCentersAvailable,

    /// The generator was asked for zero points
    #[error("Invalid point count: {0}")]
    InvalidPointCount(usize),
}

impl CoreError {
    /// Creates a cluster-count error.
    pub fn cluster_count(k: usize, points: usize) -> Self {
        Self::InvalidClusterCount { k, points }
    }

    /// Checks `1 <= k <= points`.
    pub fn check_cluster_count(k: usize, points: usize) -> Result<(), Self> {
        if k == 0 || k > points {
            return Err(Self::cluster_count(k, points));
        }
        Ok(())
    }
}
