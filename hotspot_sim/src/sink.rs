//! Snapshot consumers.
//!
//! A sink receives each round's [`Snapshot`] by shared reference and cannot
//! push anything back into the controller except a rejection.

use crate::error::SimError;
use crate::snapshot::Snapshot;

/// Receives one snapshot per simulation round.
pub trait SnapshotSink {
    /// Consumes a round's snapshot. An error aborts the run.
    fn accept(&mut self, snapshot: &Snapshot) -> Result<(), SimError>;
}

impl<S: SnapshotSink + ?Sized> SnapshotSink for &mut S {
    fn accept(&mut self, snapshot: &Snapshot) -> Result<(), SimError> {
        (**self).accept(snapshot)
    }
}

/// `None` discards snapshots.
impl<S: SnapshotSink> SnapshotSink for Option<S> {
    fn accept(&mut self, snapshot: &Snapshot) -> Result<(), SimError> {
        match self {
            Some(sink) => sink.accept(snapshot),
            None => Ok(()),
        }
    }
}

/// Keeps every snapshot in memory.
#[derive(Debug, Default)]
pub struct SnapshotRecorder {
    snapshots: Vec<Snapshot>,
}

impl SnapshotRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded snapshots in arrival order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Consumes the recorder, returning the snapshots.
    pub fn into_snapshots(self) -> Vec<Snapshot> {
        self.snapshots
    }
}

impl SnapshotSink for SnapshotRecorder {
    fn accept(&mut self, snapshot: &Snapshot) -> Result<(), SimError> {
        self.snapshots.push(snapshot.clone());
        Ok(())
    }
}
