//! JSON exporter for external renderers.
//!
//! Collects the run's snapshots into a single document that a plotting or
//! dashboard front end can replay frame by frame.

use crate::error::SimError;
use crate::sink::SnapshotSink;
use crate::snapshot::Snapshot;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Complete simulation export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimExport {
    /// Master seed used
    pub seed: u64,

    /// Hotspot count (k)
    pub num_hotspots: usize,

    /// Patrol unit count
    pub num_patrol_units: usize,

    /// Initial hotspot identification, before any round
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial: Option<Snapshot>,

    /// One frame per round
    pub frames: Vec<Snapshot>,
}

impl SimExport {
    /// Creates a new export container.
    pub fn new(seed: u64, num_hotspots: usize, num_patrol_units: usize) -> Self {
        Self {
            seed,
            num_hotspots,
            num_patrol_units,
            initial: None,
            frames: Vec::new(),
        }
    }

    /// Sets the pre-round snapshot.
    pub fn set_initial(&mut self, snapshot: Snapshot) {
        self.initial = Some(snapshot);
    }

    /// Adds a frame.
    pub fn add_frame(&mut self, frame: Snapshot) {
        self.frames.push(frame);
    }

    /// Writes to a JSON file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), SimError> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    /// Reads an export back from a JSON file.
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl SnapshotSink for SimExport {
    fn accept(&mut self, snapshot: &Snapshot) -> Result<(), SimError> {
        self.add_frame(snapshot.clone());
        Ok(())
    }
}
