//! Simulation configuration.

use crate::error::SimError;
use hotspot_core::{AssignmentPolicy, CoreError, KMeansConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Where each round's incident comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentSource {
    /// Uniform in the unit square
    #[default]
    Uniform,

    /// On a uniformly chosen current hotspot center
    AtHotspot,
}

/// Whether a round's incident stays in the working set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentRetention {
    /// Joins the working set for all later rounds
    #[default]
    Permanent,

    /// Only clustered in the round that produced it
    Ephemeral,
}

impl IncidentSource {
    /// Returns the source name.
    pub fn name(&self) -> &'static str {
        match self {
            IncidentSource::Uniform => "uniform",
            IncidentSource::AtHotspot => "at_hotspot",
        }
    }
}

impl IncidentRetention {
    /// Returns the retention name.
    pub fn name(&self) -> &'static str {
        match self {
            IncidentRetention::Permanent => "permanent",
            IncidentRetention::Ephemeral => "ephemeral",
        }
    }
}

impl std::fmt::Display for IncidentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::fmt::Display for IncidentRetention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for IncidentSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "uniform" | "random" => Ok(IncidentSource::Uniform),
            "at_hotspot" | "hotspot" => Ok(IncidentSource::AtHotspot),
            _ => Err(format!("Unknown incident source: {}", s)),
        }
    }
}

impl std::str::FromStr for IncidentRetention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "permanent" => Ok(IncidentRetention::Permanent),
            "ephemeral" => Ok(IncidentRetention::Ephemeral),
            _ => Err(format!("Unknown incident retention: {}", s)),
        }
    }
}

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Size of the initial incident set
    pub num_incidents: usize,

    /// Number of hotspots (k)
    pub num_hotspots: usize,

    /// Number of patrol units
    pub num_patrol_units: usize,

    /// Number of simulation rounds (must not be negative)
    pub num_iterations: i64,

    /// Master seed (None = seeded from OS entropy)
    pub random_seed: Option<u64>,

    /// Unit distribution policy
    pub assignment_policy: AssignmentPolicy,

    /// Incident sourcing policy
    pub incident_source: IncidentSource,

    /// Incident retention policy
    pub incident_retention: IncidentRetention,

    /// Lloyd's algorithm bounds
    pub kmeans: KMeansConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_incidents: 1000,
            num_hotspots: 3,
            num_patrol_units: 5,
            num_iterations: 10,
            random_seed: Some(42),
            assignment_policy: AssignmentPolicy::default(),
            incident_source: IncidentSource::default(),
            incident_retention: IncidentRetention::default(),
            kmeans: KMeansConfig::default(),
        }
    }
}

impl SimConfig {
    /// Loads a config from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Checks every count before any work is done.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.num_incidents == 0 {
            return Err(CoreError::InvalidPointCount(self.num_incidents).into());
        }
        CoreError::check_cluster_count(self.num_hotspots, self.num_incidents)?;
        self.rounds()?;
        Ok(())
    }

    /// Number of rounds as an unsigned count.
    pub fn rounds(&self) -> Result<usize, SimError> {
        usize::try_from(self.num_iterations)
            .map_err(|_| SimError::InvalidIterationCount(self.num_iterations))
    }
}
