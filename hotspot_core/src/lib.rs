//! Hotspot Core - incident clustering and patrol assignment
//!
//! The algorithmic half of the patrol simulation:
//! 1. **Generator**: synthetic incident locations in the unit square
//! 2. **Clustering**: Lloyd's k-means over the incident set (the "hotspots")
//! 3. **Assignment**: each patrol unit is sent to its nearest hotspot
//!
//! All randomness is drawn from a [`hotspot_env::HotspotContext`] or from an
//! explicit seed, never from global state.

pub mod error;
pub mod geometry;
pub mod generator;
pub mod clustering;
pub mod assignment;
pub mod metrics;

// Re-export key types for convenience
pub use error::CoreError;
pub use geometry::{nearest_center, Point, PointSet};
pub use generator::{generate_incident, generate_points, Incident, SECONDS_PER_DAY};
pub use clustering::{cluster, cluster_with, Clustering, KMeansConfig};
pub use assignment::{assign_units, AssignmentPolicy, Unit};
pub use metrics::ClusterMetrics;
