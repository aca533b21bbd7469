//! Hotspot Patrol Simulation
//!
//! Round-based driver around `hotspot_core`: an initial incident set is
//! clustered into hotspots, patrol units are sent to their nearest hotspot,
//! and every round a new incident perturbs the scene before clustering and
//! assignment are redone.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  SimulationController                    │
//! │                                                          │
//! │  HotspotContext ──► incident ──► cluster ──► assign      │
//! │  (seeded RNG)          ▲                        │        │
//! │                        └──── next round ◄───────┤        │
//! │                                                 ▼        │
//! │                                            Snapshot      │
//! └─────────────────────────────────────────────────┬────────┘
//!                                                   ▼
//!                             SnapshotSink (recorder / JSON export)
//! ```
//!
//! Sinks only ever see `&Snapshot`; nothing flows back into the controller.
//!
//! # Usage
//!
//! ```no_run
//! use hotspot_sim::{SimConfig, SimulationController, SnapshotRecorder};
//!
//! let config = SimConfig {
//!     random_seed: Some(42),
//!     num_iterations: 5,
//!     ..Default::default()
//! };
//!
//! let mut controller = SimulationController::new(config)?;
//! let mut recorder = SnapshotRecorder::new();
//! let summary = controller.run(&mut recorder)?;
//! assert_eq!(recorder.len(), summary.rounds);
//! # Ok::<(), hotspot_sim::SimError>(())
//! ```

mod config;
mod controller;
mod error;
mod exporter;
mod sink;
mod snapshot;

pub use config::{IncidentRetention, IncidentSource, SimConfig};
pub use controller::{ControllerState, RunSummary, SimulationController};
pub use error::SimError;
pub use exporter::SimExport;
pub use sink::{SnapshotRecorder, SnapshotSink};
pub use snapshot::{route_edges, RouteEdge, Snapshot};
