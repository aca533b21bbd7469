//! Round-based simulation controller.
//!
//! ```text
//! Idle ──run()──► Running ──(num_iterations rounds)──► Done
//! ```
//!
//! Each round:
//! 1. inject one incident (uniform, or on a current hotspot)
//! 2. add it to the working set (kept, or dropped after the round)
//! 3. re-cluster with the same k
//! 4. reassign patrol units
//! 5. hand a snapshot to the sink
//!
//! There is no early exit: a run either completes every configured round or
//! aborts on the first error.

use crate::config::{IncidentRetention, IncidentSource, SimConfig};
use crate::error::SimError;
use crate::sink::SnapshotSink;
use crate::snapshot::Snapshot;

use hotspot_core::{
    assign_units, cluster_with, generate_incident, generate_points, Clustering, Incident, Point,
    Unit,
};
use hotspot_env::{EntropyContext, HotspotContext, SeededContext};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Lifecycle of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControllerState {
    Idle,
    Running,
    Done,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Master seed (replay with `--seed`)
    pub seed: u64,

    /// Rounds executed
    pub rounds: usize,

    /// Size of the working set after the last round
    pub final_point_count: usize,

    /// Hotspot centers after the last round
    pub final_centers: Vec<Point>,

    /// Lloyd iterations summed over all clusterings, initial one included
    pub total_kmeans_iterations: usize,
}

/// Drives the incident / cluster / assign loop.
pub struct SimulationController {
    config: SimConfig,
    rounds: usize,
    ctx: Box<dyn HotspotContext>,
    state: ControllerState,
    history: Vec<ControllerState>,

    /// Working incident set
    points: Vec<Point>,

    /// Latest clustering over `points`
    clustering: Clustering,

    /// Latest unit placement
    units: Vec<Unit>,

    total_kmeans_iterations: usize,
}

impl SimulationController {
    /// Creates a controller, choosing the context from `config.random_seed`.
    ///
    /// A missing seed draws one from OS entropy.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        let ctx: Box<dyn HotspotContext> = match config.random_seed {
            Some(seed) => Box::new(SeededContext::new(seed)),
            None => Box::new(EntropyContext::new()?),
        };
        Self::with_context(config, ctx)
    }

    /// Creates a controller with an explicit random context.
    ///
    /// Generates the initial incident set and performs the initial hotspot
    /// identification and unit assignment.
    pub fn with_context(config: SimConfig, mut ctx: Box<dyn HotspotContext>) -> Result<Self, SimError> {
        config.validate()?;
        let rounds = config.rounds()?;

        info!(
            "Initializing simulation: seed={} incidents={} hotspots={} units={} rounds={}",
            ctx.seed(),
            config.num_incidents,
            config.num_hotspots,
            config.num_patrol_units,
            rounds
        );

        let points = generate_points(config.num_incidents, ctx.as_mut())?;
        let clustering = cluster_with(
            &points,
            config.num_hotspots,
            ctx.derive_seed(0),
            &config.kmeans,
        )?;
        let units = assign_units(
            &clustering.centers,
            config.num_patrol_units,
            config.assignment_policy,
            ctx.as_mut(),
        )?;

        if !clustering.converged {
            warn!(
                "Initial clustering hit the iteration bound ({})",
                config.kmeans.max_iterations
            );
        }

        let total_kmeans_iterations = clustering.iterations;

        Ok(Self {
            config,
            rounds,
            ctx,
            state: ControllerState::Idle,
            history: vec![ControllerState::Idle],
            points,
            clustering,
            units,
            total_kmeans_iterations,
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Every state the controller has been in, oldest first.
    pub fn history(&self) -> &[ControllerState] {
        &self.history
    }

    /// Master seed of the random context.
    pub fn seed(&self) -> u64 {
        self.ctx.seed()
    }

    /// Configuration in use.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Current working incident set (empty once `Done`).
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Snapshot of the initial hotspot identification (round 0).
    ///
    /// Only available while `Idle`.
    pub fn initial_snapshot(&self) -> Option<Snapshot> {
        if self.state != ControllerState::Idle {
            return None;
        }
        Some(Snapshot::new(
            0,
            &self.points,
            &self.clustering,
            self.units.clone(),
            None,
        ))
    }

    /// Runs every configured round, handing each snapshot to `sink`.
    ///
    /// Valid once, from `Idle`. On error the run aborts and the controller
    /// stays `Running`; it cannot be restarted.
    pub fn run<S: SnapshotSink + ?Sized>(&mut self, sink: &mut S) -> Result<RunSummary, SimError> {
        if self.state != ControllerState::Idle {
            return Err(SimError::AlreadyRun);
        }
        self.transition(ControllerState::Running);

        info!(
            "Running {} rounds (source={}, retention={}, policy={})",
            self.rounds,
            self.config.incident_source,
            self.config.incident_retention,
            self.config.assignment_policy
        );

        for round in 1..=self.rounds {
            let snapshot = self.step(round)?;
            sink.accept(&snapshot)?;
        }

        self.transition(ControllerState::Done);

        let summary = RunSummary {
            seed: self.ctx.seed(),
            rounds: self.rounds,
            final_point_count: self.points.len(),
            final_centers: self.clustering.centers.clone(),
            total_kmeans_iterations: self.total_kmeans_iterations,
        };

        // Release the working state
        self.points = Vec::new();
        self.units = Vec::new();

        info!(
            "Simulation complete: {} rounds, {} points, {} Lloyd iterations",
            summary.rounds, summary.final_point_count, summary.total_kmeans_iterations
        );

        Ok(summary)
    }

    /// Executes one round and returns its snapshot.
    fn step(&mut self, round: usize) -> Result<Snapshot, SimError> {
        let incident = self.next_incident();
        self.points.push(incident.location);

        let clustering = cluster_with(
            &self.points,
            self.config.num_hotspots,
            self.ctx.derive_seed(round as u64),
            &self.config.kmeans,
        )?;
        let units = assign_units(
            &clustering.centers,
            self.config.num_patrol_units,
            self.config.assignment_policy,
            self.ctx.as_mut(),
        )?;

        if !clustering.converged {
            warn!("Round {}: clustering hit the iteration bound", round);
        }

        let snapshot = Snapshot::new(round, &self.points, &clustering, units.clone(), Some(incident));

        debug!(
            "round={} | incident=({:.3}, {:.3}) | points={} | lloyd_iters={} | inertia={:.4}",
            round,
            incident.location.x,
            incident.location.y,
            self.points.len(),
            clustering.iterations,
            snapshot.metrics.inertia
        );

        if self.config.incident_retention == IncidentRetention::Ephemeral {
            self.points.pop();
        }

        self.total_kmeans_iterations += clustering.iterations;
        self.clustering = clustering;
        self.units = units;

        Ok(snapshot)
    }

    /// Draws this round's incident under the configured source.
    fn next_incident(&mut self) -> Incident {
        match self.config.incident_source {
            IncidentSource::Uniform => generate_incident(self.ctx.as_mut()),
            IncidentSource::AtHotspot => {
                let centers = &self.clustering.centers;
                let spot = centers[self.ctx.below(centers.len())];
                Incident::at(spot, self.ctx.as_mut())
            }
        }
    }

    fn transition(&mut self, next: ControllerState) {
        debug!("Controller state {:?} -> {:?}", self.state, next);
        self.state = next;
        self.history.push(next);
    }
}
