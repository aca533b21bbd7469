//! Per-round geometry handed to renderers.

use hotspot_core::{ClusterMetrics, Clustering, Incident, Point, Unit};
use serde::{Deserialize, Serialize};

/// A unit-to-center line in the route overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEdge {
    pub unit: usize,
    pub center: usize,
}

/// Read-only bundle describing one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Round index (0 = initial hotspot identification)
    pub round: usize,

    /// Full working incident set clustered this round
    pub points: Vec<Point>,

    /// Hotspot centers
    pub centers: Vec<Point>,

    /// Patrol units with positions
    pub units: Vec<Unit>,

    /// Incident injected this round
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident: Option<Incident>,

    /// Every (unit, center) pair
    pub edges: Vec<RouteEdge>,

    /// Cluster summary for this round
    pub metrics: ClusterMetrics,
}

impl Snapshot {
    /// Builds a snapshot from a round's clustering and assignment.
    pub fn new(
        round: usize,
        points: &[Point],
        clustering: &Clustering,
        units: Vec<Unit>,
        incident: Option<Incident>,
    ) -> Self {
        let edges = route_edges(units.len(), clustering.k());

        Self {
            round,
            points: points.to_vec(),
            centers: clustering.centers.clone(),
            units,
            incident,
            edges,
            metrics: ClusterMetrics::compute(points, clustering),
        }
    }
}

/// All `num_units * num_centers` unit-center pairs, unit-major.
pub fn route_edges(num_units: usize, num_centers: usize) -> Vec<RouteEdge> {
    (0..num_units)
        .flat_map(|unit| (0..num_centers).map(move |center| RouteEdge { unit, center }))
        .collect()
}
