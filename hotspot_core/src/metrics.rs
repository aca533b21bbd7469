//! Cluster quality metrics.
//!
//! - **Cluster sizes**: points owned by each hotspot
//! - **Inertia**: within-cluster sum of squared distances,
//!   `J = Σ_k Σ_{x ∈ C_k} ||x - μ_k||²`
//! - **Empty clusters**: centers that kept their previous coordinates
//!   because no point chose them

use crate::clustering::Clustering;
use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Summary statistics for one clustering result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterMetrics {
    /// Points per center, indexed like `Clustering::centers`
    pub cluster_sizes: Vec<usize>,

    /// Within-cluster sum of squared distances
    pub inertia: f64,

    /// Number of centers with no points
    pub empty_clusters: usize,

    /// Lloyd rounds executed
    pub iterations: usize,

    /// Whether the centers settled within tolerance
    pub converged: bool,
}

impl ClusterMetrics {
    /// Computes metrics for `clustering` over the points it was built from.
    pub fn compute(points: &[Point], clustering: &Clustering) -> Self {
        let cluster_sizes = clustering.cluster_sizes();

        let inertia = points
            .iter()
            .zip(&clustering.assignment)
            .map(|(p, &c)| (p.coords() - clustering.centers[c].coords()).norm_squared())
            .sum();

        let empty_clusters = cluster_sizes.iter().filter(|&&n| n == 0).count();

        Self {
            cluster_sizes,
            inertia,
            empty_clusters,
            iterations: clustering.iterations,
            converged: clustering.converged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clustering::cluster;
    use approx::assert_relative_eq;

    #[test]
    fn test_inertia_single_cluster() {
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        let clustering = cluster(&points, 1, 42).unwrap();
        let metrics = ClusterMetrics::compute(&points, &clustering);

        // Center at (0.5, 0), each point contributes 0.25
        assert_relative_eq!(metrics.inertia, 0.5);
        assert_eq!(metrics.cluster_sizes, vec![2]);
        assert_eq!(metrics.empty_clusters, 0);
        assert!(metrics.converged);
    }

    #[test]
    fn test_inertia_zero_when_k_equals_n() {
        let points = vec![Point::new(0.1, 0.2), Point::new(0.7, 0.4), Point::new(0.3, 0.9)];
        let clustering = cluster(&points, 3, 7).unwrap();
        let metrics = ClusterMetrics::compute(&points, &clustering);

        assert_eq!(metrics.inertia, 0.0);
        assert_eq!(metrics.cluster_sizes, vec![1, 1, 1]);
    }

    #[test]
    fn test_empty_cluster_counted() {
        let points = vec![Point::new(0.5, 0.5); 4];
        let clustering = cluster(&points, 3, 1).unwrap();
        let metrics = ClusterMetrics::compute(&points, &clustering);

        assert_eq!(metrics.empty_clusters, 2);
        assert_eq!(metrics.inertia, 0.0);
    }
}
