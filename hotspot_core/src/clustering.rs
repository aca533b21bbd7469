//! Lloyd's k-means over an incident set.
//!
//! # Algorithm
//!
//! ```text
//! init:   k distinct input points, picked by ChaCha8(seed)
//! repeat: assign each point to its nearest center (ties -> lowest index)
//!         move each center to the mean of its points
//!         (an empty center keeps its previous coordinates)
//! until:  no center moved more than `tolerance`, or `max_iterations`
//! ```
//!
//! The returned assignment is always recomputed against the returned centers,
//! so every point is owned by its nearest center even when the iteration
//! bound cuts the refinement short.

use crate::error::CoreError;
use crate::geometry::{nearest_center, Point};
use rand::seq::index;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Refinement bounds for Lloyd's algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KMeansConfig {
    /// Upper bound on assign/recompute rounds
    pub max_iterations: usize,

    /// Largest center movement still counted as "unchanged"
    pub tolerance: f64,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self {
            max_iterations: 300,
            tolerance: 1e-9,
        }
    }
}

/// Result of a clustering run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clustering {
    /// One center per cluster index `0..k`
    pub centers: Vec<Point>,

    /// `assignment[i]` is the center index owning point `i`
    pub assignment: Vec<usize>,

    /// Assign/recompute rounds executed
    pub iterations: usize,

    /// False when `max_iterations` was hit before the centers settled
    pub converged: bool,
}

impl Clustering {
    /// Number of clusters.
    pub fn k(&self) -> usize {
        self.centers.len()
    }

    /// Indices of the points owned by `center`.
    pub fn members(&self, center: usize) -> impl Iterator<Item = usize> + '_ {
        self.assignment
            .iter()
            .enumerate()
            .filter(move |&(_, &c)| c == center)
            .map(|(i, _)| i)
    }

    /// Number of points owned by each center.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.k()];
        for &c in &self.assignment {
            sizes[c] += 1;
        }
        sizes
    }
}

/// Clusters `points` into `k` hotspots with the default bounds.
pub fn cluster(points: &[Point], k: usize, seed: u64) -> Result<Clustering, CoreError> {
    cluster_with(points, k, seed, &KMeansConfig::default())
}

/// Clusters `points` into `k` hotspots.
///
/// Identical `(points, k, seed, config)` always produce an identical result.
pub fn cluster_with(
    points: &[Point],
    k: usize,
    seed: u64,
    config: &KMeansConfig,
) -> Result<Clustering, CoreError> {
    CoreError::check_cluster_count(k, points.len())?;

    let mut centers = initial_centers(points, k, seed);
    let mut assignment = vec![0usize; points.len()];
    let mut iterations = 0;
    let mut converged = false;

    while iterations < config.max_iterations {
        iterations += 1;

        assign_points(points, &centers, &mut assignment);
        let updated = recompute_centers(points, &assignment, &centers);

        let max_shift = centers
            .iter()
            .zip(&updated)
            .map(|(old, new)| old.distance(new))
            .fold(0.0, f64::max);

        centers = updated;

        if max_shift <= config.tolerance {
            converged = true;
            break;
        }
    }

    assign_points(points, &centers, &mut assignment);

    Ok(Clustering {
        centers,
        assignment,
        iterations,
        converged,
    })
}

/// Picks `k` distinct input points as starting centers.
fn initial_centers(points: &[Point], k: usize, seed: u64) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    index::sample(&mut rng, points.len(), k)
        .into_iter()
        .map(|i| points[i])
        .collect()
}

fn assign_points(points: &[Point], centers: &[Point], assignment: &mut [usize]) {
    for (slot, point) in assignment.iter_mut().zip(points) {
        // centers is never empty here (k >= 1)
        *slot = nearest_center(centers, point).unwrap_or(0);
    }
}

fn recompute_centers(points: &[Point], assignment: &[usize], previous: &[Point]) -> Vec<Point> {
    previous
        .iter()
        .enumerate()
        .map(|(c, &old)| {
            let members = points
                .iter()
                .zip(assignment)
                .filter(|&(_, &owner)| owner == c)
                .map(|(p, _)| p);
            Point::mean(members).unwrap_or(old)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_points;
    use approx::assert_abs_diff_eq;
    use hotspot_env::SeededContext;
    use proptest::prelude::*;

    fn two_groups() -> Vec<Point> {
        vec![
            Point::new(0.09, 0.10),
            Point::new(0.11, 0.09),
            Point::new(0.10, 0.11),
            Point::new(0.91, 0.90),
            Point::new(0.89, 0.91),
            Point::new(0.90, 0.89),
        ]
    }

    #[test]
    fn test_two_tight_groups() {
        let points = two_groups();
        let result = cluster(&points, 2, 42).unwrap();

        assert_eq!(result.k(), 2);
        assert!(result.converged);

        // Each group shares a center, and the groups do not
        let a = result.assignment[0];
        let b = result.assignment[3];
        assert_ne!(a, b);
        assert!(result.assignment[..3].iter().all(|&c| c == a));
        assert!(result.assignment[3..].iter().all(|&c| c == b));

        assert_abs_diff_eq!(result.centers[a].x, 0.1, epsilon = 1e-9);
        assert_abs_diff_eq!(result.centers[a].y, 0.1, epsilon = 1e-9);
        assert_abs_diff_eq!(result.centers[b].x, 0.9, epsilon = 1e-9);
        assert_abs_diff_eq!(result.centers[b].y, 0.9, epsilon = 1e-9);
    }

    #[test]
    fn test_single_cluster_is_global_mean() {
        let points = generate_points(200, &mut SeededContext::new(5)).unwrap();
        let result = cluster(&points, 1, 0).unwrap();
        let mean = Point::mean(&points).unwrap();

        assert_eq!(result.k(), 1);
        assert!(result.assignment.iter().all(|&c| c == 0));
        assert_abs_diff_eq!(result.centers[0].x, mean.x, epsilon = 1e-12);
        assert_abs_diff_eq!(result.centers[0].y, mean.y, epsilon = 1e-12);
    }

    #[test]
    fn test_k_equals_point_count() {
        let points = two_groups();
        let result = cluster(&points, points.len(), 1).unwrap();

        assert_eq!(result.k(), 6);
        assert_eq!(result.cluster_sizes(), vec![1; 6]);
    }

    #[test]
    fn test_invalid_cluster_count() {
        let points = two_groups();
        assert_eq!(
            cluster(&points, 0, 42),
            Err(CoreError::InvalidClusterCount { k: 0, points: 6 })
        );
        assert_eq!(
            cluster(&points, 7, 42),
            Err(CoreError::InvalidClusterCount { k: 7, points: 6 })
        );
        assert_eq!(
            cluster(&[], 1, 42),
            Err(CoreError::InvalidClusterCount { k: 1, points: 0 })
        );
    }

    #[test]
    fn test_empty_cluster_keeps_center() {
        // Three identical points: only the first duplicate center ever wins
        let points = vec![Point::new(0.5, 0.5); 3];
        let result = cluster(&points, 2, 42).unwrap();

        assert_eq!(result.k(), 2);
        assert_eq!(result.cluster_sizes(), vec![3, 0]);
        assert_eq!(result.centers[1], Point::new(0.5, 0.5));
    }

    #[test]
    fn test_iteration_bound() {
        let points = generate_points(500, &mut SeededContext::new(11)).unwrap();
        let config = KMeansConfig {
            max_iterations: 1,
            tolerance: 0.0,
        };
        let result = cluster_with(&points, 8, 3, &config).unwrap();

        assert_eq!(result.iterations, 1);
        assert_eq!(result.assignment.len(), 500);
    }

    #[test]
    fn test_members_match_sizes() {
        let points = generate_points(100, &mut SeededContext::new(2)).unwrap();
        let result = cluster(&points, 4, 2).unwrap();
        let sizes = result.cluster_sizes();

        for c in 0..4 {
            assert_eq!(result.members(c).count(), sizes[c]);
        }
        assert_eq!(sizes.iter().sum::<usize>(), 100);
    }

    proptest! {
        #[test]
        fn prop_cluster_shape_and_totality(
            seed in any::<u64>(),
            n in 1usize..120,
            k_frac in 0.0f64..1.0,
        ) {
            let points = generate_points(n, &mut SeededContext::new(seed)).unwrap();
            let k = 1 + ((n - 1) as f64 * k_frac) as usize;
            let result = cluster(&points, k, seed).unwrap();

            prop_assert_eq!(result.centers.len(), k);
            prop_assert_eq!(result.assignment.len(), n);
            for (i, &c) in result.assignment.iter().enumerate() {
                prop_assert!(c < k);
                prop_assert_eq!(Some(c), nearest_center(&result.centers, &points[i]));
            }
        }

        #[test]
        fn prop_converged_centers_are_member_means(
            seed in any::<u64>(),
            n in 2usize..80,
            k in 1usize..6,
        ) {
            prop_assume!(k <= n);
            let points = generate_points(n, &mut SeededContext::new(seed)).unwrap();
            let result = cluster(&points, k, seed ^ 1).unwrap();
            prop_assume!(result.converged);

            for c in 0..k {
                let members: Vec<Point> = result.members(c).map(|i| points[i]).collect();
                if let Some(mean) = Point::mean(&members) {
                    prop_assert!(mean.distance(&result.centers[c]) <= 1e-6);
                }
            }
        }

        #[test]
        fn prop_cluster_deterministic(seed in any::<u64>(), k in 1usize..5) {
            let points = generate_points(60, &mut SeededContext::new(seed)).unwrap();
            let a = cluster(&points, k, seed).unwrap();
            let b = cluster(&points, k, seed).unwrap();

            prop_assert_eq!(a, b);
        }
    }
}
