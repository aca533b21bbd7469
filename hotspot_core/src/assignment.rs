//! Patrol unit assignment.
//!
//! Every unit ends up parked on one hotspot center. The canonical policy,
//! [`AssignmentPolicy::Nearest`], draws a random reference location per unit
//! (where the unit "currently is") and sends it to the closest center.

use crate::error::CoreError;
use crate::geometry::{nearest_center, Point};
use hotspot_env::HotspotContext;
use serde::{Deserialize, Serialize};

/// How units are distributed over centers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentPolicy {
    /// Random reference point per unit, nearest center wins
    #[default]
    Nearest,

    /// Unit `i` goes to center `i % k`.
    ///
    /// Compatibility mode for even spreading. Remainder units are spread over
    /// the first centers rather than dropped.
    RoundRobin,
}

impl AssignmentPolicy {
    /// Returns the policy name.
    pub fn name(&self) -> &'static str {
        match self {
            AssignmentPolicy::Nearest => "nearest",
            AssignmentPolicy::RoundRobin => "round_robin",
        }
    }
}

impl std::fmt::Display for AssignmentPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for AssignmentPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nearest" => Ok(AssignmentPolicy::Nearest),
            "round_robin" | "roundrobin" | "even" => Ok(AssignmentPolicy::RoundRobin),
            _ => Err(format!("Unknown assignment policy: {}", s)),
        }
    }
}

/// A patrol unit parked on a hotspot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Unit index `0..num_units`
    pub id: usize,

    /// Index of the center the unit was sent to
    pub center: usize,

    /// Current position (the center's coordinates)
    pub position: Point,

    /// Location the assignment was computed from
    pub reference: Point,
}

/// Assigns `num_units` units to `centers`.
///
/// Always returns exactly `num_units` units. Fails with
/// [`CoreError::NoCentersAvailable`] when `centers` is empty, even for zero
/// units.
pub fn assign_units<C: HotspotContext + ?Sized>(
    centers: &[Point],
    num_units: usize,
    policy: AssignmentPolicy,
    ctx: &mut C,
) -> Result<Vec<Unit>, CoreError> {
    if centers.is_empty() {
        return Err(CoreError::NoCentersAvailable);
    }

    let mut units = Vec::with_capacity(num_units);
    for id in 0..num_units {
        let (center, reference) = match policy {
            AssignmentPolicy::Nearest => {
                let reference = Point::random(ctx);
                let center =
                    nearest_center(centers, &reference).ok_or(CoreError::NoCentersAvailable)?;
                (center, reference)
            }
            AssignmentPolicy::RoundRobin => {
                let center = id % centers.len();
                (center, centers[center])
            }
        };

        units.push(Unit {
            id,
            center,
            position: centers[center],
            reference,
        });
    }

    Ok(units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotspot_env::SeededContext;
    use proptest::prelude::*;

    fn centers() -> Vec<Point> {
        vec![
            Point::new(0.2, 0.2),
            Point::new(0.8, 0.2),
            Point::new(0.5, 0.8),
        ]
    }

    #[test]
    fn test_zero_units_is_empty() {
        let mut ctx = SeededContext::new(42);
        let units = assign_units(&centers(), 0, AssignmentPolicy::Nearest, &mut ctx).unwrap();
        assert!(units.is_empty());
    }

    #[test]
    fn test_no_centers() {
        let mut ctx = SeededContext::new(42);
        assert_eq!(
            assign_units(&[], 5, AssignmentPolicy::Nearest, &mut ctx),
            Err(CoreError::NoCentersAvailable)
        );
        assert_eq!(
            assign_units(&[], 0, AssignmentPolicy::RoundRobin, &mut ctx),
            Err(CoreError::NoCentersAvailable)
        );
    }

    #[test]
    fn test_nearest_positions_are_centers() {
        let centers = centers();
        let mut ctx = SeededContext::new(42);
        let units = assign_units(&centers, 5, AssignmentPolicy::Nearest, &mut ctx).unwrap();

        assert_eq!(units.len(), 5);
        for (i, unit) in units.iter().enumerate() {
            assert_eq!(unit.id, i);
            assert_eq!(unit.position, centers[unit.center]);
        }
    }

    #[test]
    fn test_round_robin_keeps_remainder() {
        // 5 units over 3 centers: floor division would lose 2
        let centers = centers();
        let mut ctx = SeededContext::new(42);
        let units = assign_units(&centers, 5, AssignmentPolicy::RoundRobin, &mut ctx).unwrap();

        let assigned: Vec<usize> = units.iter().map(|u| u.center).collect();
        assert_eq!(assigned, vec![0, 1, 2, 0, 1]);
    }

    #[test]
    fn test_round_robin_does_not_consume_randomness() {
        let mut ctx1 = SeededContext::new(42);
        let mut ctx2 = SeededContext::new(42);
        let _ = assign_units(&centers(), 10, AssignmentPolicy::RoundRobin, &mut ctx1).unwrap();

        assert_eq!(ctx1.unit_f64(), ctx2.unit_f64());
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("nearest".parse::<AssignmentPolicy>(), Ok(AssignmentPolicy::Nearest));
        assert_eq!("Round_Robin".parse::<AssignmentPolicy>(), Ok(AssignmentPolicy::RoundRobin));
        assert!("floor".parse::<AssignmentPolicy>().is_err());
        assert_eq!(AssignmentPolicy::default(), AssignmentPolicy::Nearest);
    }

    proptest! {
        #[test]
        fn prop_unit_count_is_exact(
            seed in any::<u64>(),
            n in 0usize..64,
            k in 1usize..10,
            round_robin in any::<bool>(),
        ) {
            let mut ctx = SeededContext::new(seed);
            let centers: Vec<Point> = (0..k).map(|_| Point::random(&mut ctx)).collect();
            let policy = if round_robin {
                AssignmentPolicy::RoundRobin
            } else {
                AssignmentPolicy::Nearest
            };

            let units = assign_units(&centers, n, policy, &mut ctx).unwrap();
            prop_assert_eq!(units.len(), n);
        }

        #[test]
        fn prop_no_center_strictly_closer(seed in any::<u64>(), k in 1usize..10) {
            let mut ctx = SeededContext::new(seed);
            let centers: Vec<Point> = (0..k).map(|_| Point::random(&mut ctx)).collect();
            let units = assign_units(&centers, 16, AssignmentPolicy::Nearest, &mut ctx).unwrap();

            for unit in &units {
                let chosen = unit.reference.distance(&unit.position);
                for center in &centers {
                    prop_assert!(unit.reference.distance(center) >= chosen);
                }
            }
        }
    }
}
