//! 2D points and nearest-center lookup.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// An incident location or a cluster center in the unit square.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Ordered incident set. Order is insertion order.
pub type PointSet = Vec<Point>;

impl Point {
    /// Creates a point from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the coordinates as a vector.
    pub fn coords(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.coords() - other.coords()).norm()
    }

    /// Coordinate-wise mean of a non-empty set of points.
    ///
    /// Returns `None` for an empty iterator.
    pub fn mean<'a, I>(points: I) -> Option<Point>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let (sum, count) = points
            .into_iter()
            .fold((Vector2::<f64>::zeros(), 0usize), |(sum, n), p| (sum + p.coords(), n + 1));

        if count == 0 {
            return None;
        }
        Some(Point::from(sum / count as f64))
    }
}

impl From<Vector2<f64>> for Point {
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    fn from(p: Point) -> Self {
        p.coords()
    }
}

/// Index of the center closest to `point`.
///
/// Ties go to the lowest index. Returns `None` when `centers` is empty.
pub fn nearest_center(centers: &[Point], point: &Point) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (idx, center) in centers.iter().enumerate() {
        let d = point.distance(center);
        match best {
            // strict comparison keeps the earlier index on ties
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((idx, d)),
        }
    }

    best.map(|(idx, _)| idx)
}
