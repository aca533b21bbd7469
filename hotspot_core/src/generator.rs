//! Synthetic incident generation.

use crate::error::CoreError;
use crate::geometry::{Point, PointSet};
use hotspot_env::HotspotContext;
use serde::{Deserialize, Serialize};

/// Length of the incident timestamp range, in seconds.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// A point observed during a simulation round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    /// Where the incident happened
    pub location: Point,

    /// Seconds since midnight, uniform in `[0, 86400)`. Descriptive only.
    pub timestamp_secs: f64,
}

impl Incident {
    /// Tags an existing location as an incident, sampling its timestamp.
    pub fn at<C: HotspotContext + ?Sized>(location: Point, ctx: &mut C) -> Self {
        Self {
            location,
            timestamp_secs: ctx.unit_f64() * SECONDS_PER_DAY,
        }
    }
}

impl Point {
    /// Draws a point uniformly from `[0, 1)^2`. `x` is drawn before `y`.
    pub fn random<C: HotspotContext + ?Sized>(ctx: &mut C) -> Self {
        let x = ctx.unit_f64();
        let y = ctx.unit_f64();
        Self::new(x, y)
    }
}

/// Generates `count` incident locations uniformly in the unit square.
pub fn generate_points<C: HotspotContext + ?Sized>(
    count: usize,
    ctx: &mut C,
) -> Result<PointSet, CoreError> {
    if count == 0 {
        return Err(CoreError::InvalidPointCount(count));
    }
    Ok((0..count).map(|_| Point::random(ctx)).collect())
}

/// Generates one incident at a uniformly random location.
pub fn generate_incident<C: HotspotContext + ?Sized>(ctx: &mut C) -> Incident {
    let location = Point::random(ctx);
    Incident::at(location, ctx)
}
