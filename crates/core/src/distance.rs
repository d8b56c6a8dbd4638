//! Distance metrics for nearest-seed search.
//!
//! Distances are only compared against each other, never displayed, so the
//! Euclidean metric skips the square root: squaring is monotonic on
//! non-negative values and keeps the arithmetic exact.

use crate::error::RasterError;
use crate::point::Point;
use serde::{Deserialize, Serialize};

/// Names accepted by [`Distance::from_name`], in listing order.
const DISTANCE_NAMES: &[&str] = &["manhattan", "squared-euclidean"];

/// `|x1 - x2| + |y1 - y2|`.
pub fn manhattan(a: Point, b: Point) -> u64 {
    let dx = a.x.abs_diff(b.x) as u64;
    let dy = a.y.abs_diff(b.y) as u64;
    dx.saturating_add(dy)
}

/// `(x1 - x2)^2 + (y1 - y2)^2`, without the square root.
pub fn squared_euclidean(a: Point, b: Point) -> u64 {
    let dx = a.x.abs_diff(b.x) as u64;
    let dy = a.y.abs_diff(b.y) as u64;
    dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy))
}

/// A symmetric, non-negative distance between two pixel positions.
///
/// Implemented by [`Distance`] and by any `Fn(Point, Point) -> u64`, so a
/// caller can pass a closure for a custom metric.
pub trait Metric {
    fn distance(&self, a: Point, b: Point) -> u64;
}

impl<F> Metric for F
where
    F: Fn(Point, Point) -> u64,
{
    fn distance(&self, a: Point, b: Point) -> u64 {
        self(a, b)
    }
}

/// The built-in metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Distance {
    #[default]
    Manhattan,
    #[serde(alias = "euclidean")]
    SquaredEuclidean,
}

impl Distance {
    /// Parses a metric name. `"euclidean"` is accepted for `SquaredEuclidean`.
    pub fn from_name(name: &str) -> Result<Self, RasterError> {
        match name {
            "manhattan" => Ok(Distance::Manhattan),
            "squared-euclidean" | "euclidean" => Ok(Distance::SquaredEuclidean),
            _ => Err(RasterError::UnknownDistance(name.to_string())),
        }
    }

    /// Canonical name, as accepted by `from_name`.
    pub fn name(self) -> &'static str {
        match self {
            Distance::Manhattan => "manhattan",
            Distance::SquaredEuclidean => "squared-euclidean",
        }
    }

    /// Canonical names of every built-in metric.
    pub fn list_names() -> &'static [&'static str] {
        DISTANCE_NAMES
    }
}

impl Metric for Distance {
    fn distance(&self, a: Point, b: Point) -> u64 {
        match self {
            Distance::Manhattan => manhattan(a, b),
            Distance::SquaredEuclidean => squared_euclidean(a, b),
        }
    }
}
