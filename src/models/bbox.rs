//! Axis-aligned bounding box used as a containment pre-filter.

use serde::{Deserialize, Serialize};

use super::Point;

/// Axis-aligned rectangle. Boxes built with `from_points` satisfy
/// `min.x <= max.x` and `min.y <= max.y` (NaN coordinates aside).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    /// Box from explicit corners; the caller keeps `min <= max`
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Tight bound of `points`, or `None` when there are no points.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (x_min, x_max) = min_max(points.iter().map(|p| p.x))?;
        let (y_min, y_max) = min_max(points.iter().map(|p| p.y))?;
        Some(Self {
            min: Point::new(x_min, y_min),
            max: Point::new(x_max, y_max),
        })
    }

    /// Edge-inclusive containment on both axes
    pub fn contains(&self, point: Point) -> bool {
        point.x <= self.max.x
            && point.x >= self.min.x
            && point.y <= self.max.y
            && point.y >= self.min.y
    }

    /// Extent along x
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along y
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Single pass min/max. Seeded from the first value; NaN fails both
/// comparisons and leaves the running pair untouched.
pub(crate) fn min_max(mut values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let first = values.next()?;
    let (mut min, mut max) = (first, first);
    for v in values {
        if v < min {
            min = v;
        } else if v > max {
            max = v;
        }
    }
    Some((min, max))
}
