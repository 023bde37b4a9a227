//! Polygon with a cached bounding box and the ray-casting containment test.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::models::{BoundingBox, Point};

/// Single-ring polygon. The vertex list is treated as cyclic, so the last
/// vertex may or may not repeat the first.
///
/// Immutable after construction: `x_coords`/`y_coords` mirror `points` and
/// `bounding_box` is the tight bound of `points`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct Polygon {
    points: Vec<Point>,
    bounding_box: BoundingBox,
    x_coords: Vec<f64>,
    y_coords: Vec<f64>,
}

impl Polygon {
    /// Build a polygon from its vertices.
    ///
    /// # Panics
    ///
    /// Panics if `points` is empty. Use [`Polygon::try_new`] for input that
    /// has not been checked.
    pub fn new(points: Vec<Point>) -> Self {
        match Self::try_new(points) {
            Ok(polygon) => polygon,
            Err(_) => panic!("Polygon::new requires at least one point"),
        }
    }

    /// Build from raw `(x, y)` pairs. Panics on empty input like [`Polygon::new`].
    pub fn from_coords<I: IntoIterator<Item = (f64, f64)>>(coords: I) -> Self {
        Self::new(coords.into_iter().map(Point::from).collect())
    }

    /// Build a polygon, returning `Error::EmptyPolygon` for an empty vertex list
    pub fn try_new(points: Vec<Point>) -> Result<Self> {
        let bounding_box = BoundingBox::from_points(&points).ok_or(Error::EmptyPolygon)?;
        let x_coords = points.iter().map(|p| p.x).collect();
        let y_coords = points.iter().map(|p| p.y).collect();

        debug!(
            "Built polygon with {} vertices, bbox {} .. {}",
            points.len(),
            bounding_box.min,
            bounding_box.max
        );

        Ok(Self {
            points,
            bounding_box,
            x_coords,
            y_coords,
        })
    }

    /// Vertices in construction order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Tight axis-aligned bound of the vertices
    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }

    /// X coordinate of each vertex, parallel to `points()`
    pub fn x_coords(&self) -> &[f64] {
        &self.x_coords
    }

    /// Y coordinate of each vertex, parallel to `points()`
    pub fn y_coords(&self) -> &[f64] {
        &self.y_coords
    }

    /// Number of vertices, including a repeated closing vertex if present
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Crossing-number test behind a bounding-box pre-filter.
    ///
    /// Boundary points follow the usual ray-casting conventions: the
    /// straddle test is `>` and the intercept test is `<`, so results on
    /// edges and vertices are whatever those comparisons produce.
    pub fn contains(&self, point: Point) -> bool {
        if !self.bounding_box.contains(point) {
            trace!("{} rejected by bounding box", point);
            return false;
        }

        let xs = &self.x_coords;
        let ys = &self.y_coords;
        let n = xs.len();

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            if (ys[i] > point.y) != (ys[j] > point.y)
                && point.x < (xs[j] - xs[i]) * (point.y - ys[i]) / (ys[j] - ys[i]) + xs[i]
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

impl TryFrom<Vec<Point>> for Polygon {
    type Error = Error;

    fn try_from(points: Vec<Point>) -> Result<Self> {
        Self::try_new(points)
    }
}

impl From<Polygon> for Vec<Point> {
    fn from(polygon: Polygon) -> Self {
        polygon.points
    }
}
