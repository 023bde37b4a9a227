//! Planar point type.

use serde::{Deserialize, Serialize};

use super::BoundingBox;
use crate::pip::Polygon;

/// 2D coordinate pair (x = longitude, y = latitude for GeoJSON input)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Same as `polygon.contains(*self)`
    pub fn in_polygon(&self, polygon: &Polygon) -> bool {
        polygon.contains(*self)
    }

    /// Same as `bbox.contains(*self)`
    pub fn in_bounding_box(&self, bbox: &BoundingBox) -> bool {
        bbox.contains(*self)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> BoundingBox {
        BoundingBox::new(Point::new(-1.0, -1.0), Point::new(1.0, 1.0))
    }

    #[test]
    fn test_point_in_bounding_box() {
        let bbox = unit_box();
        assert!(Point::new(0.0, 0.0).in_bounding_box(&bbox));
        assert!(!Point::new(10.0, 10.0).in_bounding_box(&bbox));
    }

    #[test]
    fn test_point_in_polygon() {
        let convex = Polygon::new(
            [
                (0.0, 0.0),
                (1.0, 0.0),
                (2.0, 1.0),
                (2.0, 2.0),
                (1.0, 3.0),
                (0.0, 3.0),
                (-1.0, 2.0),
                (-1.0, 1.0),
                (0.0, 0.0),
            ]
            .into_iter()
            .map(Point::from)
            .collect(),
        );
        assert!(Point::new(0.0, 0.0).in_polygon(&convex));
        assert!(!Point::new(10.0, 10.0).in_polygon(&convex));
    }

    #[test]
    fn test_wrappers_match_shape_predicates() {
        let bbox = unit_box();
        let triangle = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 4.0),
        ]);
        for x in -2..=5 {
            for y in -2..=5 {
                let p = Point::new(x as f64 * 0.75, y as f64 * 0.75);
                assert_eq!(p.in_bounding_box(&bbox), bbox.contains(p));
                assert_eq!(p.in_polygon(&triangle), triangle.contains(p));
            }
        }
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(Point::new(1.5, -2.0)).unwrap();
        assert_eq!(json, serde_json::json!({ "x": 1.5, "y": -2.0 }));
    }
}
