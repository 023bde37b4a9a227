//! Conversions between this crate's types and the `geo` crate.

use geo::{Coord, LineString, Rect};

use super::Polygon;
use crate::error::{Error, Result};
use crate::models::{BoundingBox, Point};

impl From<Coord<f64>> for Point {
    fn from(c: Coord<f64>) -> Self {
        Point::new(c.x, c.y)
    }
}

impl From<Point> for Coord<f64> {
    fn from(p: Point) -> Self {
        Coord { x: p.x, y: p.y }
    }
}

impl From<geo::Point<f64>> for Point {
    fn from(p: geo::Point<f64>) -> Self {
        Point::new(p.x(), p.y())
    }
}

impl From<BoundingBox> for Rect<f64> {
    fn from(bbox: BoundingBox) -> Self {
        Rect::new(Coord::from(bbox.min), Coord::from(bbox.max))
    }
}

/// Outer ring only (geo closes the ring if it is open)
impl From<&Polygon> for geo::Polygon<f64> {
    fn from(polygon: &Polygon) -> Self {
        let ring: Vec<Coord<f64>> = polygon.points().iter().copied().map(Coord::from).collect();
        geo::Polygon::new(LineString::new(ring), vec![])
    }
}

/// Interior rings are dropped
impl TryFrom<&geo::Polygon<f64>> for Polygon {
    type Error = Error;

    fn try_from(polygon: &geo::Polygon<f64>) -> Result<Self> {
        let points = polygon.exterior().coords().copied().map(Point::from).collect();
        Polygon::try_new(points)
    }
}
