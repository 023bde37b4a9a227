//! Point-in-Polygon (PIP) containment.
//!
//! Polygons cache their bounding box at construction and answer
//! containment with a ray-casting test behind a bounding-box pre-filter.

mod geometry;
mod polygon;
mod service;

pub use polygon::Polygon;
pub use service::{Region, RegionLookup};
