//! Polyfence - point-in-polygon and point-in-bounding-box predicates
//!
//! This library provides small immutable geometry values (points, bounding
//! boxes, polygons), a ray-casting containment test, and a thin GeoJSON
//! adapter for building polygons from features.

pub mod config;
pub mod error;
pub mod geojson;
pub mod models;
pub mod pip;

pub use error::{Error, Result};
pub use models::{BoundingBox, Point};
pub use pip::{Polygon, RegionLookup};
