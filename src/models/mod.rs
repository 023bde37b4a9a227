//! Core value types for containment queries.

pub mod bbox;
pub mod point;

pub use bbox::BoundingBox;
pub use point::Point;
