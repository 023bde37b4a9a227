//! Error types for polygon construction and GeoJSON parsing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Input could not be read as the expected GeoJSON object
    #[error(transparent)]
    Parse(#[from] ::geojson::Error),

    #[error("feature has no geometry")]
    MissingGeometry,

    #[error("feature geometry is not a Polygon")]
    NotAPolygon,

    #[error("polygon geometry has no rings")]
    MissingRing,

    #[error("outer ring has no positions")]
    EmptyRing,

    #[error("position {index} has {len} coordinates, expected at least 2")]
    ShortPosition { index: usize, len: usize },

    #[error("cannot build a polygon from an empty point sequence")]
    EmptyPolygon,
}

pub type Result<T> = std::result::Result<T, Error>;
