//! GeoJSON adapter: builds a [`Polygon`] from the outer ring of a Polygon
//! Feature. Coordinates are `[x, y]` (longitude, latitude) and are taken
//! as-is, with no projection.

use ::geojson::{Feature, GeoJson, Geometry, Value};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::Point;
use crate::pip::Polygon;

/// Parse a GeoJSON Feature with Polygon geometry.
///
/// Input that `geojson` cannot read as a Feature fails with [`Error::Parse`],
/// carrying the library's error unchanged.
pub fn from_geojson(bytes: &[u8]) -> Result<Polygon> {
    let feature = Feature::try_from(GeoJson::from_reader(bytes).map_err(::geojson::Error::from)?)?;
    let geometry = feature.geometry.ok_or(Error::MissingGeometry)?;
    polygon_from(geometry)
}

/// Parse a bare GeoJSON Polygon geometry object
pub fn polygon_from_geometry(bytes: &[u8]) -> Result<Polygon> {
    let geometry = Geometry::try_from(GeoJson::from_reader(bytes).map_err(::geojson::Error::from)?)?;
    polygon_from(geometry)
}

fn polygon_from(geometry: Geometry) -> Result<Polygon> {
    let rings = match geometry.value {
        Value::Polygon(rings) => rings,
        _ => return Err(Error::NotAPolygon),
    };

    if rings.len() > 1 {
        debug!("Ignoring {} interior rings", rings.len() - 1);
    }
    let ring = rings.into_iter().next().ok_or(Error::MissingRing)?;
    if ring.is_empty() {
        return Err(Error::EmptyRing);
    }

    let points = ring
        .iter()
        .enumerate()
        .map(|(index, position)| match position.as_slice() {
            [x, y, ..] => Ok(Point::new(*x, *y)),
            _ => Err(Error::ShortPosition {
                index,
                len: position.len(),
            }),
        })
        .collect::<Result<Vec<_>>>()?;

    Polygon::try_new(points)
}

impl Polygon {
    /// See [`from_geojson`]
    pub fn from_geojson(bytes: &[u8]) -> Result<Self> {
        from_geojson(bytes)
    }

    /// Feature with this polygon as its only ring and no properties
    pub fn to_geojson(&self) -> Feature {
        let ring = self.points().iter().map(|p| vec![p.x, p.y]).collect();
        Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::Polygon(vec![ring]))),
            id: None,
            properties: None,
            foreign_members: None,
        }
    }
}
