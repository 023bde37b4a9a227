//! Named region lookup: which configured polygons contain a point.

use tracing::{debug, info};

use super::Polygon;
use crate::config::RegionConfig;
use crate::error::Result;
use crate::models::Point;

/// A named polygon
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub name: String,
    pub polygon: Polygon,
}

/// Linear-scan lookup over a fixed set of regions
#[derive(Debug, Clone, Default)]
pub struct RegionLookup {
    regions: Vec<Region>,
}

impl RegionLookup {
    /// Build polygons for every configured region. Fails on the first empty ring.
    pub fn build(configs: &[RegionConfig]) -> Result<Self> {
        info!("Building polygons for {} regions...", configs.len());

        let regions = configs
            .iter()
            .map(|cfg| -> Result<Region> {
                let points = cfg.ring.iter().copied().map(Point::from).collect();
                Ok(Region {
                    name: cfg.name.clone(),
                    polygon: Polygon::try_new(points)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { regions })
    }

    /// Names of all regions containing `point`, in configuration order
    pub fn lookup(&self, point: Point) -> Vec<&str> {
        let names: Vec<&str> = self
            .regions
            .iter()
            .filter(|r| r.polygon.contains(point))
            .map(|r| r.name.as_str())
            .collect();

        debug!("Lookup at {}: {} regions", point, names.len());
        names
    }

    /// Find a region by name
    pub fn get(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name == name)
    }

    /// All regions in configuration order
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Get total number of regions
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether no regions were configured
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
