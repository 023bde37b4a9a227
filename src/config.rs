use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::pip::RegionLookup;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub regions: Vec<RegionConfig>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RegionConfig {
    pub name: String,
    /// Outer ring as `[x, y]` pairs
    pub ring: Vec<[f64; 2]>,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Build polygons for every configured region
    pub fn build_lookup(&self) -> Result<RegionLookup> {
        RegionLookup::build(&self.regions).context("Invalid region geometry")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;
    use std::io::Write;

    const REGIONS: &str = r#"
[[regions]]
name = "square"
ring = [[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0], [0.0, 0.0]]

[[regions]]
name = "triangle"
ring = [[1.0, 1.0], [5.0, 1.0], [1.0, 5.0]]
"#;

    #[test]
    fn test_load_from_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(REGIONS.as_bytes())?;

        let config = Config::load_from_file(file.path())?;
        assert_eq!(config.regions.len(), 2);
        assert_eq!(config.regions[1].name, "triangle");
        assert_eq!(config.regions[1].ring[2], [1.0, 5.0]);

        let lookup = config.build_lookup()?;
        assert_eq!(lookup.lookup(Point::new(1.5, 1.5)), vec!["square", "triangle"]);
        assert_eq!(lookup.lookup(Point::new(0.5, 0.5)), vec!["square"]);
        Ok(())
    }

    #[test]
    fn test_no_regions() -> Result<()> {
        let config = Config::from_toml_str("")?;
        assert!(config.build_lookup()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load_from_file("/nonexistent/regions.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_bad_ring_shape() {
        let err = Config::from_toml_str("[[regions]]\nname = \"x\"\nring = [[1.0]]\n").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_empty_ring_fails_lookup_build() {
        let config = Config::from_toml_str("[[regions]]\nname = \"x\"\nring = []\n").unwrap();
        let err = config.build_lookup().unwrap_err();
        assert!(err.to_string().contains("Invalid region geometry"));
    }
}
