//! Compile-time embedded region centroid table.
//!
//! Each region is listed in `data/centroids.toml` with its two-letter code,
//! full name, and a representative centroid coordinate. The file is
//! embedded with `include_str!` and parsed once into lookup maps on first
//! access.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use rentscout_geography_models::Coordinate;
use serde::Deserialize;

/// A single region row from the centroid table.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionCentroid {
    /// Two-letter USPS abbreviation.
    pub code: String,
    /// Full region name.
    pub name: String,
    /// Centroid latitude.
    pub latitude: f64,
    /// Centroid longitude.
    pub longitude: f64,
}

#[derive(Debug, Deserialize)]
struct CentroidFile {
    regions: Vec<RegionCentroid>,
}

const CENTROIDS_TOML: &str = include_str!("../data/centroids.toml");

/// All region centroid rows, in file order.
///
/// # Panics
///
/// Panics if the embedded TOML is malformed (the file is embedded at
/// compile time, so this is caught by the test suite).
static CENTROIDS: LazyLock<Vec<RegionCentroid>> = LazyLock::new(|| {
    let file: CentroidFile = toml::de::from_str(CENTROIDS_TOML)
        .unwrap_or_else(|e| panic!("Failed to parse region centroid table: {e}"));
    file.regions
});

/// Centroids keyed by lowercased full region name.
static BY_NAME: LazyLock<BTreeMap<String, Coordinate>> = LazyLock::new(|| {
    CENTROIDS
        .iter()
        .map(|r| {
            (
                r.name.to_lowercase(),
                Coordinate::new(r.latitude, r.longitude),
            )
        })
        .collect()
});

/// Centroids keyed by uppercased two-letter code.
static BY_CODE: LazyLock<BTreeMap<String, &'static RegionCentroid>> =
    LazyLock::new(|| CENTROIDS.iter().map(|r| (r.code.to_uppercase(), r)).collect());

/// Returns all known region centroid rows.
#[must_use]
pub fn regions() -> &'static [RegionCentroid] {
    &CENTROIDS
}

/// Looks up a region centroid by full region name (case-insensitive).
#[must_use]
pub fn centroid_for_region(name: &str) -> Option<Coordinate> {
    BY_NAME.get(&name.trim().to_lowercase()).copied()
}

/// Looks up a region centroid by two-letter code (case-insensitive).
#[must_use]
pub fn centroid_for_code(code: &str) -> Option<Coordinate> {
    BY_CODE
        .get(&code.trim().to_uppercase())
        .map(|r| Coordinate::new(r.latitude, r.longitude))
}

/// Returns the full region name for a two-letter code (case-insensitive).
#[must_use]
pub fn region_name_for_code(code: &str) -> Option<&'static str> {
    BY_CODE
        .get(&code.trim().to_uppercase())
        .map(|r| r.name.as_str())
}
