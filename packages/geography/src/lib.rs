#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Static geographic reference data for the geocoding pipeline.
//!
//! Embeds a region centroid table (`data/centroids.toml`) at compile time:
//! one representative coordinate per US state plus DC. The table is parsed
//! once on first access and is read-only afterwards, so concurrent reads
//! need no synchronization.
//!
//! When every address-level geocoding tier fails and the region itself is
//! unrecognized, [`COUNTRY_CENTER`] is the terminal fallback.

pub mod centroids;

pub use centroids::{centroid_for_code, centroid_for_region, region_name_for_code, regions};
use rentscout_geography_models::Coordinate;

/// Geographic center of the contiguous United States.
///
/// Returned when a region has no entry in the centroid table.
pub const COUNTRY_CENTER: Coordinate = Coordinate {
    latitude: 39.8283,
    longitude: -98.5795,
};
