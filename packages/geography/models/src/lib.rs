#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geographic coordinate and administrative region types.
//!
//! These types are shared across the geocoding pipeline, the listing
//! models, and the search layer. Regions are first-level administrative
//! divisions (US states plus DC); cities belong to exactly one region.

use serde::{Deserialize, Serialize};

/// A point in WGS84 decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinate {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A first-level administrative division (state-equivalent).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    /// Primary key.
    pub id: i32,
    /// Two-letter USPS abbreviation (e.g. "IL", "WA").
    pub code: String,
    /// Full region name (e.g. "Illinois", "Washington").
    pub name: String,
}

/// A city within a region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    /// Primary key.
    pub id: i32,
    /// City name (e.g. "Chicago").
    pub name: String,
    /// Region this city belongs to.
    pub region_id: i32,
}
