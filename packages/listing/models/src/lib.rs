#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Listing row types and the search predicate definition.
//!
//! These types represent rental listings as stored and queried. API
//! request/response shapes live in `rentscout_server_models` so the wire
//! contract can evolve independently.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Kind of rental property.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    /// Unit in a multi-family building.
    Apartment,
    /// Detached single-family home.
    House,
    /// Individually owned unit in a shared building.
    Condo,
    /// Multi-floor attached home.
    Townhouse,
    /// Single room in a shared dwelling.
    Room,
}

/// Postal address of a listing.
///
/// City and region are references into the store's geographic tables;
/// only the street line and postal code are free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Street line (e.g. "1120 W Granville Ave").
    pub street: String,
    /// City reference.
    pub city_id: i32,
    /// Region reference.
    pub region_id: i32,
    /// ZIP code, if provided.
    pub postal_code: Option<String>,
}

/// A rental listing row as stored.
///
/// `latitude`/`longitude` are derived by the location resolver, never
/// user-entered, and are always populated once creation completes — at
/// worst they hold a region centroid or the country-center fallback. They
/// can go stale if the address is edited without touching address fields
/// in the update payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Primary key.
    pub id: i64,
    /// Short listing title.
    pub title: String,
    /// Longer free-text description.
    pub description: Option<String>,
    /// Kind of property.
    pub property_type: PropertyType,
    /// Postal address.
    pub address: Address,
    /// Monthly rent in whole dollars.
    pub price_monthly: u32,
    /// Number of bedrooms.
    pub bedrooms: u32,
    /// Number of bathrooms (halves allowed).
    pub bathrooms: f64,
    /// Whether pets are allowed.
    pub pets_allowed: bool,
    /// Geocoded latitude (WGS84).
    pub latitude: f64,
    /// Geocoded longitude (WGS84).
    pub longitude: f64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a listing. Coordinates and timestamps are
/// assigned by the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListing {
    /// Short listing title.
    pub title: String,
    /// Longer free-text description.
    pub description: Option<String>,
    /// Kind of property.
    pub property_type: PropertyType,
    /// Postal address.
    pub address: Address,
    /// Monthly rent in whole dollars.
    pub price_monthly: u32,
    /// Number of bedrooms.
    pub bedrooms: u32,
    /// Number of bathrooms.
    pub bathrooms: f64,
    /// Whether pets are allowed.
    pub pets_allowed: bool,
}

/// Partial update payload for a listing. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingUpdate {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New property type.
    pub property_type: Option<PropertyType>,
    /// New street line.
    pub street: Option<String>,
    /// New city reference.
    pub city_id: Option<i32>,
    /// New region reference.
    pub region_id: Option<i32>,
    /// New ZIP code.
    pub postal_code: Option<String>,
    /// New monthly rent.
    pub price_monthly: Option<u32>,
    /// New bedroom count.
    pub bedrooms: Option<u32>,
    /// New bathroom count.
    pub bathrooms: Option<f64>,
    /// New pets policy.
    pub pets_allowed: Option<bool>,
}

impl ListingUpdate {
    /// Whether any address field is present in this payload.
    ///
    /// Coordinates are re-resolved only when this returns `true`; updates
    /// that skip address fields leave the stored coordinate as-is.
    #[must_use]
    pub const fn touches_address(&self) -> bool {
        self.street.is_some()
            || self.city_id.is_some()
            || self.region_id.is_some()
            || self.postal_code.is_some()
    }
}

/// The search predicate handed to the store's filtered-query operation.
///
/// Absent fields impose no constraint. Price bounds are inclusive; room
/// counts are minimums (`>=`), since renters search for "at least N
/// bedrooms"; `city_name` matches case-insensitively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingQuery {
    /// Exact ZIP code.
    pub postal_code: Option<String>,
    /// Two-letter region code.
    pub region_code: Option<String>,
    /// City name (case-insensitive).
    pub city_name: Option<String>,
    /// Kind of property.
    pub property_type: Option<PropertyType>,
    /// Minimum monthly rent (inclusive).
    pub price_min: Option<u32>,
    /// Maximum monthly rent (inclusive).
    pub price_max: Option<u32>,
    /// Minimum bedroom count.
    pub bedrooms_min: Option<u32>,
    /// Minimum bathroom count.
    pub bathrooms_min: Option<f64>,
    /// Pets policy (`None` = don't filter).
    pub pets_allowed: Option<bool>,
    /// Maximum number of results to return.
    pub limit: u32,
    /// Number of results to skip.
    pub offset: u32,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            postal_code: None,
            region_code: None,
            city_name: None,
            property_type: None,
            price_min: None,
            price_max: None,
            bedrooms_min: None,
            bathrooms_min: None,
            pets_allowed: None,
            limit: 100,
            offset: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_without_address_fields_does_not_touch_address() {
        let update = ListingUpdate {
            price_monthly: Some(1850),
            ..ListingUpdate::default()
        };
        assert!(!update.touches_address());
    }

    #[test]
    fn update_with_any_address_field_touches_address() {
        for update in [
            ListingUpdate {
                street: Some("451 Elm St".to_string()),
                ..ListingUpdate::default()
            },
            ListingUpdate {
                city_id: Some(2),
                ..ListingUpdate::default()
            },
            ListingUpdate {
                region_id: Some(3),
                ..ListingUpdate::default()
            },
            ListingUpdate {
                postal_code: Some("60660".to_string()),
                ..ListingUpdate::default()
            },
        ] {
            assert!(update.touches_address(), "{update:?}");
        }
    }

    #[test]
    fn property_type_round_trips_screaming_snake() {
        assert_eq!(PropertyType::Townhouse.to_string(), "TOWNHOUSE");
        assert_eq!("ROOM".parse::<PropertyType>().unwrap(), PropertyType::Room);
    }
}
