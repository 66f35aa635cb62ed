#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the rentscout server.
//!
//! These types are serialized to JSON for the REST API. They are separate
//! from the stored row types in `rentscout_listing_models` so the wire
//! contract can evolve independently.

use chrono::{DateTime, Utc};
use rentscout_listing_models::{Address, Listing, ListingUpdate, NewListing, PropertyType};
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the server is healthy.
    pub healthy: bool,
    /// Server version.
    pub version: String,
}

/// A listing as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiListing {
    /// Unique listing ID.
    pub id: i64,
    /// Short listing title.
    pub title: String,
    /// Longer free-text description.
    pub description: Option<String>,
    /// Kind of property.
    pub property_type: PropertyType,
    /// Street line.
    pub street: String,
    /// City reference.
    pub city_id: i32,
    /// Region reference.
    pub region_id: i32,
    /// ZIP code.
    pub postal_code: Option<String>,
    /// Monthly rent in whole dollars.
    pub price_monthly: u32,
    /// Number of bedrooms.
    pub bedrooms: u32,
    /// Number of bathrooms.
    pub bathrooms: f64,
    /// Whether pets are allowed.
    pub pets_allowed: bool,
    /// Geocoded latitude.
    pub latitude: f64,
    /// Geocoded longitude.
    pub longitude: f64,
    /// Creation timestamp (ISO 8601).
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp (ISO 8601).
    pub updated_at: DateTime<Utc>,
}

impl From<Listing> for ApiListing {
    fn from(row: Listing) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            property_type: row.property_type,
            street: row.address.street,
            city_id: row.address.city_id,
            region_id: row.address.region_id,
            postal_code: row.address.postal_code,
            price_monthly: row.price_monthly,
            bedrooms: row.bedrooms,
            bathrooms: row.bathrooms,
            pets_allowed: row.pets_allowed,
            latitude: row.latitude,
            longitude: row.longitude,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Query parameters for the search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Free-text location query.
    pub q: Option<String>,
    /// Explicit two-letter region code.
    pub region_code: Option<String>,
    /// Explicit city name.
    pub city: Option<String>,
    /// Explicit ZIP code.
    pub postal_code: Option<String>,
    /// Property type filter.
    pub property_type: Option<PropertyType>,
    /// Minimum monthly rent (inclusive).
    pub price_min: Option<u32>,
    /// Maximum monthly rent (inclusive).
    pub price_max: Option<u32>,
    /// Minimum bedroom count.
    pub bedrooms_min: Option<u32>,
    /// Minimum bathroom count.
    pub bathrooms_min: Option<f64>,
    /// Pets policy filter.
    pub pets_allowed: Option<bool>,
    /// Maximum number of results.
    pub limit: Option<u32>,
    /// Offset for pagination.
    pub offset: Option<u32>,
}

/// Request body for creating a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListingRequest {
    /// Short listing title.
    pub title: String,
    /// Longer free-text description.
    pub description: Option<String>,
    /// Kind of property.
    pub property_type: PropertyType,
    /// Street line.
    pub street: String,
    /// City reference.
    pub city_id: i32,
    /// Region reference.
    pub region_id: i32,
    /// ZIP code.
    pub postal_code: Option<String>,
    /// Monthly rent in whole dollars.
    pub price_monthly: u32,
    /// Number of bedrooms.
    pub bedrooms: u32,
    /// Number of bathrooms.
    pub bathrooms: f64,
    /// Whether pets are allowed.
    pub pets_allowed: bool,
}

impl From<CreateListingRequest> for NewListing {
    fn from(req: CreateListingRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            property_type: req.property_type,
            address: Address {
                street: req.street,
                city_id: req.city_id,
                region_id: req.region_id,
                postal_code: req.postal_code,
            },
            price_monthly: req.price_monthly,
            bedrooms: req.bedrooms,
            bathrooms: req.bathrooms,
            pets_allowed: req.pets_allowed,
        }
    }
}

/// Request body for updating a listing. Absent fields are unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateListingRequest {
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

impl From<UpdateListingRequest> for ListingUpdate {
    fn from(req: UpdateListingRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            property_type: req.property_type,
            street: req.street,
            city_id: req.city_id,
            region_id: req.region_id,
            postal_code: req.postal_code,
            price_monthly: req.price_monthly,
            bedrooms: req.bedrooms,
            bathrooms: req.bathrooms,
            pets_allowed: req.pets_allowed,
        }
    }
}
