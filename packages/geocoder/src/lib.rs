#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geocoding client for listing addresses.
//!
//! Converts a postal address into a WGS84 coordinate using the Nominatim /
//! `OpenStreetMap` search API. The public instance enforces a strict rate
//! limit (1 request per second), so the client pauses for the configured
//! delay before every outbound call.
//!
//! Lookup outcomes are a three-way [`LookupResult`] rather than an error:
//! the resolution pipeline in `rentscout_locator` treats "no match" and
//! "service down" identically, falling through to the next tier, and must
//! never fail outright. Transport errors are logged and folded into
//! [`LookupResult::Unavailable`] at the [`AddressLookup`] boundary.
//!
//! See <https://nominatim.org/release-docs/develop/api/Search/>

pub mod client;
pub mod config;

pub use client::NominatimClient;
pub use config::GeocoderConfig;

use async_trait::async_trait;
use rentscout_geography_models::Coordinate;
use thiserror::Error;

/// Outcome of a single geocoding lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LookupResult {
    /// The service returned a match.
    Found(Coordinate),
    /// The service answered but had no match (or the response was
    /// malformed / non-2xx).
    NotFound,
    /// The service could not be reached (network failure or timeout).
    Unavailable,
}

/// Errors from the underlying HTTP exchange.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// An address lookup service.
///
/// The seam between the resolution pipeline and the external geocoding
/// provider; tests substitute a scripted implementation.
#[async_trait]
pub trait AddressLookup: Send + Sync {
    /// Looks up a full street address.
    async fn lookup_address(
        &self,
        street: &str,
        city: &str,
        region: &str,
        postal_code: Option<&str>,
    ) -> LookupResult;

    /// Looks up a city/region pair, ignoring street-level detail.
    async fn lookup_city_region(&self, city: &str, region: &str) -> LookupResult;
}
