//! Nominatim HTTP client.
//!
//! Issues one `GET` per lookup with a free-form query string, `limit=1`,
//! and `countrycodes` scoping. The first element of the JSON array response
//! carries `lat`/`lon` as decimal-degree strings.

use std::time::Duration;

use async_trait::async_trait;
use rentscout_geography_models::Coordinate;

use crate::{AddressLookup, GeocodeError, GeocoderConfig, LookupResult};

/// Geocoding client for the Nominatim search API.
pub struct NominatimClient {
    http: reqwest::Client,
    config: GeocoderConfig,
}

impl NominatimClient {
    /// Creates a client with the identifying `User-Agent` and request
    /// timeout from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError`] if the HTTP client cannot be constructed.
    pub fn new(config: GeocoderConfig) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    /// Performs one rate-limited lookup for a free-form query string.
    ///
    /// `Ok(None)` covers every "the service answered but had nothing
    /// usable" case: zero matches, a non-2xx status, or a malformed body.
    /// Only transport failures surface as `Err`.
    async fn try_lookup(&self, query: &str) -> Result<Option<Coordinate>, GeocodeError> {
        // Inter-call pause, per the public instance's usage policy. Each
        // call pays the full delay; no token bucket is shared across
        // concurrent requests.
        tokio::time::sleep(Duration::from_millis(self.config.rate_limit_ms)).await;

        let resp = self
            .http
            .get(&self.config.base_url)
            .query(&[
                ("q", query),
                ("countrycodes", self.config.country_code.as_str()),
                ("format", "jsonv2"),
                ("limit", "1"),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            log::debug!("Lookup for '{query}' returned status {}", resp.status());
            return Ok(None);
        }

        let text = resp.text().await?;
        let Ok(body) = serde_json::from_str::<serde_json::Value>(&text) else {
            log::debug!("Lookup for '{query}' returned a non-JSON body");
            return Ok(None);
        };

        Ok(parse_response(&body))
    }

    async fn lookup(&self, query: &str) -> LookupResult {
        match self.try_lookup(query).await {
            Ok(Some(coordinate)) => LookupResult::Found(coordinate),
            Ok(None) => LookupResult::NotFound,
            Err(e) => {
                log::warn!("Address lookup unavailable for '{query}': {e}");
                LookupResult::Unavailable
            }
        }
    }
}

#[async_trait]
impl AddressLookup for NominatimClient {
    async fn lookup_address(
        &self,
        street: &str,
        city: &str,
        region: &str,
        postal_code: Option<&str>,
    ) -> LookupResult {
        let query = build_query(&[street, city, region, postal_code.unwrap_or("")]);
        self.lookup(&query).await
    }

    async fn lookup_city_region(&self, city: &str, region: &str) -> LookupResult {
        let query = build_query(&[city, region]);
        self.lookup(&query).await
    }
}

/// Joins non-empty address parts into a one-line query string.
fn build_query(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Extracts the first result's coordinate from a Nominatim response.
///
/// Any structural surprise (non-array body, missing fields, unparseable
/// decimal strings) yields `None` — treated as "not found" upstream.
fn parse_response(body: &serde_json::Value) -> Option<Coordinate> {
    let first = body.as_array()?.first()?;
    let lat = first["lat"].as_str()?.parse::<f64>().ok()?;
    let lon = first["lon"].as_str()?.parse::<f64>().ok()?;
    Some(Coordinate::new(lat, lon))
}
