//! Compile-time embedded geocoder configuration.
//!
//! The Nominatim endpoint, identifying `User-Agent`, and rate limit live in
//! `config/nominatim.toml`, embedded with `include_str!` (same mechanism as
//! the region centroid table in `rentscout_geography`).

use serde::Deserialize;

/// Configuration for the Nominatim geocoding client.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocoderConfig {
    /// Search endpoint URL.
    pub base_url: String,
    /// Client-identifying `User-Agent` header, required by the Nominatim
    /// usage policy.
    pub user_agent: String,
    /// ISO country code passed as `countrycodes` to scope results.
    pub country_code: String,
    /// Minimum delay before each outbound request, in milliseconds.
    pub rate_limit_ms: u64,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

const CONFIG_TOML: &str = include_str!("../config/nominatim.toml");

impl GeocoderConfig {
    /// Loads the embedded configuration.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed (compile-time data, caught
    /// by the test suite).
    #[must_use]
    pub fn load() -> Self {
        toml::de::from_str(CONFIG_TOML)
            .unwrap_or_else(|e| panic!("Failed to parse geocoder config: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_embedded_config() {
        let config = GeocoderConfig::load();
        assert!(!config.base_url.is_empty());
        assert!(!config.user_agent.is_empty());
        assert!(!config.country_code.is_empty());
        assert!(config.rate_limit_ms >= 1000, "Nominatim requires >= 1s");
    }
}
