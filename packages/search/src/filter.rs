//! Search predicate construction.
//!
//! Merges the free-text location classification with explicitly-provided
//! filter fields into a single [`ListingQuery`]. When both sources supply
//! the same dimension, the explicit field wins.

use rentscout_listing_models::{ListingQuery, PropertyType};

use crate::parser::{LocationFilter, parse_location};

/// Default result cap when the request does not specify one.
const DEFAULT_LIMIT: u32 = 100;

/// Explicit search filters as received from the API layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchRequest {
    /// Free-text location query.
    pub q: Option<String>,
    /// Explicit region code filter.
    pub region_code: Option<String>,
    /// Explicit city name filter.
    pub city: Option<String>,
    /// Explicit ZIP code filter.
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
    /// Number of results to skip.
    pub offset: Option<u32>,
}

/// Builds the store predicate for a search request.
#[must_use]
pub fn build_query(request: &SearchRequest) -> ListingQuery {
    let mut query = ListingQuery::default();

    match parse_location(request.q.as_deref().unwrap_or("")) {
        LocationFilter::PostalCode(zip) => query.postal_code = Some(zip),
        LocationFilter::CityRegion { city, region } => {
            query.city_name = Some(city);
            query.region_code = Some(region);
        }
        LocationFilter::Region(code) => query.region_code = Some(code),
        LocationFilter::City(city) => query.city_name = Some(city),
        LocationFilter::None => {}
    }

    // Explicit fields override anything inferred from the free text.
    if let Some(code) = &request.region_code {
        query.region_code = Some(code.trim().to_uppercase());
    }
    if let Some(city) = &request.city {
        query.city_name = Some(city.trim().to_string());
    }
    if let Some(zip) = &request.postal_code {
        query.postal_code = Some(zip.trim().to_string());
    }

    query.property_type = request.property_type;
    query.price_min = request.price_min;
    query.price_max = request.price_max;
    query.bedrooms_min = request.bedrooms_min;
    query.bathrooms_min = request.bathrooms_min;
    query.pets_allowed = request.pets_allowed;
    query.limit = request.limit.unwrap_or(DEFAULT_LIMIT);
    query.offset = request.offset.unwrap_or(0);

    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_text_populates_location_fields() {
        let request = SearchRequest {
            q: Some("Chicago, IL".to_string()),
            ..SearchRequest::default()
        };
        let query = build_query(&request);
        assert_eq!(query.city_name.as_deref(), Some("Chicago"));
        assert_eq!(query.region_code.as_deref(), Some("IL"));
        assert_eq!(query.postal_code, None);
    }

    #[test]
    fn explicit_region_beats_parsed_region() {
        let request = SearchRequest {
            q: Some("Chicago, IL".to_string()),
            region_code: Some("wi".to_string()),
            ..SearchRequest::default()
        };
        let query = build_query(&request);
        assert_eq!(query.region_code.as_deref(), Some("WI"));
        // City inferred from the text still applies
        assert_eq!(query.city_name.as_deref(), Some("Chicago"));
    }

    #[test]
    fn explicit_city_beats_parsed_city() {
        let request = SearchRequest {
            q: Some("Evanston".to_string()),
            city: Some("Chicago".to_string()),
            ..SearchRequest::default()
        };
        let query = build_query(&request);
        assert_eq!(query.city_name.as_deref(), Some("Chicago"));
    }

    #[test]
    fn explicit_postal_code_beats_parsed_zip() {
        let request = SearchRequest {
            q: Some("90210".to_string()),
            postal_code: Some("60602".to_string()),
            ..SearchRequest::default()
        };
        let query = build_query(&request);
        assert_eq!(query.postal_code.as_deref(), Some("60602"));
    }

    #[test]
    fn empty_text_imposes_no_location_constraint() {
        let request = SearchRequest {
            q: Some("   ".to_string()),
            price_max: Some(2000),
            ..SearchRequest::default()
        };
        let query = build_query(&request);
        assert_eq!(query.city_name, None);
        assert_eq!(query.region_code, None);
        assert_eq!(query.postal_code, None);
        assert_eq!(query.price_max, Some(2000));
    }

    #[test]
    fn numeric_filters_copy_through_with_defaults() {
        let request = SearchRequest {
            price_min: Some(900),
            bedrooms_min: Some(2),
            bathrooms_min: Some(1.5),
            pets_allowed: Some(true),
            ..SearchRequest::default()
        };
        let query = build_query(&request);
        assert_eq!(query.price_min, Some(900));
        assert_eq!(query.bedrooms_min, Some(2));
        assert_eq!(query.bathrooms_min, Some(1.5));
        assert_eq!(query.pets_allowed, Some(true));
        assert_eq!(query.limit, DEFAULT_LIMIT);
        assert_eq!(query.offset, 0);
    }
}
