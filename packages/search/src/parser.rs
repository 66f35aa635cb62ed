//! Free-text location string classification.
//!
//! One user-entered string becomes one of four filter shapes. Rules are
//! ordered; the first match wins:
//!
//! 1. A standalone 5-digit token anywhere → ZIP code.
//! 2. `<text>, <2-letter code>` → city + region.
//! 3. The entire string is 2 alphabetic characters → region code.
//! 4. Anything else non-empty → city name, verbatim.
//!
//! A city name containing a comma followed by a 2-letter token (rule 2)
//! is classified as city+region even when the trailing token is not a
//! real region code. Known ambiguity; downstream matching simply finds
//! no listings for a bogus region.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for a standalone 5-digit token (ZIP code).
static ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{5})\b").expect("valid regex"));

/// Structured classification of a free-text location string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationFilter {
    /// A 5-digit ZIP code.
    PostalCode(String),
    /// A city name plus a 2-letter region code.
    CityRegion {
        /// City name, trimmed.
        city: String,
        /// Region code, uppercased.
        region: String,
    },
    /// A bare 2-letter region code.
    Region(String),
    /// A city name, verbatim.
    City(String),
    /// Empty input: no location constraint.
    None,
}

/// Classifies a user-entered location string.
#[must_use]
pub fn parse_location(raw: &str) -> LocationFilter {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return LocationFilter::None;
    }

    // Rule 1: first standalone 5-digit token anywhere in the string.
    if let Some(captures) = ZIP_RE.captures(trimmed) {
        return LocationFilter::PostalCode(captures[1].to_string());
    }

    // Rule 2: "<city>, <2-letter code>", splitting on the last comma.
    if let Some((city_part, region_part)) = trimmed.rsplit_once(',') {
        let city = city_part.trim();
        let region = region_part.trim();
        if !city.is_empty() && is_two_letter_code(region) {
            return LocationFilter::CityRegion {
                city: city.to_string(),
                region: region.to_uppercase(),
            };
        }
    }

    // Rule 3: the whole string is a bare region code.
    if is_two_letter_code(trimmed) {
        return LocationFilter::Region(trimmed.to_uppercase());
    }

    // Rule 4: treat the whole string as a city name.
    LocationFilter::City(trimmed.to_string())
}

/// Whether `s` is exactly two ASCII alphabetic characters.
fn is_two_letter_code(s: &str) -> bool {
    s.len() == 2 && s.chars().all(|c| c.is_ascii_alphabetic())
}
