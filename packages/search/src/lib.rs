#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Search-side location handling.
//!
//! Renters type locations into a single box — `"90210"`, `"Chicago, IL"`,
//! `"TX"`, `"Lake Forest Park"` — instead of filling separate fields.
//! [`parser`] classifies that string into a structured location filter;
//! [`filter`] merges the classification with the explicitly-provided
//! filters into one [`ListingQuery`](rentscout_listing_models::ListingQuery)
//! predicate for the store.

pub mod filter;
pub mod parser;

pub use filter::{SearchRequest, build_query};
pub use parser::{LocationFilter, parse_location};
