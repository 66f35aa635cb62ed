#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Storage boundary for the listing marketplace.
//!
//! Persistent storage is an external collaborator: the rest of the system
//! only sees [`ListingStore`], a generic lookup/filter interface. The
//! filtered-query operation consumes a [`ListingQuery`] predicate —
//! equivalent to a SQL `WHERE` clause built from its present fields.
//!
//! [`MemoryListingStore`] is the in-process implementation used by the
//! server binary and the test suites.

pub mod memory;

pub use memory::MemoryListingStore;

use async_trait::async_trait;
use rentscout_geography_models::{City, Coordinate, Region};
use rentscout_listing_models::{Listing, ListingQuery, ListingUpdate, NewListing};
use thiserror::Error;

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A referenced entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity kind (e.g. `"listing"`, `"region"`).
        entity: &'static str,
        /// The missing key.
        id: i64,
    },
}

/// Generic storage interface for listings and geographic reference rows.
#[async_trait]
pub trait ListingStore: Send + Sync {
    /// Fetches a region by id.
    async fn region(&self, id: i32) -> Result<Region, StoreError>;

    /// Fetches a city by id.
    async fn city(&self, id: i32) -> Result<City, StoreError>;

    /// Inserts a listing with its resolved coordinate, assigning an id
    /// and timestamps.
    async fn insert_listing(
        &self,
        listing: NewListing,
        coordinate: Coordinate,
    ) -> Result<Listing, StoreError>;

    /// Fetches a listing by id.
    async fn get_listing(&self, id: i64) -> Result<Listing, StoreError>;

    /// Applies a partial update to a listing.
    async fn update_listing(&self, id: i64, update: ListingUpdate) -> Result<Listing, StoreError>;

    /// Overwrites a listing's coordinate. The location resolver's only
    /// write side effect.
    async fn set_coordinate(&self, id: i64, coordinate: Coordinate) -> Result<(), StoreError>;

    /// Returns listings matching every present field of `query`.
    async fn query_listings(&self, query: &ListingQuery) -> Result<Vec<Listing>, StoreError>;
}
