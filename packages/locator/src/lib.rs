#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Cascading location resolution for listing addresses.
//!
//! Every listing gets a coordinate before its creation response returns,
//! regardless of external-service availability. Resolution runs three
//! tiers in order and stops at the first hit:
//!
//! 1. Full-address lookup (street + city + region + ZIP).
//! 2. City/region lookup.
//! 3. Static region centroid, falling back to [`COUNTRY_CENTER`] for
//!    unrecognized regions.
//!
//! "No match" and "service unavailable" fall through identically — the
//! pipeline accepts degraded precision over failure and never surfaces a
//! geocoding error to its caller. Listing creation must not block on
//! third-party availability.

use rentscout_geocoder::{AddressLookup, LookupResult};
use rentscout_geography::{COUNTRY_CENTER, centroid_for_region};
use rentscout_geography_models::{City, Coordinate, Region};
use rentscout_listing_models::Address;
use rentscout_store::{ListingStore, StoreError};

/// Resolves a coordinate for an address, running the tier chain.
///
/// Infallible: always produces *some* coordinate.
pub async fn resolve_coordinate(
    lookup: &dyn AddressLookup,
    address: &Address,
    city: &City,
    region: &Region,
) -> Coordinate {
    match lookup
        .lookup_address(
            &address.street,
            &city.name,
            &region.name,
            address.postal_code.as_deref(),
        )
        .await
    {
        LookupResult::Found(coordinate) => {
            log::debug!("Resolved '{}' at address level", address.street);
            return coordinate;
        }
        LookupResult::NotFound => {
            log::debug!("No address-level match for '{}'", address.street);
        }
        LookupResult::Unavailable => {
            log::warn!("Address-level lookup unavailable for '{}'", address.street);
        }
    }

    match lookup.lookup_city_region(&city.name, &region.name).await {
        LookupResult::Found(coordinate) => {
            log::debug!("Resolved '{}' at city level ({})", address.street, city.name);
            return coordinate;
        }
        LookupResult::NotFound => {
            log::debug!("No city-level match for '{}, {}'", city.name, region.name);
        }
        LookupResult::Unavailable => {
            log::warn!("City-level lookup unavailable for '{}'", city.name);
        }
    }

    centroid_for_region(&region.name).unwrap_or_else(|| {
        log::warn!(
            "No centroid for region '{}', using country center",
            region.name
        );
        COUNTRY_CENTER
    })
}

/// Resolves a coordinate for a listing address, fetching the referenced
/// city and region rows from the store.
///
/// # Errors
///
/// Returns [`StoreError`] only for a dangling city or region reference;
/// geocoding availability can never fail this function.
pub async fn resolve_listing_coordinate(
    lookup: &dyn AddressLookup,
    store: &dyn ListingStore,
    address: &Address,
) -> Result<Coordinate, StoreError> {
    let city = store.city(address.city_id).await?;
    let region = store.region(address.region_id).await?;
    Ok(resolve_coordinate(lookup, address, &city, &region).await)
}

/// Re-resolves a stored listing's coordinate and writes it back.
///
/// Invoked after updates that touch an address field. The coordinate
/// write is the resolver's only storage side effect.
///
/// # Errors
///
/// Returns [`StoreError`] if the listing or its city/region references
/// are missing.
pub async fn refresh_listing_coordinate(
    lookup: &dyn AddressLookup,
    store: &dyn ListingStore,
    listing_id: i64,
) -> Result<Coordinate, StoreError> {
    let listing = store.get_listing(listing_id).await?;
    let coordinate = resolve_listing_coordinate(lookup, store, &listing.address).await?;
    store.set_coordinate(listing_id, coordinate).await?;
    Ok(coordinate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rentscout_listing_models::{NewListing, PropertyType};
    use rentscout_store::MemoryListingStore;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted lookup: fixed outcome per tier, with call counting.
    struct StubLookup {
        address_result: LookupResult,
        city_result: LookupResult,
        address_calls: AtomicUsize,
        city_calls: AtomicUsize,
    }

    impl StubLookup {
        fn new(address_result: LookupResult, city_result: LookupResult) -> Self {
            Self {
                address_result,
                city_result,
                address_calls: AtomicUsize::new(0),
                city_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl AddressLookup for StubLookup {
        async fn lookup_address(
            &self,
            _street: &str,
            _city: &str,
            _region: &str,
            _postal_code: Option<&str>,
        ) -> LookupResult {
            self.address_calls.fetch_add(1, Ordering::Relaxed);
            self.address_result
        }

        async fn lookup_city_region(&self, _city: &str, _region: &str) -> LookupResult {
            self.city_calls.fetch_add(1, Ordering::Relaxed);
            self.city_result
        }
    }

    fn address() -> Address {
        Address {
            street: "100 N State St".to_string(),
            city_id: 1,
            region_id: 1,
            postal_code: Some("60602".to_string()),
        }
    }

    fn chicago() -> City {
        City {
            id: 1,
            name: "Chicago".to_string(),
            region_id: 1,
        }
    }

    fn illinois() -> Region {
        Region {
            id: 1,
            code: "IL".to_string(),
            name: "Illinois".to_string(),
        }
    }

    fn unknown_region() -> Region {
        Region {
            id: 99,
            code: "XX".to_string(),
            name: "New Caprica".to_string(),
        }
    }

    const ADDRESS_COORD: Coordinate = Coordinate {
        latitude: 41.8827,
        longitude: -87.6278,
    };
    const CITY_COORD: Coordinate = Coordinate {
        latitude: 41.8781,
        longitude: -87.6298,
    };

    #[tokio::test]
    async fn address_tier_success_is_terminal() {
        let lookup = StubLookup::new(
            LookupResult::Found(ADDRESS_COORD),
            LookupResult::Found(CITY_COORD),
        );
        let coordinate =
            resolve_coordinate(&lookup, &address(), &chicago(), &illinois()).await;
        assert_eq!(coordinate, ADDRESS_COORD);
        assert_eq!(lookup.address_calls.load(Ordering::Relaxed), 1);
        assert_eq!(lookup.city_calls.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn city_tier_covers_address_miss() {
        let lookup = StubLookup::new(LookupResult::NotFound, LookupResult::Found(CITY_COORD));
        let coordinate =
            resolve_coordinate(&lookup, &address(), &chicago(), &illinois()).await;
        assert_eq!(coordinate, CITY_COORD);
    }

    #[tokio::test]
    async fn unavailable_falls_through_like_not_found() {
        let lookup = StubLookup::new(LookupResult::Unavailable, LookupResult::Found(CITY_COORD));
        let coordinate =
            resolve_coordinate(&lookup, &address(), &chicago(), &illinois()).await;
        assert_eq!(coordinate, CITY_COORD);
    }

    #[tokio::test]
    async fn centroid_covers_both_lookup_misses() {
        let lookup = StubLookup::new(LookupResult::NotFound, LookupResult::Unavailable);
        let coordinate =
            resolve_coordinate(&lookup, &address(), &chicago(), &illinois()).await;
        let centroid = centroid_for_region("Illinois").unwrap();
        assert_eq!(coordinate, centroid);
        assert_eq!(lookup.address_calls.load(Ordering::Relaxed), 1);
        assert_eq!(lookup.city_calls.load(Ordering::Relaxed), 1);
    }

    #[tokio::test]
    async fn unrecognized_region_yields_country_center() {
        let lookup = StubLookup::new(LookupResult::Unavailable, LookupResult::Unavailable);
        let coordinate =
            resolve_coordinate(&lookup, &address(), &chicago(), &unknown_region()).await;
        assert_eq!(coordinate, COUNTRY_CENTER);
    }

    #[tokio::test]
    async fn resolution_is_idempotent() {
        let lookup = StubLookup::new(LookupResult::Found(ADDRESS_COORD), LookupResult::NotFound);
        let first = resolve_coordinate(&lookup, &address(), &chicago(), &illinois()).await;
        let second = resolve_coordinate(&lookup, &address(), &chicago(), &illinois()).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn refresh_writes_coordinate_back() {
        let store = MemoryListingStore::seeded();
        let city_id = store.city_id_by_name("Chicago").unwrap();
        let region_id = store.region_id_by_code("IL").unwrap();
        let listing = store
            .insert_listing(
                NewListing {
                    title: "2br loop apartment".to_string(),
                    description: None,
                    property_type: PropertyType::Apartment,
                    address: Address {
                        street: "100 N State St".to_string(),
                        city_id,
                        region_id,
                        postal_code: Some("60602".to_string()),
                    },
                    price_monthly: 1850,
                    bedrooms: 2,
                    bathrooms: 1.0,
                    pets_allowed: true,
                },
                Coordinate::new(0.0, 0.0),
            )
            .await
            .unwrap();

        let lookup = StubLookup::new(LookupResult::Found(ADDRESS_COORD), LookupResult::NotFound);
        let coordinate = refresh_listing_coordinate(&lookup, &store, listing.id)
            .await
            .unwrap();
        assert_eq!(coordinate, ADDRESS_COORD);

        let stored = store.get_listing(listing.id).await.unwrap();
        assert!((stored.latitude - ADDRESS_COORD.latitude).abs() < 1e-9);
        assert!((stored.longitude - ADDRESS_COORD.longitude).abs() < 1e-9);
    }

    #[tokio::test]
    async fn dangling_city_reference_is_store_error() {
        let store = MemoryListingStore::seeded();
        let lookup = StubLookup::new(LookupResult::NotFound, LookupResult::NotFound);
        let bad_address = Address {
            street: "1 Nowhere Ln".to_string(),
            city_id: 9999,
            region_id: 1,
            postal_code: None,
        };
        let err = resolve_listing_coordinate(&lookup, &store, &bad_address)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { entity: "city", .. }));
    }
}
