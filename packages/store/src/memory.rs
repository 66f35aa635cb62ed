//! In-memory [`ListingStore`] implementation.
//!
//! Geographic reference rows are seeded from the embedded centroid table;
//! listings live in an `RwLock`ed map. Predicate semantics match the
//! documented [`ListingQuery`] contract: inclusive price bounds, `>=` room
//! minimums, case-insensitive city match.

use std::collections::BTreeMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use rentscout_geography_models::{City, Coordinate, Region};
use rentscout_listing_models::{Listing, ListingQuery, ListingUpdate, NewListing};

use crate::{ListingStore, StoreError};

/// In-memory listing store.
pub struct MemoryListingStore {
    regions: BTreeMap<i32, Region>,
    cities: BTreeMap<i32, City>,
    listings: RwLock<BTreeMap<i64, Listing>>,
    next_id: AtomicI64,
}

/// Cities seeded alongside the region table, as `(name, region code)`.
const SEED_CITIES: &[(&str, &str)] = &[
    ("Chicago", "IL"),
    ("Seattle", "WA"),
    ("Lake Forest Park", "WA"),
    ("Austin", "TX"),
    ("Portland", "OR"),
    ("Nashville", "TN"),
];

impl MemoryListingStore {
    /// Creates a store seeded with all known regions and a starter set of
    /// cities.
    #[must_use]
    pub fn seeded() -> Self {
        let regions: BTreeMap<i32, Region> = rentscout_geography::regions()
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let id = i32::try_from(i).unwrap_or(i32::MAX) + 1;
                (
                    id,
                    Region {
                        id,
                        code: r.code.clone(),
                        name: r.name.clone(),
                    },
                )
            })
            .collect();

        let cities: BTreeMap<i32, City> = SEED_CITIES
            .iter()
            .enumerate()
            .filter_map(|(i, (name, region_code))| {
                let id = i32::try_from(i).unwrap_or(i32::MAX) + 1;
                let region_id = regions
                    .values()
                    .find(|r| r.code == *region_code)
                    .map(|r| r.id)?;
                Some((
                    id,
                    City {
                        id,
                        name: (*name).to_string(),
                        region_id,
                    },
                ))
            })
            .collect();

        Self {
            regions,
            cities,
            listings: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Finds a seeded city id by name (test/demo convenience).
    #[must_use]
    pub fn city_id_by_name(&self, name: &str) -> Option<i32> {
        self.cities
            .values()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .map(|c| c.id)
    }

    /// Finds a seeded region id by two-letter code (test/demo convenience).
    #[must_use]
    pub fn region_id_by_code(&self, code: &str) -> Option<i32> {
        self.regions
            .values()
            .find(|r| r.code.eq_ignore_ascii_case(code))
            .map(|r| r.id)
    }

    fn matches(&self, listing: &Listing, query: &ListingQuery) -> bool {
        if let Some(postal_code) = &query.postal_code {
            if listing.address.postal_code.as_deref() != Some(postal_code.as_str()) {
                return false;
            }
        }

        if let Some(region_code) = &query.region_code {
            let Some(region) = self.regions.get(&listing.address.region_id) else {
                return false;
            };
            if !region.code.eq_ignore_ascii_case(region_code) {
                return false;
            }
        }

        if let Some(city_name) = &query.city_name {
            let Some(city) = self.cities.get(&listing.address.city_id) else {
                return false;
            };
            if !city.name.eq_ignore_ascii_case(city_name) {
                return false;
            }
        }

        if let Some(property_type) = query.property_type {
            if listing.property_type != property_type {
                return false;
            }
        }

        if let Some(min) = query.price_min {
            if listing.price_monthly < min {
                return false;
            }
        }
        if let Some(max) = query.price_max {
            if listing.price_monthly > max {
                return false;
            }
        }

        if let Some(min) = query.bedrooms_min {
            if listing.bedrooms < min {
                return false;
            }
        }
        if let Some(min) = query.bathrooms_min {
            if listing.bathrooms < min {
                return false;
            }
        }

        if let Some(pets) = query.pets_allowed {
            if listing.pets_allowed != pets {
                return false;
            }
        }

        true
    }
}

#[async_trait]
impl ListingStore for MemoryListingStore {
    async fn region(&self, id: i32) -> Result<Region, StoreError> {
        self.regions
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound {
                entity: "region",
                id: i64::from(id),
            })
    }

    async fn city(&self, id: i32) -> Result<City, StoreError> {
        self.cities.get(&id).cloned().ok_or(StoreError::NotFound {
            entity: "city",
            id: i64::from(id),
        })
    }

    async fn insert_listing(
        &self,
        listing: NewListing,
        coordinate: Coordinate,
    ) -> Result<Listing, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let now = Utc::now();
        let row = Listing {
            id,
            title: listing.title,
            description: listing.description,
            property_type: listing.property_type,
            address: listing.address,
            price_monthly: listing.price_monthly,
            bedrooms: listing.bedrooms,
            bathrooms: listing.bathrooms,
            pets_allowed: listing.pets_allowed,
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            created_at: now,
            updated_at: now,
        };
        self.listings
            .write()
            .expect("listing map lock poisoned")
            .insert(id, row.clone());
        Ok(row)
    }

    async fn get_listing(&self, id: i64) -> Result<Listing, StoreError> {
        self.listings
            .read()
            .expect("listing map lock poisoned")
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound {
                entity: "listing",
                id,
            })
    }

    async fn update_listing(&self, id: i64, update: ListingUpdate) -> Result<Listing, StoreError> {
        let mut listings = self.listings.write().expect("listing map lock poisoned");
        let listing = listings.get_mut(&id).ok_or(StoreError::NotFound {
            entity: "listing",
            id,
        })?;

        if let Some(title) = update.title {
            listing.title = title;
        }
        if let Some(description) = update.description {
            listing.description = Some(description);
        }
        if let Some(property_type) = update.property_type {
            listing.property_type = property_type;
        }
        if let Some(street) = update.street {
            listing.address.street = street;
        }
        if let Some(city_id) = update.city_id {
            listing.address.city_id = city_id;
        }
        if let Some(region_id) = update.region_id {
            listing.address.region_id = region_id;
        }
        if let Some(postal_code) = update.postal_code {
            listing.address.postal_code = Some(postal_code);
        }
        if let Some(price_monthly) = update.price_monthly {
            listing.price_monthly = price_monthly;
        }
        if let Some(bedrooms) = update.bedrooms {
            listing.bedrooms = bedrooms;
        }
        if let Some(bathrooms) = update.bathrooms {
            listing.bathrooms = bathrooms;
        }
        if let Some(pets_allowed) = update.pets_allowed {
            listing.pets_allowed = pets_allowed;
        }
        listing.updated_at = Utc::now();

        Ok(listing.clone())
    }

    async fn set_coordinate(&self, id: i64, coordinate: Coordinate) -> Result<(), StoreError> {
        let mut listings = self.listings.write().expect("listing map lock poisoned");
        let listing = listings.get_mut(&id).ok_or(StoreError::NotFound {
            entity: "listing",
            id,
        })?;
        listing.latitude = coordinate.latitude;
        listing.longitude = coordinate.longitude;
        Ok(())
    }

    async fn query_listings(&self, query: &ListingQuery) -> Result<Vec<Listing>, StoreError> {
        let listings = self.listings.read().expect("listing map lock poisoned");
        Ok(listings
            .values()
            .filter(|l| self.matches(l, query))
            .skip(query.offset as usize)
            .take(query.limit as usize)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentscout_listing_models::{Address, PropertyType};

    fn new_listing(store: &MemoryListingStore, city: &str, price: u32, bedrooms: u32) -> NewListing {
        let city_id = store.city_id_by_name(city).unwrap();
        let region_id = store
            .cities
            .get(&city_id)
            .map(|c| c.region_id)
            .unwrap();
        NewListing {
            title: format!("{bedrooms}br in {city}"),
            description: None,
            property_type: PropertyType::Apartment,
            address: Address {
                street: "100 N State St".to_string(),
                city_id,
                region_id,
                postal_code: Some("60602".to_string()),
            },
            price_monthly: price,
            bedrooms,
            bathrooms: 1.0,
            pets_allowed: false,
        }
    }

    fn origin() -> Coordinate {
        Coordinate::new(41.8827, -87.6278)
    }

    #[tokio::test]
    async fn empty_query_returns_everything() {
        let store = MemoryListingStore::seeded();
        store
            .insert_listing(new_listing(&store, "Chicago", 1500, 2), origin())
            .await
            .unwrap();
        store
            .insert_listing(new_listing(&store, "Seattle", 2400, 1), origin())
            .await
            .unwrap();

        let rows = store
            .query_listings(&ListingQuery::default())
            .await
            .unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn price_bounds_are_inclusive() {
        let store = MemoryListingStore::seeded();
        store
            .insert_listing(new_listing(&store, "Chicago", 1500, 2), origin())
            .await
            .unwrap();

        let query = ListingQuery {
            price_min: Some(1500),
            price_max: Some(1500),
            ..ListingQuery::default()
        };
        assert_eq!(store.query_listings(&query).await.unwrap().len(), 1);

        let query = ListingQuery {
            price_min: Some(1501),
            ..ListingQuery::default()
        };
        assert!(store.query_listings(&query).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn room_counts_are_minimums() {
        let store = MemoryListingStore::seeded();
        store
            .insert_listing(new_listing(&store, "Chicago", 1500, 3), origin())
            .await
            .unwrap();

        let query = ListingQuery {
            bedrooms_min: Some(2),
            ..ListingQuery::default()
        };
        assert_eq!(store.query_listings(&query).await.unwrap().len(), 1);

        let query = ListingQuery {
            bedrooms_min: Some(4),
            ..ListingQuery::default()
        };
        assert!(store.query_listings(&query).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn city_match_is_case_insensitive() {
        let store = MemoryListingStore::seeded();
        store
            .insert_listing(new_listing(&store, "Chicago", 1500, 2), origin())
            .await
            .unwrap();

        let query = ListingQuery {
            city_name: Some("cHiCaGo".to_string()),
            ..ListingQuery::default()
        };
        assert_eq!(store.query_listings(&query).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn region_code_filters_by_listing_region() {
        let store = MemoryListingStore::seeded();
        store
            .insert_listing(new_listing(&store, "Chicago", 1500, 2), origin())
            .await
            .unwrap();
        store
            .insert_listing(new_listing(&store, "Seattle", 2400, 1), origin())
            .await
            .unwrap();

        let query = ListingQuery {
            region_code: Some("wa".to_string()),
            ..ListingQuery::default()
        };
        let rows = store.query_listings(&query).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "1br in Seattle");
    }

    #[tokio::test]
    async fn limit_and_offset_page_results() {
        let store = MemoryListingStore::seeded();
        for price in [1000, 1100, 1200] {
            store
                .insert_listing(new_listing(&store, "Chicago", price, 1), origin())
                .await
                .unwrap();
        }

        let query = ListingQuery {
            limit: 2,
            offset: 2,
            ..ListingQuery::default()
        };
        assert_eq!(store.query_listings(&query).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn set_coordinate_overwrites_only_coordinates() {
        let store = MemoryListingStore::seeded();
        let listing = store
            .insert_listing(new_listing(&store, "Chicago", 1500, 2), origin())
            .await
            .unwrap();

        store
            .set_coordinate(listing.id, Coordinate::new(40.0417, -89.1965))
            .await
            .unwrap();

        let updated = store.get_listing(listing.id).await.unwrap();
        assert!((updated.latitude - 40.0417).abs() < 1e-6);
        assert_eq!(updated.title, listing.title);
    }

    #[tokio::test]
    async fn missing_listing_is_not_found() {
        let store = MemoryListingStore::seeded();
        let err = store.get_listing(999).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::NotFound {
                entity: "listing",
                id: 999
            }
        ));
    }
}
