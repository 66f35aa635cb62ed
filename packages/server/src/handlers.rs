//! HTTP handler functions for the rentscout API.

use actix_web::{HttpResponse, web};
use rentscout_listing_models::{ListingUpdate, NewListing};
use rentscout_locator::{refresh_listing_coordinate, resolve_listing_coordinate};
use rentscout_search::{SearchRequest, build_query};
use rentscout_server_models::{
    ApiHealth, ApiListing, CreateListingRequest, SearchParams, UpdateListingRequest,
};
use rentscout_store::StoreError;

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/search`
///
/// Classifies the free-text `q` parameter, merges it with the explicit
/// filters, and runs the resulting predicate against the store.
pub async fn search(state: web::Data<AppState>, params: web::Query<SearchParams>) -> HttpResponse {
    let params = params.into_inner();
    let request = SearchRequest {
        q: params.q,
        region_code: params.region_code,
        city: params.city,
        postal_code: params.postal_code,
        property_type: params.property_type,
        price_min: params.price_min,
        price_max: params.price_max,
        bedrooms_min: params.bedrooms_min,
        bathrooms_min: params.bathrooms_min,
        pets_allowed: params.pets_allowed,
        limit: params.limit,
        offset: params.offset,
    };
    let query = build_query(&request);

    match state.store.query_listings(&query).await {
        Ok(rows) => {
            let listings: Vec<ApiListing> = rows.into_iter().map(ApiListing::from).collect();
            HttpResponse::Ok().json(listings)
        }
        Err(e) => {
            log::error!("Failed to query listings: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to query listings"
            }))
        }
    }
}

/// `POST /api/listings`
///
/// Creates a listing. The coordinate is resolved synchronously before the
/// row is inserted, so the response always carries latitude/longitude —
/// geocoding outages degrade precision, never availability.
pub async fn create_listing(
    state: web::Data<AppState>,
    body: web::Json<CreateListingRequest>,
) -> HttpResponse {
    let listing: NewListing = body.into_inner().into();

    let coordinate = match resolve_listing_coordinate(
        state.geocoder.as_ref(),
        state.store.as_ref(),
        &listing.address,
    )
    .await
    {
        Ok(coordinate) => coordinate,
        Err(e) => {
            log::warn!("Rejected listing with dangling location reference: {e}");
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": e.to_string()
            }));
        }
    };

    match state.store.insert_listing(listing, coordinate).await {
        Ok(row) => HttpResponse::Created().json(ApiListing::from(row)),
        Err(e) => {
            log::error!("Failed to insert listing: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to insert listing"
            }))
        }
    }
}

/// `GET /api/listings/{id}`
pub async fn get_listing(state: web::Data<AppState>, path: web::Path<i64>) -> HttpResponse {
    let id = path.into_inner();
    match state.store.get_listing(id).await {
        Ok(row) => HttpResponse::Ok().json(ApiListing::from(row)),
        Err(e @ StoreError::NotFound { .. }) => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

/// `PUT /api/listings/{id}`
///
/// Applies a partial update. The coordinate is re-resolved only when the
/// payload touches an address field; other updates leave it as-is, even
/// if stale.
pub async fn update_listing(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdateListingRequest>,
) -> HttpResponse {
    let id = path.into_inner();
    let update: ListingUpdate = body.into_inner().into();
    let needs_geocode = update.touches_address();

    let mut listing = match state.store.update_listing(id, update).await {
        Ok(row) => row,
        Err(e @ StoreError::NotFound { .. }) => {
            return HttpResponse::NotFound().json(serde_json::json!({ "error": e.to_string() }));
        }
    };

    if needs_geocode {
        match refresh_listing_coordinate(state.geocoder.as_ref(), state.store.as_ref(), id).await {
            Ok(coordinate) => {
                listing.latitude = coordinate.latitude;
                listing.longitude = coordinate.longitude;
            }
            Err(e) => {
                log::warn!("Coordinate refresh failed for listing {id}: {e}");
                return HttpResponse::BadRequest().json(serde_json::json!({
                    "error": e.to_string()
                }));
            }
        }
    }

    HttpResponse::Ok().json(ApiListing::from(listing))
}
