#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the rentscout marketplace.
//!
//! Serves the listing search and management endpoints. Listing creation
//! and address edits geocode synchronously through the location resolver
//! before the response returns, so every stored listing carries a
//! coordinate. Rendering, auth, uploads, and payments live in other
//! services; this process only exposes the JSON API.

mod handlers;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use rentscout_geocoder::{AddressLookup, GeocoderConfig, NominatimClient};
use rentscout_store::{ListingStore, MemoryListingStore};

/// Shared application state.
pub struct AppState {
    /// Listing storage collaborator.
    pub store: Arc<dyn ListingStore>,
    /// External address lookup service.
    pub geocoder: Arc<dyn AddressLookup>,
}

/// Starts the rentscout API server.
///
/// Builds the seeded in-memory store and the Nominatim client from the
/// embedded configuration, then serves the API. This is a regular async
/// function — the caller provides the runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
///
/// # Panics
///
/// Panics if the geocoding client cannot be constructed.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    log::info!("Loading geocoder configuration...");
    let geocoder =
        NominatimClient::new(GeocoderConfig::load()).expect("Failed to build geocoding client");

    let state = web::Data::new(AppState {
        store: Arc::new(MemoryListingStore::seeded()),
        geocoder: Arc::new(geocoder),
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/search", web::get().to(handlers::search))
                    .route("/listings", web::post().to(handlers::create_listing))
                    .route("/listings/{id}", web::get().to(handlers::get_listing))
                    .route("/listings/{id}", web::put().to(handlers::update_listing)),
            )
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
