//! HTTP API application wiring (Axum router + store wiring).
//!
//! This folder is structured like:
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use stockroom_inventory::InventoryStore;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router with the seeded store (public entrypoint used
/// by `main.rs`).
pub fn build_app() -> Router {
    build_app_with_store(Arc::new(InventoryStore::with_sample_items()))
}

/// Build the router around a caller-supplied store (tests use this to start
/// from an empty inventory).
pub fn build_app_with_store(store: Arc<InventoryStore>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router().layer(Extension(store)))
        .layer(ServiceBuilder::new())
}
