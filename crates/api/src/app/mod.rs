//! HTTP API application wiring (Axum router + store wiring).
//!
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

use stockroom_inventory::{InMemoryInventory, InventoryStore};

pub mod dto;
pub mod errors;
pub mod routes;

/// Store handle shared by every handler.
pub type SharedStore = Arc<dyn InventoryStore>;

/// Build the full HTTP router over a freshly seeded table (used by `main.rs`).
pub fn build_app() -> Router {
    build_app_with_store(Arc::new(InMemoryInventory::seeded()))
}

/// Build the router over a caller-supplied store.
pub fn build_app_with_store(store: SharedStore) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .fallback(routes::system::not_found)
        .layer(axum::middleware::map_response(errors::method_not_allowed_to_json))
        .layer(Extension(store))
}
