//! HTTP API application wiring (Axum router + store injection).
//!
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `envelope.rs`: the JSend response body every route returns
//! - `schema.rs` / `extract.rs`: request validation before handlers run
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: error -> envelope conversion

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use orgapi_infra::{InMemoryOrganizationStore, OrganizationStore};

use crate::middleware;

pub mod dto;
pub mod envelope;
pub mod errors;
pub mod extract;
pub mod routes;
pub mod schema;

/// Store handle injected into every handler.
pub type SharedStore = Arc<dyn OrganizationStore>;

/// Build the full HTTP router around the given store.
pub fn build_app(store: SharedStore) -> Router {
    Router::new()
        .route(
            "/health",
            get(routes::system::health).fallback(routes::system::fallback),
        )
        .nest("/api", routes::router())
        .fallback(routes::system::fallback)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_logging))
                .layer(Extension(store)),
        )
}

/// Router backed by a fresh in-memory store holding the seed record.
pub fn build_default_app() -> Router {
    build_app(Arc::new(InMemoryOrganizationStore::seeded()))
}
