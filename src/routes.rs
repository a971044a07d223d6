//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /api/adminlogin` - Admin credential verification (public)
//! - `GET  /health`         - Health check: admin store (public)
//!
//! # Middleware
//!
//! - **Catch-all** - Panics become the generic 500 JSON response
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{catch_panic, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::public_routes())
        .with_state(state)
        .layer(catch_panic::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
