//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /url`     - Create a short link
//! - `GET  /{id}`    - Short link redirect (303)
//! - `GET  /health`  - Storage health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured access log
//! - **CORS** - Permissive cross-origin policy
//! - **Timeout** - Per-request deadline
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{cors, timeout, tracing};
use crate::state::AppState;
use axum::Router;
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and middleware except path normalization.
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    api::routes::public_routes()
        .with_state(state)
        .layer(timeout::layer(request_timeout))
        .layer(cors::layer())
        .layer(tracing::layer())
}

/// Constructs the application service.
///
/// Trailing slashes are trimmed before routing, so `/url/` and `/url` are the
/// same endpoint.
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, request_timeout))
}
