//! API route configuration.

use crate::api::handlers::{
    health_handler, missing_id_handler, not_found_handler, redirect_handler, shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `POST /url`     - Create a short link
/// - `GET  /health`  - Storage health check
/// - `GET  /`        - 404, missing id
/// - `GET  /{id}`    - 303 redirect to the stored URL
///
/// Static segments take precedence over `/{id}`. Unmatched routes return a
/// JSON 404.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/", get(missing_id_handler))
        .route("/{id}", get(redirect_handler))
        .fallback(not_found_handler)
}
