//! Handler for short link redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::warn;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short id to its stored URL.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// Responds with 303 See Other, so clients follow up with a `GET`
/// regardless of the original request method.
///
/// # Errors
///
/// Returns 404 Not Found if the id is unknown.
/// Returns 500 Internal Server Error on storage failure, or if the stored
/// URL cannot be carried in a `Location` header.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let url = state.link_service.resolve(&id).await?;

    // Stored URLs are not validated, so control characters are possible.
    let location = HeaderValue::from_bytes(url.as_bytes()).map_err(|_| {
        warn!(id = %id, "Stored URL is not a valid Location header");
        AppError::internal("Invalid redirect target", json!({ "id": id }))
    })?;

    Ok((StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response())
}

/// Handles `GET /` where no id was supplied.
pub async fn missing_id_handler() -> AppError {
    AppError::missing_parameter("id")
}
