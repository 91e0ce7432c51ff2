//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// { "url": "http://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "url": "http://localhost:8080/aZ3kP9qL" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not valid JSON or `url` is missing or empty.
/// Returns 500 Internal Server Error if the link could not be stored.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    payload.validate()?;

    let link = state.link_service.shorten(&payload.url).await?;

    Ok(Json(ShortenResponse {
        url: link.short_url,
    }))
}
