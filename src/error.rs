//! Request-path error type and its HTTP mapping.
//!
//! [`AppError`] is returned by services and repositories. It carries no HTTP
//! knowledge in its variants; the [`IntoResponse`] impl at the bottom of this
//! module is the single place where errors become status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serialized error payload returned to API clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Application-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request input was missing or malformed.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// A required path parameter was empty.
    #[error("Missing parameter: {name}")]
    MissingParameter { name: &'static str },

    /// The requested resource does not exist.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Storage or other server-side failure. Details are never sent to clients.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn missing_parameter(name: &'static str) -> Self {
        Self::MissingParameter { name }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Returns the HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::MissingParameter { .. } | AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into the client-facing payload.
    ///
    /// Internal errors are reduced to a generic message with empty details.
    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            AppError::Validation { message, details } => ErrorInfo {
                code: "validation_error",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::MissingParameter { name } => ErrorInfo {
                code: "missing_parameter",
                message: format!("Missing parameter: {name}"),
                details: json!({ "parameter": name }),
            },
            AppError::NotFound { message, details } => ErrorInfo {
                code: "not_found",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::Internal { .. } => ErrorInfo {
                code: "internal_error",
                message: "Internal server error".to_string(),
                details: json!({}),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::internal("Database error", json!({ "reason": e.to_string() }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|k| k.to_string())
            .collect();
        fields.sort();
        AppError::bad_request("Invalid request", json!({ "fields": fields }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("x", json!({})).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::missing_parameter("id").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::not_found("x", json!({})).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::internal("x", json!({})).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_error_hides_details() {
        let err = AppError::internal(
            "Database error",
            json!({ "reason": "connection refused to 10.0.0.5:5432" }),
        );
        let info = err.to_error_info();

        assert_eq!(info.code, "internal_error");
        assert_eq!(info.message, "Internal server error");
        assert_eq!(info.details, json!({}));
    }

    #[test]
    fn test_missing_parameter_info() {
        let info = AppError::missing_parameter("id").to_error_info();
        assert_eq!(info.code, "missing_parameter");
        assert_eq!(info.details["parameter"], "id");
    }

    #[test]
    fn test_sqlx_error_maps_to_internal() {
        let err = AppError::from(sqlx::Error::RowNotFound);

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Database error");
        assert_eq!(err.to_error_info().details, json!({}));
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::bad_request("URL must not be empty", json!({}));
        assert_eq!(err.to_string(), "URL must not be empty");
    }
}
