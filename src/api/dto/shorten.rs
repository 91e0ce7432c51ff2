//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
///
/// The URL is stored as given; only emptiness is rejected. A missing `url`
/// field deserializes to an empty string and fails validation.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "URL must not be empty"))]
    pub url: String,
}

/// Response carrying the fully-qualified short link.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_url_field_fails_validation() {
        let request: ShortenRequest = serde_json::from_str("{}").unwrap();
        assert!(request.url.is_empty());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_non_empty_url_passes_validation() {
        let request: ShortenRequest =
            serde_json::from_str(r#"{"url":"http://example.com"}"#).unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_any_non_empty_string_is_accepted() {
        let request: ShortenRequest = serde_json::from_str(r#"{"url":"foo"}"#).unwrap();
        assert!(request.validate().is_ok());
    }
}
