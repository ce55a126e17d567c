//! Transport error types.

use serde::Deserialize;
use thiserror::Error;

/// Result type for transport operations.
pub type Result<T> = std::result::Result<T, TransportError>;

/// Transport errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Normalized error reported by the Graph API itself.
    #[error(transparent)]
    Api(#[from] GraphApiError),

    /// Non-success response that could not be normalized.
    #[error("Response error: {status} - {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Underlying HTTP client error (network failure, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// JSON decoding error.
    #[error("JSON error: {0}")]
    Json(String),
}

impl TransportError {
    /// Check if this is a timeout error.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }

    /// Get the HTTP status code if the remote responded at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Get the normalized Graph API error, if that is what this is.
    pub fn as_api_error(&self) -> Option<&GraphApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

/// Error metadata reported by the Graph API in its error envelope.
#[derive(Debug, Clone, Deserialize, Error)]
#[error("Graph API error {code} ({error_type}): {message} [fbtrace_id: {fbtrace_id}]")]
pub struct GraphApiError {
    /// Human-readable error message.
    pub message: String,
    /// Remote error code.
    pub code: i64,
    /// Remote error type, e.g. `OAuthException`.
    #[serde(rename = "type")]
    pub error_type: String,
    /// Facebook trace ID for the failed request.
    pub fbtrace_id: String,
}

/// Error envelope wrapping [`GraphApiError`] in non-success response bodies.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphErrorEnvelope {
    pub(crate) error: GraphApiError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_parsing() {
        let body = r#"{"error":{"message":"Invalid","code":100,"type":"OAuthException","fbtrace_id":"abc"}}"#;
        let envelope: GraphErrorEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.error.code, 100);
        assert_eq!(envelope.error.error_type, "OAuthException");
        assert_eq!(envelope.error.fbtrace_id, "abc");
        assert_eq!(envelope.error.message, "Invalid");
    }

    #[test]
    fn test_envelope_without_error_object_is_rejected() {
        let body = r#"{"data":[]}"#;
        assert!(serde_json::from_str::<GraphErrorEnvelope>(body).is_err());
    }

    #[test]
    fn test_api_error_display() {
        let err = GraphApiError {
            message: "Invalid".to_string(),
            code: 100,
            error_type: "OAuthException".to_string(),
            fbtrace_id: "abc".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("100"));
        assert!(rendered.contains("OAuthException"));
        assert!(rendered.contains("abc"));
    }

    #[test]
    fn test_status_code_helper() {
        let err = TransportError::Status {
            status: 400,
            body: "bad request".to_string(),
        };
        assert_eq!(err.status_code(), Some(400));
        assert!(err.as_api_error().is_none());
    }
}
