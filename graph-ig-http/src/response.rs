//! HTTP response wrapper.

use bytes::Bytes;
use http::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{Result, TransportError};

/// HTTP response wrapper.
#[derive(Debug)]
pub struct Response {
    status: StatusCode,
    body: Bytes,
    url: Url,
}

impl Response {
    /// Create a response from a reqwest response.
    pub(crate) async fn from_reqwest(response: reqwest::Response) -> Self {
        let status = response.status();
        let url = response.url().clone();
        let body = response.bytes().await.unwrap_or_default();

        Self { status, body, url }
    }

    /// Get the status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Check if the response was successful (2xx).
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Get the response URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Get the response body as bytes.
    pub fn bytes(&self) -> &Bytes {
        &self.body
    }

    /// Get the response body as text.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|e| TransportError::Json(e.to_string()))
    }

    /// Surface a non-success status as [`TransportError::Status`].
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(TransportError::Status {
                status: self.status.as_u16(),
                body: self.text(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn response(status: StatusCode, body: &str) -> Response {
        Response {
            status,
            body: Bytes::copy_from_slice(body.as_bytes()),
            url: Url::parse("https://graph.facebook.com/v16.0/123").unwrap(),
        }
    }

    #[derive(Deserialize)]
    struct Envelope {
        success: bool,
    }

    #[test]
    fn test_json_decoding() {
        let decoded: Envelope = response(StatusCode::OK, r#"{"success":true}"#)
            .json()
            .unwrap();
        assert!(decoded.success);
    }

    #[test]
    fn test_json_shape_mismatch_is_a_json_error() {
        let result = response(StatusCode::OK, r#"{"ok":1}"#).json::<Envelope>();
        assert!(matches!(result, Err(TransportError::Json(_))));
    }

    #[test]
    fn test_error_for_status_passes_success_through() {
        assert!(response(StatusCode::OK, "{}").error_for_status().is_ok());
    }

    #[test]
    fn test_error_for_status_captures_body() {
        let err = response(StatusCode::BAD_REQUEST, "bad news")
            .error_for_status()
            .unwrap_err();
        match err {
            TransportError::Status { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, "bad news");
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }
}
