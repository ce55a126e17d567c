//! Client error types.

use graph_ig_http::{GraphApiError, TransportError};
use thiserror::Error;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Client errors.
#[derive(Debug, Error)]
pub enum Error {
    /// No access token was supplied and the environment fallback is unset.
    #[error(
        "Missing access token. An access token is required to make requests to the Instagram \
         Graph API. Provide one in the client configuration or set the USER_ACCESS_TOKEN \
         environment variable. Tokens can be obtained by following \
         https://developers.facebook.com/docs/facebook-login/guides/access-tokens#usertokens"
    )]
    MissingAccessToken,

    /// Transport-level or normalized Graph API failure.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl Error {
    /// Get the normalized Graph API error, if that is what this is.
    pub fn as_api_error(&self) -> Option<&GraphApiError> {
        match self {
            Self::Transport(transport) => transport.as_api_error(),
            _ => None,
        }
    }

    /// Get the HTTP status code if the remote responded at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Transport(transport) => transport.status_code(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_message_names_the_env_var() {
        let message = Error::MissingAccessToken.to_string();
        assert!(message.contains("USER_ACCESS_TOKEN"));
        assert!(message.contains("access-tokens"));
    }

    #[test]
    fn test_api_error_is_reachable_through_the_wrapper() {
        let err: Error = TransportError::Api(GraphApiError {
            message: "Invalid".to_string(),
            code: 100,
            error_type: "OAuthException".to_string(),
            fbtrace_id: "abc".to_string(),
        })
        .into();

        assert_eq!(err.as_api_error().unwrap().code, 100);
    }
}
