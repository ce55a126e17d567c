//! Client configuration and credential resolution.

use std::env;

/// Environment variable consulted when no access token is configured.
pub const ACCESS_TOKEN_ENV: &str = "USER_ACCESS_TOKEN";

/// Client construction parameters.
///
/// The access token falls back to the [`ACCESS_TOKEN_ENV`] environment
/// variable; the base URL falls back to the fixed versioned API root.
/// Resolution happens once, at construction.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Bearer credential; when `None`, the environment fallback applies.
    pub access_token: Option<String>,
    /// Base endpoint override; when `None`, the default versioned root applies.
    pub base_url: Option<String>,
    /// Log each request URL and response time.
    pub debug: bool,
}

impl Config {
    /// Create an empty configuration (all fallbacks apply).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the access token.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set the base endpoint.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Enable or disable debug logging.
    pub fn debug(mut self, enable: bool) -> Self {
        self.debug = enable;
        self
    }

    /// Resolve the credential: explicit parameter first, then the
    /// environment variable. Empty strings count as absent.
    pub(crate) fn resolve_access_token(&self) -> Option<String> {
        self.access_token
            .clone()
            .filter(|token| !token.is_empty())
            .or_else(|| env::var(ACCESS_TOKEN_ENV).ok().filter(|token| !token.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment-variable fallback is covered only where the ambient test
    // environment allows: std::env::set_var is not thread-safe, so these
    // tests never mutate the environment.

    #[test]
    fn test_explicit_token_wins() {
        let config = Config::new().access_token("explicit");
        assert_eq!(config.resolve_access_token().as_deref(), Some("explicit"));
    }

    #[test]
    fn test_empty_token_counts_as_absent() {
        let config = Config::new().access_token("");
        if env::var(ACCESS_TOKEN_ENV).is_err() {
            assert_eq!(config.resolve_access_token(), None);
        }
    }

    #[test]
    fn test_no_token_and_no_env_resolves_to_none() {
        if env::var(ACCESS_TOKEN_ENV).is_err() {
            assert_eq!(Config::new().resolve_access_token(), None);
        }
    }

    #[test]
    fn test_builder_fields() {
        let config = Config::new()
            .access_token("t")
            .base_url("https://graph.facebook.com/v18.0")
            .debug(true);
        assert_eq!(config.access_token.as_deref(), Some("t"));
        assert_eq!(
            config.base_url.as_deref(),
            Some("https://graph.facebook.com/v18.0")
        );
        assert!(config.debug);
    }
}
