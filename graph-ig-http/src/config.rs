//! HTTP client configuration.

use secrecy::SecretString;
use std::time::Duration;

/// Versioned Graph API root used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://graph.facebook.com/v16.0";

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Bearer credential sent with every request.
    pub access_token: SecretString,
    /// Base URL all request paths are resolved against.
    pub base_url: String,
    /// Emit a log line before each request and after each response.
    pub debug: bool,
    /// Request timeout ceiling.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl HttpClientConfig {
    /// Create a configuration with the default base URL and timeout.
    pub fn new(access_token: impl Into<String>) -> Self {
        let access_token: String = access_token.into();
        Self {
            access_token: SecretString::new(access_token.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            debug: false,
            timeout: Duration::from_secs(120),
            user_agent: format!("graph-ig/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Create a new configuration builder.
    pub fn builder(access_token: impl Into<String>) -> HttpClientConfigBuilder {
        HttpClientConfigBuilder {
            config: Self::new(access_token),
        }
    }
}

/// Builder for HTTP client configuration.
#[derive(Debug)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL all request paths are resolved against.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Enable or disable debug logging of requests and responses.
    pub fn debug(mut self, enable: bool) -> Self {
        self.config.debug = enable;
        self
    }

    /// Set the request timeout ceiling.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Build the configuration.
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = HttpClientConfig::new("token");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(120));
        assert!(!config.debug);
        assert!(config.user_agent.starts_with("graph-ig/"));
    }

    #[test]
    fn test_config_builder() {
        let config = HttpClientConfig::builder("token")
            .base_url("https://graph.facebook.com/v18.0")
            .debug(true)
            .timeout(Duration::from_secs(30))
            .build();

        assert_eq!(config.base_url, "https://graph.facebook.com/v18.0");
        assert!(config.debug);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
