//! Request builder.

use http::Method;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{HttpClient, Response, Result, TransportError};

/// Pending request for a path relative to the client's base URL.
///
/// The path may already carry a query string; it is resolved against the
/// base URL as-is, so callers own the exact bytes of path and query.
pub struct RequestBuilder<'a> {
    client: &'a HttpClient,
    method: Method,
    path: String,
}

impl<'a> RequestBuilder<'a> {
    pub(crate) fn new(client: &'a HttpClient, method: Method, path: String) -> Self {
        Self {
            client,
            method,
            path,
        }
    }

    /// Resolve the relative path (and any query string) against the base URL.
    fn build_url(&self) -> Result<Url> {
        let mut base = self.client.config().base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base = Url::parse(&base).map_err(|e| TransportError::InvalidUrl(e.to_string()))?;
        base.join(self.path.trim_start_matches('/'))
            .map_err(|e| TransportError::InvalidUrl(e.to_string()))
    }

    /// Send the request.
    pub async fn send(self) -> Result<Response> {
        let url = self.build_url()?;
        let request = self
            .client
            .inner()
            .request(self.method, url)
            .bearer_auth(self.client.config().access_token.expose_secret())
            .build()?;

        self.client.execute(request).await
    }

    /// Send the request and decode the response body as JSON.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        self.send().await?.json()
    }
}
