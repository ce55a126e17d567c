//! The API facade: construction-time validation plus the dispatch layer
//! every endpoint method goes through.

use graph_ig_http::{HttpClient, HttpClientConfig};
use serde::de::DeserializeOwned;

use crate::envelope::{DataList, IdResponse, SuccessResponse};
use crate::{Config, Error, Result};

/// Typed client for the Instagram Graph API.
///
/// Immutable after construction: the credential and base endpoint are
/// resolved once, and a single transport instance is retained for the
/// object's lifetime. Clones share that transport, so one instance can
/// serve any number of concurrent calls.
#[derive(Clone)]
pub struct InstagramApi {
    http: HttpClient,
}

impl std::fmt::Debug for InstagramApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstagramApi").finish_non_exhaustive()
    }
}

impl InstagramApi {
    /// Build a client from the given configuration.
    ///
    /// Fails with [`Error::MissingAccessToken`] when neither the explicit
    /// token nor the `USER_ACCESS_TOKEN` environment variable is set.
    pub fn new(config: Config) -> Result<Self> {
        let access_token = config
            .resolve_access_token()
            .ok_or(Error::MissingAccessToken)?;

        let mut builder = HttpClientConfig::builder(access_token).debug(config.debug);
        if let Some(base_url) = config.base_url {
            builder = builder.base_url(base_url);
        }

        Ok(Self {
            http: HttpClient::new(builder.build()),
        })
    }

    /// Build a client entirely from the environment.
    pub fn from_env() -> Result<Self> {
        Self::new(Config::new())
    }

    /// Get the underlying transport.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    // Dispatch helpers: one per response projection, applied uniformly so
    // endpoint methods stay declarative about verb, path, and projection.

    /// GET returning the full typed body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        Ok(self.http.get(path).json().await?)
    }

    /// POST returning the full typed body.
    pub(crate) async fn post_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        Ok(self.http.post(path).json().await?)
    }

    /// DELETE returning the full typed body.
    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        Ok(self.http.delete(path).json().await?)
    }

    /// GET unwrapping the `{ "data": [...] }` envelope.
    pub(crate) async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        Ok(self.get_json::<DataList<T>>(path).await?.data)
    }

    /// POST unwrapping the `{ "id": ... }` envelope.
    pub(crate) async fn post_id(&self, path: &str) -> Result<String> {
        Ok(self.post_json::<IdResponse>(path).await?.id)
    }

    /// POST unwrapping the `{ "success": ... }` envelope.
    pub(crate) async fn post_success(&self, path: &str) -> Result<bool> {
        Ok(self.post_json::<SuccessResponse>(path).await?.success)
    }

    /// DELETE unwrapping the `{ "success": ... }` envelope.
    pub(crate) async fn delete_success(&self, path: &str) -> Result<bool> {
        Ok(self.delete_json::<SuccessResponse>(path).await?.success)
    }
}
