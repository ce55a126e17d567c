//! HTTP client implementation.

use http::Method;
use reqwest::Request;
use std::sync::Arc;

use crate::interceptor::{DebugInterceptor, GraphErrorNormalizer, Interceptor, RequestContext};
use crate::{HttpClientConfig, RequestBuilder, Response, Result};

/// HTTP client bound to one credential and base endpoint.
///
/// Cheap to clone; clones share the underlying connection pool. The client
/// holds no mutable state, so a single instance can serve any number of
/// concurrent requests.
#[derive(Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    config: Arc<HttpClientConfig>,
    interceptors: Arc<Vec<Box<dyn Interceptor>>>,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: HttpClientConfig) -> Self {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        let mut interceptors: Vec<Box<dyn Interceptor>> = Vec::new();
        if config.debug {
            interceptors.push(Box::new(DebugInterceptor));
        }
        interceptors.push(Box::new(GraphErrorNormalizer));

        Self {
            inner,
            config: Arc::new(config),
            interceptors: Arc::new(interceptors),
        }
    }

    /// Get the underlying reqwest client.
    pub fn inner(&self) -> &reqwest::Client {
        &self.inner
    }

    /// Get the client configuration.
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Create a GET request builder for a path relative to the base URL.
    pub fn get(&self, path: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::GET, path.into())
    }

    /// Create a POST request builder for a path relative to the base URL.
    pub fn post(&self, path: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::POST, path.into())
    }

    /// Create a DELETE request builder for a path relative to the base URL.
    pub fn delete(&self, path: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::DELETE, path.into())
    }

    /// Execute a request through the interceptor stages.
    pub(crate) async fn execute(&self, mut request: Request) -> Result<Response> {
        let context = RequestContext::new(request.method().clone(), request.url().clone());

        for interceptor in self.interceptors.iter() {
            request = interceptor.before_request(&context, request).await?;
        }

        match self.dispatch(request).await {
            Ok(mut response) => {
                for interceptor in self.interceptors.iter() {
                    response = interceptor.after_response(&context, response).await?;
                }
                Ok(response)
            }
            Err(mut error) => {
                for interceptor in self.interceptors.iter() {
                    error = interceptor.on_error(&context, error).await;
                }
                Err(error)
            }
        }
    }

    /// Perform the round trip and surface non-success statuses as errors.
    async fn dispatch(&self, request: Request) -> Result<Response> {
        let response = self.inner.execute(request).await?;
        Response::from_reqwest(response).await.error_for_status()
    }
}
