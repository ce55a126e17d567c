//! Request, response, and error interceptors.

use async_trait::async_trait;
use reqwest::Request;
use std::time::Instant;
use url::Url;

use crate::error::GraphErrorEnvelope;
use crate::{Response, Result, TransportError};

/// Immutable context describing the request currently in flight.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Request method.
    pub method: http::Method,
    /// Fully resolved request URL.
    pub url: Url,
    /// When the request was handed to the transport.
    pub started_at: Instant,
}

impl RequestContext {
    pub(crate) fn new(method: http::Method, url: Url) -> Self {
        Self {
            method,
            url,
            started_at: Instant::now(),
        }
    }
}

/// Interceptor stages applied in order to every request the client issues.
///
/// Each hook is a passthrough by default, so implementations override only
/// the stages they care about.
#[async_trait]
pub trait Interceptor: Send + Sync {
    /// Inspect or modify the request before sending.
    async fn before_request(&self, context: &RequestContext, request: Request) -> Result<Request> {
        let _ = context;
        Ok(request)
    }

    /// Inspect or modify a successful response.
    async fn after_response(&self, context: &RequestContext, response: Response) -> Result<Response> {
        let _ = context;
        Ok(response)
    }

    /// Inspect or rewrite a failed outcome. Must never itself fail.
    async fn on_error(&self, context: &RequestContext, error: TransportError) -> TransportError {
        let _ = context;
        error
    }
}

/// Interceptor that logs each request and its elapsed wall-clock time.
///
/// Observability only: it never alters the request, response, or error.
pub struct DebugInterceptor;

#[async_trait]
impl Interceptor for DebugInterceptor {
    async fn before_request(&self, context: &RequestContext, request: Request) -> Result<Request> {
        tracing::debug!(
            method = %context.method,
            url = %context.url,
            "Sending request"
        );
        Ok(request)
    }

    async fn after_response(&self, context: &RequestContext, response: Response) -> Result<Response> {
        tracing::debug!(
            url = %context.url,
            status = %response.status(),
            elapsed_ms = context.started_at.elapsed().as_millis() as u64,
            "Received response"
        );
        Ok(response)
    }
}

/// Interceptor that rewrites non-success responses carrying a Graph API
/// error envelope into [`TransportError::Api`].
///
/// Normalization is best-effort: a body that is not JSON, or JSON without a
/// complete `error` object, leaves the original error untouched.
pub struct GraphErrorNormalizer;

#[async_trait]
impl Interceptor for GraphErrorNormalizer {
    async fn on_error(&self, _context: &RequestContext, error: TransportError) -> TransportError {
        match error {
            TransportError::Status { status, body } => {
                match serde_json::from_str::<GraphErrorEnvelope>(&body) {
                    Ok(envelope) => TransportError::Api(envelope.error),
                    Err(_) => TransportError::Status { status, body },
                }
            }
            other => other,
        }
    }
}
