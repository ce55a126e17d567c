//! # graph-ig-http
//!
//! HTTP transport for the Instagram Graph API: a pre-configured client bound
//! to one bearer credential and base endpoint, with cross-cutting behavior
//! applied uniformly to every request it issues.
//!
//! ## Features
//!
//! - **Bearer Authentication**: every request carries `Authorization: Bearer <token>`
//! - **Interceptors**: ordered request/response/error hooks for debug logging
//!   and Graph API error normalization
//! - **Timeouts**: fixed per-request ceiling (120 seconds by default)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use graph_ig_http::{HttpClient, HttpClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpClient::new(HttpClientConfig::new("IGQVJ..."));
//!
//!     let media: serde_json::Value = client
//!         .get("17895695668004550?fields=id,caption")
//!         .json()
//!         .await?;
//!
//!     println!("{media}");
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod interceptor;
mod request;
mod response;

pub use client::HttpClient;
pub use config::{DEFAULT_BASE_URL, HttpClientConfig, HttpClientConfigBuilder};
pub use error::{GraphApiError, Result, TransportError};
pub use interceptor::{DebugInterceptor, GraphErrorNormalizer, Interceptor, RequestContext};
pub use request::RequestBuilder;
pub use response::Response;

// Re-export common types
pub use bytes::Bytes;
pub use http::{Method, StatusCode, header};
pub use url::Url;
