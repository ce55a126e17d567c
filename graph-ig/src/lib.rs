//! # graph-ig
//!
//! Typed client for the Instagram Graph API.
//!
//! One method per remote endpoint, each taking a single structured request
//! value, issuing one HTTP round trip, and returning the endpoint's
//! documented response projection: the full typed body, the inner `data`
//! list, the created `id`, or the `success` flag.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use graph_ig::{Config, GetCommentRequest, InstagramApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Falls back to the USER_ACCESS_TOKEN environment variable.
//!     let api = InstagramApi::new(Config::new().access_token("IGQVJ..."))?;
//!
//!     let comment = api
//!         .get_comment(GetCommentRequest {
//!             comment_id: 17870913679156914,
//!             fields: vec!["id".into(), "text".into(), "like_count".into()],
//!         })
//!         .await?;
//!
//!     println!("{:?} ({:?} likes)", comment.text, comment.like_count);
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! Rejected requests surface as [`TransportError::Api`] carrying the
//! message, code, type, and trace ID the Graph API reported. Failures the
//! remote did not shape that way (network errors, timeouts, non-JSON error
//! bodies) pass through as the underlying transport error.

pub mod api;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
mod query;
pub mod types;

pub use api::*;
pub use client::InstagramApi;
pub use config::{ACCESS_TOKEN_ENV, Config};
pub use envelope::*;
pub use error::{Error, Result};
pub use types::*;

// Re-export the transport layer for callers that need to reach below the
// facade.
pub use graph_ig_http::{self as http, DEFAULT_BASE_URL, GraphApiError, TransportError};
