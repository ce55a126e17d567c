//! Endpoint operations, grouped by remote resource family.
//!
//! Every operation follows the same pattern: one structured request value,
//! a deterministic path + query string, one HTTP verb, and a fixed
//! per-endpoint response projection.

pub mod comments;
pub mod hashtags;
pub mod media;
pub mod mentions;
pub mod publishing;
pub mod shopping;
pub mod users;

pub use comments::*;
pub use hashtags::*;
pub use media::*;
pub use mentions::*;
pub use publishing::*;
pub use shopping::*;
pub use users::*;
