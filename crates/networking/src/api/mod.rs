//! High-level API wrappers for Fantasix endpoints
//!
//! Thin convenience layer over the raw HTTP client, adding the client-side
//! validation the web profile screen performs before calling the server.

mod profile;
mod rewards;

pub use profile::*;
pub use rewards::*;
