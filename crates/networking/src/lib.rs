//! Fantasix Networking - HTTP client and API wrappers

pub mod api;
pub mod http;

pub use http::FantasixClient;
