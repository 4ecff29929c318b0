//! Fantasix Persistence - Client-side query cache

pub mod cache;

pub use cache::{QueryCache, QueryKey};
