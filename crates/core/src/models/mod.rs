//! Data models for Fantasix entities

mod profile;
mod rewards;

pub use profile::*;
pub use rewards::*;
