//! Fantasix Core - Shared data models, types, errors, and display logic

pub mod errors;
pub mod models;
pub mod streak;
pub mod types;
pub mod username;

pub use errors::{Error, Result};
pub use models::*;
pub use streak::{current_tier, next_tier, progress, unlocked_tiers, StreakTier, TierProgress};
pub use types::*;
pub use username::{validate_username, UsernameError};
