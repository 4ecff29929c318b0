//! Error types and Result alias for the Fantasix client

use thiserror::Error;

/// Main error type for the Fantasix client
#[derive(Error, Debug)]
pub enum Error {
    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    #[error("Bearer token expired")]
    TokenExpired,

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Username '{0}' is already taken")]
    UsernameTaken(String),

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Reward claim failed: {0}")]
    ClaimError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::NetworkError(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidData(err.to_string())
    }
}
