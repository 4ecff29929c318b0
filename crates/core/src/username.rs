//! Client-side username validation
//!
//! Pre-check run before `PUT /profile/username`. This is a UX shortcut
//! only: the server remains the enforcement boundary and still answers
//! 400/409 for names that slip through.

use thiserror::Error;

pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 20;

/// Substrings that are never allowed in a username (matched lowercase)
const RESERVED_WORDS: [&str; 5] = ["admin", "moderator", "fantasix", "null", "undefined"];

/// Why a username was rejected client-side
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsernameError {
    #[error("must be at least {USERNAME_MIN_LEN} characters")]
    TooShort,

    #[error("must be at most {USERNAME_MAX_LEN} characters")]
    TooLong,

    #[error("only letters, digits and underscores are allowed")]
    InvalidCharacters,

    #[error("contains a reserved word")]
    Reserved,
}

/// Validate a username, returning the trimmed form on success
pub fn validate_username(raw: &str) -> Result<&str, UsernameError> {
    let trimmed = raw.trim();

    if trimmed.chars().count() < USERNAME_MIN_LEN {
        return Err(UsernameError::TooShort);
    }
    if trimmed.chars().count() > USERNAME_MAX_LEN {
        return Err(UsernameError::TooLong);
    }

    if !trimmed.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(UsernameError::InvalidCharacters);
    }

    let lowered = trimmed.to_lowercase();
    if RESERVED_WORDS.iter().any(|word| lowered.contains(word)) {
        return Err(UsernameError::Reserved);
    }

    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_names() {
        assert_eq!(validate_username("Siege_123"), Ok("Siege_123"));
        assert_eq!(validate_username("  Siege_123  "), Ok("Siege_123"));
        assert_eq!(validate_username("abc"), Ok("abc"));
        assert_eq!(validate_username("a2345678901234567890"), Ok("a2345678901234567890"));
    }

    #[test]
    fn test_rejects_length_violations() {
        assert_eq!(validate_username("ab"), Err(UsernameError::TooShort));
        assert_eq!(validate_username("   ab   "), Err(UsernameError::TooShort));
        assert_eq!(
            validate_username("a23456789012345678901"),
            Err(UsernameError::TooLong)
        );
    }

    #[test]
    fn test_rejects_bad_characters() {
        assert_eq!(validate_username("bad name"), Err(UsernameError::InvalidCharacters));
        assert_eq!(validate_username("nombre-raro"), Err(UsernameError::InvalidCharacters));
        assert_eq!(validate_username("émile42"), Err(UsernameError::InvalidCharacters));
    }

    #[test]
    fn test_rejects_reserved_words_anywhere_in_name() {
        assert_eq!(validate_username("admin99"), Err(UsernameError::Reserved));
        assert_eq!(validate_username("SuperADMIN"), Err(UsernameError::Reserved));
        assert_eq!(validate_username("fantasix_fan"), Err(UsernameError::Reserved));
        assert_eq!(validate_username("xX_null_Xx"), Err(UsernameError::Reserved));
    }
}
