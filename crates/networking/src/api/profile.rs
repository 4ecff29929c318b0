//! Profile API operations

use crate::FantasixClient;
use fantasix_core::{
    username::validate_username, Error, Result, UpdateAvatarResponse, UpdateUsernameResponse,
    UserProfile,
};
use tracing::debug;

/// Fetch the authenticated user's profile
pub async fn fetch_user_profile(client: &FantasixClient) -> Result<UserProfile> {
    client.get_me().await
}

/// Rename the user, running the client-side pre-check first.
///
/// The pre-check only saves a round trip; the server still validates and
/// may answer 409/400 for names that pass here.
pub async fn update_username(
    client: &FantasixClient,
    username: &str,
) -> Result<UpdateUsernameResponse> {
    let trimmed = validate_username(username).map_err(|e| {
        debug!("Username '{}' rejected client-side: {}", username, e);
        Error::InvalidUsername(e.to_string())
    })?;

    client.update_username(trimmed).await
}

/// Upload a new avatar image
pub async fn update_avatar(
    client: &FantasixClient,
    image_bytes: Vec<u8>,
    filename: &str,
) -> Result<UpdateAvatarResponse> {
    client.update_avatar(image_bytes, filename).await
}
