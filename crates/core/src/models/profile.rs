//! User profile models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response envelope from `GET /auth/me`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub user: UserProfile,
}

/// The authenticated user's profile
///
/// Server-owned. The client only mutates it by merging fields echoed back
/// by the rename / avatar / claim endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub siege_points: u32,
    #[serde(default)]
    pub profile_pic_url: Option<String>,
    /// The one-time rename has already been used (UX gate only; the
    /// server enforces it with a 400/409)
    #[serde(default)]
    pub has_changed_username: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_admin: bool,
}

/// Request body for `PUT /profile/username`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUsernameRequest {
    pub username: String,
}

/// Response from `PUT /profile/username`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUsernameResponse {
    pub success: bool,
    pub username: String,
    pub message: String,
}

/// Response from `PUT /profile/avatar` (multipart upload)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAvatarResponse {
    pub success: bool,
    pub profile_pic_url: String,
    pub message: String,
}
