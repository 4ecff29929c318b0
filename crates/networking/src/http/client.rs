//! Fantasix HTTP client with bearer-token authentication

use fantasix_core::{
    ClaimRewardResponse, Error, MeResponse, Result, RewardsStatus, UpdateAvatarResponse,
    UpdateUsernameRequest, UpdateUsernameResponse, UserProfile,
};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION},
    multipart, Client, Response, StatusCode,
};
use tracing::{debug, error, instrument};

const DEFAULT_API_BASE: &str = "http://localhost:3000";
const USER_AGENT_VALUE: &str = "fantasix-manager/0.1";

/// HTTP client for the Fantasix API
///
/// Sends the auth provider's bearer token on every request. Caching and
/// cache patching live one layer up, in the profile session.
pub struct FantasixClient {
    http: Client,
    api_base: String,
    bearer_token: String,
}

impl FantasixClient {
    /// Create a new client with the given bearer token
    pub fn new(bearer_token: &str) -> Result<Self> {
        Self::with_api_base(bearer_token, DEFAULT_API_BASE)
    }

    /// Create a new client against a non-default API base
    pub fn with_api_base(bearer_token: &str, api_base: &str) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT_VALUE)
            .build()
            .map_err(|e| Error::Unknown(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
            bearer_token: bearer_token.to_string(),
        })
    }

    /// Default headers for API requests
    fn default_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.bearer_token))
                .map_err(|_| Error::AuthenticationError("Malformed bearer token".to_string()))?,
        );
        Ok(headers)
    }

    /// Check if a response indicates authentication failure
    fn check_auth_error(response: &Response) -> Option<Error> {
        match response.status().as_u16() {
            401 => Some(Error::TokenExpired),
            403 => Some(Error::AuthenticationError("Access forbidden".to_string())),
            _ => None,
        }
    }

    /// Fetch the authenticated user's profile
    #[instrument(skip(self))]
    pub async fn get_me(&self) -> Result<UserProfile> {
        let url = format!("{}/auth/me", self.api_base);

        debug!("Fetching profile from: {}", url);

        let response = self
            .http
            .get(&url)
            .headers(self.default_headers()?)
            .send()
            .await?;

        if let Some(err) = Self::check_auth_error(&response) {
            return Err(err);
        }

        let response = response.error_for_status().map_err(|e| {
            error!("Profile request failed: {}", e);
            Error::ApiError(e.to_string())
        })?;

        // The endpoint wraps the profile: { "user": {...} }
        let me: MeResponse = response.json().await.map_err(|e| {
            error!("Failed to parse profile response: {}", e);
            Error::InvalidData(e.to_string())
        })?;

        debug!("Profile fetched for user: {}", me.user.username);
        Ok(me.user)
    }

    /// Check daily-reward eligibility
    #[instrument(skip(self))]
    pub async fn get_rewards_status(&self) -> Result<RewardsStatus> {
        let url = format!("{}/rewards/status", self.api_base);

        debug!("Checking rewards status");

        let response = self
            .http
            .get(&url)
            .headers(self.default_headers()?)
            .send()
            .await?;

        if let Some(err) = Self::check_auth_error(&response) {
            return Err(err);
        }

        let status: RewardsStatus = response
            .error_for_status()
            .map_err(|e| {
                error!("Rewards status request failed: {}", e);
                Error::ApiError(e.to_string())
            })?
            .json()
            .await
            .map_err(|e| {
                error!("Failed to parse rewards status response: {}", e);
                Error::InvalidData(e.to_string())
            })?;

        debug!(
            "Rewards status: canClaim={}, dailyStreak={}",
            status.can_claim, status.daily_streak
        );
        Ok(status)
    }

    /// Claim the daily reward
    #[instrument(skip(self))]
    pub async fn claim_daily_reward(&self) -> Result<ClaimRewardResponse> {
        let url = format!("{}/rewards/claim-daily", self.api_base);

        debug!("Claiming daily reward");

        let response = self
            .http
            .post(&url)
            .headers(self.default_headers()?)
            .send()
            .await?;

        if let Some(err) = Self::check_auth_error(&response) {
            return Err(err);
        }

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            error!("Claim request failed: HTTP {} — {}", status, body);
            return Err(Error::ClaimError(format!("HTTP {}: {}", status, body)));
        }

        let claim: ClaimRewardResponse = response.json().await.map_err(|e| {
            error!("Failed to parse claim response: {}", e);
            Error::InvalidData(e.to_string())
        })?;

        debug!(
            "Daily reward claimed: +{} SP (streak: {})",
            claim.siege_points, claim.daily_streak
        );
        Ok(claim)
    }

    /// Change the username (one-time rename)
    ///
    /// 409 (name taken) and 400 (name rejected) map to distinct errors so
    /// the UI can show distinct messages.
    #[instrument(skip(self))]
    pub async fn update_username(&self, username: &str) -> Result<UpdateUsernameResponse> {
        let url = format!("{}/profile/username", self.api_base);

        debug!("Updating username to: {}", username);

        let request = UpdateUsernameRequest {
            username: username.to_string(),
        };

        let response = self
            .http
            .put(&url)
            .headers(self.default_headers()?)
            .json(&request)
            .send()
            .await?;

        if let Some(err) = Self::check_auth_error(&response) {
            return Err(err);
        }

        match response.status() {
            StatusCode::CONFLICT => {
                debug!("Username '{}' already taken", username);
                return Err(Error::UsernameTaken(username.to_string()));
            }
            StatusCode::BAD_REQUEST => {
                let body = response.text().await.unwrap_or_default();
                debug!("Username '{}' rejected by server: {}", username, body);
                return Err(Error::InvalidUsername(body));
            }
            _ => {}
        }

        let response = response.error_for_status().map_err(|e| {
            error!("Username update failed: {}", e);
            Error::ApiError(e.to_string())
        })?;

        let result: UpdateUsernameResponse = response.json().await.map_err(|e| {
            error!("Failed to parse username update response: {}", e);
            Error::InvalidData(e.to_string())
        })?;

        debug!("Username updated to: {}", result.username);
        Ok(result)
    }

    /// Upload a new avatar image (multipart `avatar` part)
    #[instrument(skip(self, image_bytes))]
    pub async fn update_avatar(
        &self,
        image_bytes: Vec<u8>,
        filename: &str,
    ) -> Result<UpdateAvatarResponse> {
        let url = format!("{}/profile/avatar", self.api_base);

        debug!("Uploading avatar: {} ({} bytes)", filename, image_bytes.len());

        let part = multipart::Part::bytes(image_bytes).file_name(filename.to_string());
        let form = multipart::Form::new().part("avatar", part);

        let response = self
            .http
            .put(&url)
            .headers(self.default_headers()?)
            .multipart(form)
            .send()
            .await?;

        if let Some(err) = Self::check_auth_error(&response) {
            return Err(err);
        }

        let response = response.error_for_status().map_err(|e| {
            error!("Avatar upload failed: {}", e);
            Error::ApiError(e.to_string())
        })?;

        let result: UpdateAvatarResponse = response.json().await.map_err(|e| {
            error!("Failed to parse avatar upload response: {}", e);
            Error::InvalidData(e.to_string())
        })?;

        debug!("Avatar updated: {}", result.profile_pic_url);
        Ok(result)
    }

    /// API base this client talks to
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}
