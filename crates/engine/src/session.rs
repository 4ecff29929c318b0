//! Profile session — mutation handlers over the query cache
//!
//! The Rust counterpart of the web app's profile hooks: cache-first reads
//! plus the claim / rename / avatar mutations, each patching the cache
//! from the server's response and then triggering an authoritative
//! refresh. Only one mutation of a given kind runs from a view at a time,
//! so the read-modify-write on the cache is race-free.

use chrono::Utc;
use fantasix_core::{
    ClaimRewardResponse, Result, RewardsStatus, UpdateAvatarResponse, UpdateUsernameResponse,
    UserProfile,
};
use fantasix_networking::{api, FantasixClient};
use fantasix_persistence::QueryCache;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct ProfileSession {
    client: FantasixClient,
    cache: Arc<QueryCache>,
}

impl ProfileSession {
    pub fn new(client: FantasixClient, cache: Arc<QueryCache>) -> Self {
        Self { client, cache }
    }

    pub fn cache(&self) -> &Arc<QueryCache> {
        &self.cache
    }

    /// The user's profile, served from cache when fresh
    pub async fn profile(&self) -> Result<UserProfile> {
        if let Some(profile) = self.cache.get_profile() {
            debug!("Profile cache hit");
            return Ok(profile);
        }
        self.refresh_profile().await
    }

    /// The rewards status, served from cache when fresh
    pub async fn rewards_status(&self) -> Result<RewardsStatus> {
        if let Some(status) = self.cache.get_rewards() {
            debug!("Rewards cache hit");
            return Ok(status);
        }
        self.refresh_rewards().await
    }

    /// Fetch the profile from the server and cache it
    pub async fn refresh_profile(&self) -> Result<UserProfile> {
        let profile = api::fetch_user_profile(&self.client).await?;
        self.cache.set_profile(profile.clone());
        Ok(profile)
    }

    /// Fetch the rewards status from the server and cache it
    pub async fn refresh_rewards(&self) -> Result<RewardsStatus> {
        let status = api::fetch_rewards_status(&self.client).await?;
        self.cache.set_rewards(status.clone());
        Ok(status)
    }

    /// Manual, user-triggered refresh of both entries
    pub async fn refresh_all(&self) -> Result<(UserProfile, RewardsStatus)> {
        let profile = self.refresh_profile().await?;
        let status = self.refresh_rewards().await?;
        Ok((profile, status))
    }

    /// Claim the daily reward.
    ///
    /// On success the cache is patched optimistically (points total,
    /// closed claim window, streak) and then both entries are refreshed
    /// from the server. A failed refresh keeps the optimistic values.
    pub async fn claim_daily(&self) -> Result<ClaimRewardResponse> {
        let claim = api::claim_daily_reward(&self.client).await?;

        if let Some(mut profile) = self.cache.get_profile() {
            profile.siege_points = claim.total_siege_points;
            self.cache.set_profile(profile);
        }
        if let Some(mut status) = self.cache.get_rewards() {
            status.merge_claim(&claim, Utc::now());
            self.cache.set_rewards(status);
        }

        info!(
            "Daily reward claimed: +{} SP (streak: {})",
            claim.siege_points, claim.daily_streak
        );

        if let Err(e) = self.refresh_all().await {
            warn!("Post-claim refresh failed, keeping optimistic state: {}", e);
        }

        Ok(claim)
    }

    /// One-time rename. Validates client-side first, then patches the
    /// cached profile from the server's echo.
    pub async fn rename(&self, username: &str) -> Result<UpdateUsernameResponse> {
        let result = api::update_username(&self.client, username).await?;

        if let Some(mut profile) = self.cache.get_profile() {
            profile.username = result.username.clone();
            profile.has_changed_username = true;
            self.cache.set_profile(profile);
        }

        info!("Username changed to: {}", result.username);

        if let Err(e) = self.refresh_profile().await {
            warn!("Post-rename refresh failed, keeping optimistic state: {}", e);
        }

        Ok(result)
    }

    /// Upload a new avatar and patch the cached profile picture URL
    pub async fn change_avatar(
        &self,
        image_bytes: Vec<u8>,
        filename: &str,
    ) -> Result<UpdateAvatarResponse> {
        let result = api::update_avatar(&self.client, image_bytes, filename).await?;

        if let Some(mut profile) = self.cache.get_profile() {
            profile.profile_pic_url = Some(result.profile_pic_url.clone());
            self.cache.set_profile(profile);
        }

        info!("Avatar updated: {}", result.profile_pic_url);

        if let Err(e) = self.refresh_profile().await {
            warn!("Post-avatar refresh failed, keeping optimistic state: {}", e);
        }

        Ok(result)
    }

    /// UX gate for the rename affordance. The server still enforces the
    /// one-time rename with a 400/409.
    pub fn rename_already_used(&self) -> bool {
        self.cache
            .get_profile()
            .map(|profile| profile.has_changed_username)
            .unwrap_or(false)
    }
}
