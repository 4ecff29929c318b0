//! Rewards API operations

use crate::FantasixClient;
use fantasix_core::{ClaimRewardResponse, Result, RewardsStatus};

/// Check daily-reward eligibility
pub async fn fetch_rewards_status(client: &FantasixClient) -> Result<RewardsStatus> {
    client.get_rewards_status().await
}

/// Claim the daily reward
pub async fn claim_daily_reward(client: &FantasixClient) -> Result<ClaimRewardResponse> {
    client.claim_daily_reward().await
}
