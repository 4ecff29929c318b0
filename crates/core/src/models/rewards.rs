//! Daily-reward models for the /rewards endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response from `GET /rewards/status` — reward eligibility
///
/// Server-owned truth: the client never flips `can_claim` locally and
/// never decrements `daily_streak` (merges take the max of old and new).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardsStatus {
    /// Whether the user can currently claim the daily reward
    pub can_claim: bool,
    /// Consecutive claim days without a gap
    #[serde(default)]
    pub daily_streak: u32,
    /// When the last successful claim happened
    pub last_claim: Option<DateTime<Utc>>,
    /// When the 24-hour claim window reopens
    pub next_claim_at: Option<DateTime<Utc>>,
}

impl RewardsStatus {
    /// Merge the server's claim response into this status.
    ///
    /// Optimistic patch after a successful `POST /rewards/claim-daily`,
    /// kept until the next authoritative refresh. The streak never goes
    /// backwards from the client's point of view.
    pub fn merge_claim(&mut self, claim: &ClaimRewardResponse, now: DateTime<Utc>) {
        self.can_claim = false;
        self.daily_streak = self.daily_streak.max(claim.daily_streak);
        self.last_claim = Some(now);
    }
}

/// Response from `POST /rewards/claim-daily`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRewardResponse {
    /// Server-provided success message (shown to the user verbatim)
    pub message: String,
    /// Points granted by this claim
    #[serde(default)]
    pub siege_points: u32,
    /// Streak after this claim
    #[serde(default)]
    pub daily_streak: u32,
    /// User's total points after this claim
    #[serde(default)]
    pub total_siege_points: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claim(streak: u32) -> ClaimRewardResponse {
        ClaimRewardResponse {
            message: "¡Recompensa reclamada!".to_string(),
            siege_points: 50,
            daily_streak: streak,
            total_siege_points: 500,
        }
    }

    #[test]
    fn test_merge_claim_closes_window() {
        let now = Utc::now();
        let mut status = RewardsStatus {
            can_claim: true,
            daily_streak: 4,
            last_claim: None,
            next_claim_at: None,
        };

        status.merge_claim(&claim(5), now);

        assert!(!status.can_claim);
        assert_eq!(status.daily_streak, 5);
        assert_eq!(status.last_claim, Some(now));
    }

    #[test]
    fn test_merge_claim_never_decrements_streak() {
        let mut status = RewardsStatus {
            can_claim: true,
            daily_streak: 9,
            last_claim: None,
            next_claim_at: None,
        };

        // A stale or out-of-order response must not shrink the streak
        status.merge_claim(&claim(3), Utc::now());

        assert_eq!(status.daily_streak, 9);
    }
}
