//! Claim eligibility view state
//!
//! Derives what the rewards card shows from the server-supplied
//! `RewardsStatus` and the wall clock. Eligibility itself is decided by
//! the server; this module only reflects the last value received.

use crate::countdown::ClaimCountdown;
use chrono::{DateTime, Utc};
use fantasix_core::streak::{self, StreakTier, TierProgress};
use fantasix_core::RewardsStatus;

/// What the claim affordance should look like
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimState {
    /// Actionable claim button
    Claimable,
    /// Disabled button plus countdown text (None once the target passed,
    /// until the next authoritative refresh)
    CoolingDown { countdown: Option<String> },
}

/// What the streak section should show
#[derive(Debug, Clone, PartialEq)]
pub enum StreakDisplay {
    /// Zero streak: placeholder inviting the first claim, no tier badge
    NotStarted,
    Active {
        streak: u32,
        current: &'static StreakTier,
        next: Option<&'static StreakTier>,
        progress: TierProgress,
    },
}

/// Countdown text toward the next claim window, e.g. `"en 1h 30m"`.
///
/// Below one hour the hour part is dropped (`"en 45m"`). Returns `None`
/// once the target has passed.
pub fn format_time_until_next_claim(
    next_claim_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Option<String> {
    let remaining = next_claim_at - now;
    if remaining.num_seconds() <= 0 {
        return None;
    }

    let hours = remaining.num_hours();
    let minutes = remaining.num_minutes() % 60;

    if hours > 0 {
        Some(format!("en {}h {}m", hours, minutes))
    } else {
        Some(format!("en {}m", minutes))
    }
}

/// Derive the claim affordance from the server status
pub fn claim_state(status: &RewardsStatus, now: DateTime<Utc>) -> ClaimState {
    if status.can_claim {
        ClaimState::Claimable
    } else {
        ClaimState::CoolingDown {
            countdown: status
                .next_claim_at
                .and_then(|target| format_time_until_next_claim(target, now)),
        }
    }
}

/// Derive the streak section from the streak count
pub fn streak_display(daily_streak: u32) -> StreakDisplay {
    if daily_streak == 0 {
        return StreakDisplay::NotStarted;
    }

    StreakDisplay::Active {
        streak: daily_streak,
        current: streak::current_tier(daily_streak),
        next: streak::next_tier(daily_streak),
        progress: streak::progress(daily_streak),
    }
}

/// Owner of the live claim card state.
///
/// Holds the last `RewardsStatus` and a countdown timer scoped to it: the
/// timer is acquired when a cooldown target appears, replaced when the
/// target changes, and dropped (cancelled) when the state turns claimable
/// or the view goes away.
#[derive(Default)]
pub struct ClaimView {
    status: Option<RewardsStatus>,
    countdown: Option<ClaimCountdown>,
}

impl ClaimView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a fresh server status into the view.
    ///
    /// Must run inside a tokio runtime (the countdown task is spawned
    /// here).
    pub fn update(&mut self, status: RewardsStatus) {
        let new_target = if status.can_claim {
            None
        } else {
            status.next_claim_at
        };

        if self.countdown.as_ref().map(ClaimCountdown::target) != new_target {
            // Dropping the old handle cancels its timer task
            self.countdown = new_target.map(ClaimCountdown::spawn);
        }

        self.status = Some(status);
    }

    /// Current claim affordance, or `None` before the first status
    pub fn state(&self, now: DateTime<Utc>) -> Option<ClaimState> {
        self.status.as_ref().map(|status| claim_state(status, now))
    }

    /// Latest countdown text published by the timer
    pub fn countdown_text(&self) -> Option<String> {
        self.countdown.as_ref().and_then(ClaimCountdown::current)
    }

    /// Current streak section, or `None` before the first status
    pub fn streak(&self) -> Option<StreakDisplay> {
        self.status
            .as_ref()
            .map(|status| streak_display(status.daily_streak))
    }

    /// Whether a countdown timer is currently held
    pub fn has_countdown(&self) -> bool {
        self.countdown.is_some()
    }

    /// Target of the held countdown timer, if any
    pub fn countdown_target(&self) -> Option<DateTime<Utc>> {
        self.countdown.as_ref().map(ClaimCountdown::target)
    }
}
