//! Streak tiers and progress toward the next milestone
//!
//! The tier table is static and compiled in; the server only sends the raw
//! `daily_streak` count and everything else here is derived locally.

use crate::types::Percent;

/// A named streak milestone with its bonus reward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakTier {
    /// Minimum streak (in days) to reach this tier
    pub threshold: u32,
    pub name: &'static str,
    pub emoji: &'static str,
    /// Bonus Siege Points granted at this tier
    pub reward_points: u32,
}

/// Milestone table, ascending by threshold
pub const STREAK_TIERS: [StreakTier; 6] = [
    StreakTier { threshold: 1, name: "Principiante", emoji: "🌟", reward_points: 50 },
    StreakTier { threshold: 3, name: "Consistente", emoji: "🔥", reward_points: 75 },
    StreakTier { threshold: 7, name: "Semanal", emoji: "💪", reward_points: 100 },
    StreakTier { threshold: 14, name: "Dedicado", emoji: "🚀", reward_points: 150 },
    StreakTier { threshold: 30, name: "Legendario", emoji: "👑", reward_points: 200 },
    StreakTier { threshold: 100, name: "Mítico", emoji: "🏆", reward_points: 500 },
];

/// Progress within the current tier interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierProgress {
    /// Days into the current interval
    pub current: u32,
    /// Interval length in days (equal to `current` at the top tier)
    pub target: u32,
    pub percent: Percent,
}

/// The highest tier the streak qualifies for.
///
/// Scans from the highest threshold downward; first match wins. A streak
/// below the lowest threshold still maps to the lowest tier.
pub fn current_tier(streak: u32) -> &'static StreakTier {
    for tier in STREAK_TIERS.iter().rev() {
        if streak >= tier.threshold {
            return tier;
        }
    }
    &STREAK_TIERS[0]
}

/// The next tier to reach, or `None` at or above the top threshold
pub fn next_tier(streak: u32) -> Option<&'static StreakTier> {
    STREAK_TIERS.iter().find(|tier| streak < tier.threshold)
}

/// Progress from the current tier's threshold toward the next one.
///
/// At the top tier this is a full bar. Below the lowest threshold the
/// interval starts at 0.
pub fn progress(streak: u32) -> TierProgress {
    let Some(next) = next_tier(streak) else {
        return TierProgress {
            current: streak,
            target: streak,
            percent: Percent(100.0),
        };
    };

    let previous = STREAK_TIERS
        .iter()
        .rev()
        .find(|tier| streak >= tier.threshold)
        .map(|tier| tier.threshold)
        .unwrap_or(0);

    let current = streak - previous;
    let target = next.threshold - previous;
    let percent = Percent((current as f64 / target as f64) * 100.0).clamped();

    TierProgress { current, target, percent }
}

/// All tiers the streak has already unlocked, ascending
pub fn unlocked_tiers(streak: u32) -> Vec<&'static StreakTier> {
    STREAK_TIERS
        .iter()
        .filter(|tier| streak >= tier.threshold)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_ascending() {
        for pair in STREAK_TIERS.windows(2) {
            assert!(pair[0].threshold < pair[1].threshold);
        }
    }

    #[test]
    fn test_current_tier_below_lowest_defaults_to_first() {
        assert_eq!(current_tier(0).name, "Principiante");
    }

    #[test]
    fn test_current_tier_picks_highest_qualifying() {
        assert_eq!(current_tier(1).name, "Principiante");
        assert_eq!(current_tier(2).name, "Principiante");
        assert_eq!(current_tier(3).name, "Consistente");
        assert_eq!(current_tier(5).name, "Consistente");
        assert_eq!(current_tier(7).name, "Semanal");
        assert_eq!(current_tier(29).name, "Dedicado");
        assert_eq!(current_tier(30).name, "Legendario");
        assert_eq!(current_tier(100).name, "Mítico");
        assert_eq!(current_tier(400).name, "Mítico");
    }

    #[test]
    fn test_current_tier_threshold_never_exceeds_streak() {
        for streak in 1..200 {
            let tier = current_tier(streak);
            assert!(tier.threshold <= streak);
            // No higher-threshold tier also qualifies
            for other in STREAK_TIERS.iter() {
                if other.threshold > tier.threshold {
                    assert!(other.threshold > streak);
                }
            }
        }
    }

    #[test]
    fn test_next_tier_is_lowest_above_streak() {
        assert_eq!(next_tier(0).unwrap().threshold, 1);
        assert_eq!(next_tier(5).unwrap().name, "Semanal");
        assert_eq!(next_tier(99).unwrap().name, "Mítico");
        assert!(next_tier(100).is_none());
        assert!(next_tier(5000).is_none());
    }

    #[test]
    fn test_progress_midway_between_tiers() {
        // streak 5: between Consistente (3) and Semanal (7)
        let p = progress(5);
        assert_eq!(p.current, 2);
        assert_eq!(p.target, 4);
        assert_eq!(p.percent.as_f64(), 50.0);
    }

    #[test]
    fn test_progress_at_max_tier_is_full() {
        let p = progress(150);
        assert_eq!(p.percent.as_f64(), 100.0);
    }

    #[test]
    fn test_progress_below_lowest_starts_from_zero() {
        let p = progress(0);
        assert_eq!(p.current, 0);
        assert_eq!(p.target, 1);
        assert_eq!(p.percent.as_f64(), 0.0);
    }

    #[test]
    fn test_progress_monotone_within_interval_and_resets_at_threshold() {
        // Within [7, 14) the bar only goes up
        let mut last = -1.0;
        for streak in 7..14 {
            let pct = progress(streak).percent.as_f64();
            assert!(pct > last);
            last = pct;
        }
        // Crossing into 14 resets the interval
        assert!(progress(14).percent.as_f64() < last);
    }

    #[test]
    fn test_unlocked_tiers() {
        assert!(unlocked_tiers(0).is_empty());
        let unlocked = unlocked_tiers(7);
        assert_eq!(unlocked.len(), 3);
        assert_eq!(unlocked.last().unwrap().name, "Semanal");
    }
}
