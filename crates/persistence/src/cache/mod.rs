//! In-memory query cache for profile and rewards data
//!
//! The client keeps one cache entry per remote query (the user's profile
//! and the rewards status). Mutation handlers receive the cache handle
//! explicitly and patch the relevant entry after a successful server
//! response; there is no ambient shared state.

use fantasix_core::{RewardsStatus, UserProfile};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Identity of a cached remote query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Profile,
    Rewards,
}

/// Cached value, one variant per query kind
#[derive(Debug, Clone)]
enum CachedQuery {
    Profile(UserProfile),
    Rewards(RewardsStatus),
}

/// Cached item with expiration
struct CacheEntry {
    value: CachedQuery,
    inserted_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        self.inserted_at.elapsed() > self.ttl
    }
}

/// Thread-safe query cache with per-key TTL
///
/// Stale entries read as misses; the caller refetches and re-inserts.
pub struct QueryCache {
    entries: RwLock<HashMap<QueryKey, CacheEntry>>,
    profile_ttl: Duration,
    rewards_ttl: Duration,
}

impl QueryCache {
    pub fn with_ttls(profile_ttl: Duration, rewards_ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            profile_ttl,
            rewards_ttl,
        }
    }

    fn get(&self, key: QueryKey) -> Option<CachedQuery> {
        let entries = self.entries.read().ok()?;
        let entry = entries.get(&key)?;

        if entry.is_expired() {
            None
        } else {
            Some(entry.value.clone())
        }
    }

    fn set(&self, key: QueryKey, value: CachedQuery, ttl: Duration) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(
                key,
                CacheEntry {
                    value,
                    inserted_at: Instant::now(),
                    ttl,
                },
            );
        }
    }

    /// Get the cached profile if fresh
    pub fn get_profile(&self) -> Option<UserProfile> {
        match self.get(QueryKey::Profile)? {
            CachedQuery::Profile(profile) => Some(profile),
            _ => None,
        }
    }

    /// Insert or replace the cached profile
    pub fn set_profile(&self, profile: UserProfile) {
        self.set(QueryKey::Profile, CachedQuery::Profile(profile), self.profile_ttl);
    }

    /// Get the cached rewards status if fresh
    pub fn get_rewards(&self) -> Option<RewardsStatus> {
        match self.get(QueryKey::Rewards)? {
            CachedQuery::Rewards(status) => Some(status),
            _ => None,
        }
    }

    /// Insert or replace the cached rewards status
    pub fn set_rewards(&self, status: RewardsStatus) {
        self.set(QueryKey::Rewards, CachedQuery::Rewards(status), self.rewards_ttl);
    }

    /// Drop a single entry (forces a refetch on next read)
    pub fn invalidate(&self, key: QueryKey) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(&key);
        }
    }

    /// Drop everything (e.g., on logout)
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        // Profile data moves slowly; rewards eligibility flips within the day
        Self::with_ttls(Duration::from_secs(5 * 60), Duration::from_secs(30))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn profile(username: &str) -> UserProfile {
        UserProfile {
            id: 1,
            username: username.to_string(),
            email: "siege@example.com".to_string(),
            siege_points: 120,
            profile_pic_url: None,
            has_changed_username: false,
            created_at: Utc::now(),
            is_admin: false,
        }
    }

    fn rewards(streak: u32) -> RewardsStatus {
        RewardsStatus {
            can_claim: true,
            daily_streak: streak,
            last_claim: None,
            next_claim_at: None,
        }
    }

    #[test]
    fn test_set_then_get() {
        let cache = QueryCache::default();
        assert!(cache.get_profile().is_none());

        cache.set_profile(profile("SiegeFan"));
        cache.set_rewards(rewards(5));

        assert_eq!(cache.get_profile().unwrap().username, "SiegeFan");
        assert_eq!(cache.get_rewards().unwrap().daily_streak, 5);
    }

    #[test]
    fn test_expired_entry_reads_as_miss() {
        let cache = QueryCache::with_ttls(Duration::from_millis(1), Duration::from_millis(1));
        cache.set_profile(profile("SiegeFan"));
        cache.set_rewards(rewards(2));

        std::thread::sleep(Duration::from_millis(10));

        assert!(cache.get_profile().is_none());
        assert!(cache.get_rewards().is_none());
    }

    #[test]
    fn test_patch_is_visible_to_next_read() {
        let cache = QueryCache::default();
        cache.set_profile(profile("OldName"));

        // Read-modify-write, the way mutation handlers patch entries
        let mut patched = cache.get_profile().unwrap();
        patched.username = "NewName".to_string();
        patched.has_changed_username = true;
        cache.set_profile(patched);

        let read = cache.get_profile().unwrap();
        assert_eq!(read.username, "NewName");
        assert!(read.has_changed_username);
    }

    #[test]
    fn test_invalidate_and_clear() {
        let cache = QueryCache::default();
        cache.set_profile(profile("SiegeFan"));
        cache.set_rewards(rewards(1));

        cache.invalidate(QueryKey::Rewards);
        assert!(cache.get_rewards().is_none());
        assert!(cache.get_profile().is_some());

        cache.clear();
        assert!(cache.get_profile().is_none());
    }
}
