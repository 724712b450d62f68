use governor::{
    clock::{Clock, DefaultClock},
    state::direct::NotKeyed,
    state::InMemoryState,
    Quota, RateLimiter as GovernorRateLimiter,
};
use std::collections::HashMap;
use std::{
    num::NonZeroU32,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::RwLock;

type DirectLimiter = GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock>;

struct ContactLimiter {
    limiter: Arc<DirectLimiter>,
    last_seen: Instant,
}

/// Throttles public booking submissions per contact (phone number or email).
///
/// Default: 5 submissions per hour.
#[derive(Clone)]
pub struct BookingRateLimiter {
    limiters: Arc<RwLock<HashMap<String, ContactLimiter>>>,
    quota: Quota,
}

impl BookingRateLimiter {
    pub fn new() -> Self {
        Self::per_hour(5)
    }

    pub fn per_hour(max_submissions: u32) -> Self {
        let burst = NonZeroU32::new(max_submissions).unwrap_or(NonZeroU32::MIN);

        Self {
            limiters: Arc::new(RwLock::new(HashMap::new())),
            quota: Quota::per_hour(burst),
        }
    }

    fn normalize(key: &str) -> String {
        key.chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase()
    }

    /// Consume one submission for `key`.
    ///
    /// Returns `Err(wait)` when the contact has to wait before submitting again.
    pub async fn check(&self, key: &str) -> Result<(), Duration> {
        let key = Self::normalize(key);

        let limiter = {
            let mut limiters = self.limiters.write().await;

            let entry = limiters.entry(key).or_insert_with(|| ContactLimiter {
                limiter: Arc::new(GovernorRateLimiter::direct(self.quota)),
                last_seen: Instant::now(),
            });
            entry.last_seen = Instant::now();
            entry.limiter.clone()
        };

        match limiter.check() {
            Ok(_) => Ok(()),
            Err(negative) => Err(negative.wait_time_from(DefaultClock::default().now())),
        }
    }

    /// Drop limiters that are no longer throttling anyone.
    pub async fn cleanup(&self) {
        self.forget_idle(Instant::now()).await;
    }

    // A contact idle for a whole replenish period has its full burst back,
    // so a fresh limiter behaves the same.
    async fn forget_idle(&self, now: Instant) {
        let replenished_in = self.quota.burst_size_replenished_in();
        let mut limiters = self.limiters.write().await;
        limiters.retain(|_, entry| now.saturating_duration_since(entry.last_seen) < replenished_in);
    }
}

impl Default for BookingRateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_allows_within_limit() {
        let limiter = BookingRateLimiter::per_hour(3);
        let phone = "+212600000000";

        assert_ok!(limiter.check(phone).await);
        assert_ok!(limiter.check(phone).await);
        assert_ok!(limiter.check(phone).await);
        assert_err!(limiter.check(phone).await);
    }

    #[tokio::test]
    async fn test_keys_are_normalized() {
        let limiter = BookingRateLimiter::per_hour(2);

        assert_ok!(limiter.check("+212 600 000 000").await);
        assert_ok!(limiter.check("+212600000000").await);
        assert_err!(limiter.check(" +212600000000 ").await);
    }

    #[tokio::test]
    async fn test_contacts_are_independent() {
        let limiter = BookingRateLimiter::per_hour(1);

        assert_ok!(limiter.check("a@example.com").await);
        assert_err!(limiter.check("a@example.com").await);
        assert_ok!(limiter.check("b@example.com").await);
    }

    #[tokio::test]
    async fn test_zero_quota_still_allows_one() {
        let limiter = BookingRateLimiter::per_hour(0);
        assert_ok!(limiter.check("x").await);
        assert_err!(limiter.check("x").await);
    }

    #[tokio::test]
    async fn test_cleanup_keeps_throttled_contacts() {
        let limiter = BookingRateLimiter::per_hour(1);
        let _ = limiter.check("a").await;
        let _ = limiter.check("a").await;

        limiter.cleanup().await;
        assert_eq!(limiter.limiters.read().await.len(), 1);
        assert_err!(limiter.check("a").await);
    }

    #[tokio::test]
    async fn test_cleanup_does_not_use_up_submissions() {
        let limiter = BookingRateLimiter::per_hour(2);

        assert_ok!(limiter.check("+212611223344").await);
        limiter.cleanup().await;
        limiter.cleanup().await;

        assert_ok!(limiter.check("+212611223344").await);
        assert_err!(limiter.check("+212611223344").await);
    }

    #[tokio::test]
    async fn test_idle_contacts_are_forgotten() {
        let limiter = BookingRateLimiter::per_hour(1);
        let _ = limiter.check("a").await;
        let _ = limiter.check("b").await;

        limiter
            .forget_idle(Instant::now() + Duration::from_secs(30 * 60))
            .await;
        assert_eq!(limiter.limiters.read().await.len(), 2);

        limiter
            .forget_idle(Instant::now() + Duration::from_secs(61 * 60))
            .await;
        assert!(limiter.limiters.read().await.is_empty());
        assert_ok!(limiter.check("a").await);
    }
}
