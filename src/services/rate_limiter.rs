use governor::{Quota, RateLimiter, Jitter};
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use std::num::NonZeroU32;
use std::sync::Arc;
use nonzero_ext::*;
use std::time::Duration;

/// Client-side budget for the issue source: a sustained per-minute quota
/// plus a burst cap so a pass never front-loads the whole minute.
#[derive(Clone)]
pub struct ApiRateLimiter {
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    burst_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl ApiRateLimiter {
    pub fn new(requests_per_minute: u32, burst_per_second: u32) -> Self {
        let per_minute = NonZeroU32::new(requests_per_minute).unwrap_or(nonzero!(50u32));
        let per_second = NonZeroU32::new(burst_per_second).unwrap_or(nonzero!(5u32));

        let limiter = Arc::new(RateLimiter::direct(
            Quota::per_minute(per_minute)
        ));

        let burst_limiter = Arc::new(RateLimiter::direct(
            Quota::per_second(per_second)
        ));

        Self {
            limiter,
            burst_limiter,
        }
    }

    pub async fn acquire(&self) {
        self.burst_limiter.until_ready().await;
        self.limiter.until_ready_with_jitter(Jitter::up_to(Duration::from_millis(100))).await;
    }
}
