use std::{
    collections::HashMap,
    net::IpAddr,
    sync::Arc,
    time::{Duration, Instant},
};

use parking_lot::Mutex;
use voxylon_api_types::error::ApiError;

/// Fixed-window per-IP request limiter.
///
/// Requests without a resolvable peer address (in-process tests, unix
/// sockets) are not limited.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    state: Arc<Mutex<HashMap<IpAddr, WindowState>>>,
}

#[derive(Debug, Clone, Copy)]
struct WindowState {
    count: u32,
    window_start: Instant,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            state: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Record one request from `peer` and report whether it fits the
    /// current window.
    pub fn allow(&self, peer: Option<IpAddr>) -> bool {
        let Some(peer) = peer else {
            return true;
        };

        let now = Instant::now();
        let mut state = self.state.lock();
        let entry = state.entry(peer).or_insert(WindowState {
            count: 0,
            window_start: now,
        });

        if now.duration_since(entry.window_start) >= self.window {
            entry.count = 0;
            entry.window_start = now;
        }
        if entry.count >= self.max_requests {
            return false;
        }
        entry.count += 1;
        true
    }
}

/// Per-route request quotas: a broad API window plus stricter windows for
/// lookups and for registration attempts.
#[derive(Debug, Clone)]
pub struct RouteQuotas {
    api: RateLimiter,
    lookup: RateLimiter,
    registration: RateLimiter,
}

impl RouteQuotas {
    pub fn new(api: RateLimiter, lookup: RateLimiter, registration: RateLimiter) -> Self {
        Self {
            api,
            lookup,
            registration,
        }
    }

    /// The campaign's published limits.
    pub fn standard() -> Self {
        Self::new(
            RateLimiter::new(100, Duration::from_secs(15 * 60)),
            RateLimiter::new(50, Duration::from_secs(5 * 60)),
            RateLimiter::new(5, Duration::from_secs(60 * 60)),
        )
    }

    /// Effectively unlimited; for tests.
    pub fn permissive() -> Self {
        Self::new(
            RateLimiter::new(u32::MAX, Duration::from_secs(60)),
            RateLimiter::new(u32::MAX, Duration::from_secs(60)),
            RateLimiter::new(u32::MAX, Duration::from_secs(60)),
        )
    }

    pub fn check_lookup(&self, peer: Option<IpAddr>) -> Result<(), ApiError> {
        if !self.api.allow(peer) {
            return Err(ApiError::TooManyRequests(
                "Too many requests from this IP, please try again later.".to_string(),
            ));
        }
        if !self.lookup.allow(peer) {
            return Err(ApiError::TooManyRequests(
                "Too many lookup requests from this IP. Please try again later.".to_string(),
            ));
        }
        Ok(())
    }

    pub fn check_registration(&self, peer: Option<IpAddr>) -> Result<(), ApiError> {
        if !self.api.allow(peer) {
            return Err(ApiError::TooManyRequests(
                "Too many requests from this IP, please try again later.".to_string(),
            ));
        }
        if !self.registration.allow(peer) {
            return Err(ApiError::TooManyRequests(
                "Too many registration attempts from this IP. Please try again later.".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use super::*;

    fn peer(last_octet: u8) -> Option<IpAddr> {
        Some(IpAddr::V4(Ipv4Addr::new(10, 0, 0, last_octet)))
    }

    #[test]
    fn limiter_counts_per_peer() {
        let limiter = RateLimiter::new(2, Duration::from_secs(60));

        assert!(limiter.allow(peer(1)));
        assert!(limiter.allow(peer(1)));
        assert!(!limiter.allow(peer(1)));
        // a different peer has its own window
        assert!(limiter.allow(peer(2)));
    }

    #[test]
    fn unknown_peers_are_not_limited() {
        let limiter = RateLimiter::new(1, Duration::from_secs(60));
        assert!(limiter.allow(None));
        assert!(limiter.allow(None));
    }

    #[test]
    fn window_resets_after_expiry() {
        let limiter = RateLimiter::new(1, Duration::from_millis(10));
        assert!(limiter.allow(peer(3)));
        assert!(!limiter.allow(peer(3)));

        std::thread::sleep(Duration::from_millis(20));
        assert!(limiter.allow(peer(3)));
    }

    #[test]
    fn registration_quota_is_stricter_than_api_quota() {
        let quotas = RouteQuotas::new(
            RateLimiter::new(10, Duration::from_secs(60)),
            RateLimiter::new(10, Duration::from_secs(60)),
            RateLimiter::new(1, Duration::from_secs(60)),
        );

        assert!(quotas.check_registration(peer(4)).is_ok());
        let rejection = quotas.check_registration(peer(4)).expect_err("over quota");
        assert!(rejection.to_string().contains("registration attempts"));
        // lookups still pass on the same peer
        assert!(quotas.check_lookup(peer(4)).is_ok());
    }
}
