//! Outbound request pacing and per-client request limits

use std::collections::{HashMap, VecDeque};
use std::net::IpAddr;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use tokio::time::sleep;

const CLIENT_WINDOW: Duration = Duration::from_secs(60);

/// Keeps at least `min_interval` between consecutive outbound requests.
///
/// Callers queue on the lock, so concurrent requests go out one gap apart.
pub struct RequestPacer {
    min_interval: Duration,
    last_request: tokio::sync::Mutex<Option<Instant>>,
}

impl RequestPacer {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: tokio::sync::Mutex::new(None),
        }
    }

    /// Wait until the next request may be sent
    pub async fn wait(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(t) = *last {
            let elapsed = t.elapsed();
            if elapsed < self.min_interval {
                sleep(self.min_interval - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }
}

/// Per-IP request quota over a rolling minute
pub struct ClientLimiter {
    per_minute: usize,
    calls: Mutex<HashMap<IpAddr, VecDeque<Instant>>>,
}

impl ClientLimiter {
    pub fn new(per_minute: usize) -> Self {
        Self {
            per_minute,
            calls: Mutex::new(HashMap::new()),
        }
    }

    /// Count a request from `ip` at `now`; false when the quota is used up
    pub fn try_acquire(&self, ip: IpAddr, now: Instant) -> bool {
        let mut calls = self.calls.lock().unwrap_or_else(|e| e.into_inner());
        calls.retain(|_, times| {
            while times.front().is_some_and(|t| now.saturating_duration_since(*t) >= CLIENT_WINDOW) {
                times.pop_front();
            }
            !times.is_empty()
        });

        let times = calls.entry(ip).or_default();
        if times.len() >= self.per_minute {
            return false;
        }
        times.push_back(now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[tokio::test]
    async fn test_pacer_spaces_requests() {
        let pacer = RequestPacer::new(Duration::from_millis(50));
        let start = Instant::now();
        pacer.wait().await;
        assert!(start.elapsed() < Duration::from_millis(50));
        pacer.wait().await;
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn test_client_quota_per_ip() {
        let limiter = ClientLimiter::new(2);
        let a = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1));
        let b = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2));
        let now = Instant::now();

        assert!(limiter.try_acquire(a, now));
        assert!(limiter.try_acquire(a, now + Duration::from_secs(1)));
        assert!(!limiter.try_acquire(a, now + Duration::from_secs(2)));
        // Other clients have their own quota
        assert!(limiter.try_acquire(b, now + Duration::from_secs(2)));
        // The first call has left the window
        assert!(limiter.try_acquire(a, now + Duration::from_secs(60)));
    }
}
