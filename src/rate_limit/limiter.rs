use crate::config::RateLimitConfig;
use crate::rate_limit::clock::{Clock, SystemClock};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Per-client request tracking for the current window
#[derive(Debug, Clone)]
struct RateLimitEntry {
    count: u32,
    window_start_ms: u64,
}

/// Outcome of a rate limit check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateLimitDecision {
    Allowed {
        limit: u32,
        remaining: u32,
        reset_ms: u64,
    },
    RateLimited {
        retry_after_secs: u64,
        limit: u32,
        reset_ms: u64,
    },
}

impl RateLimitDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RateLimitDecision::Allowed { .. })
    }
}

/// In-memory rate limiter keyed by client identifier.
///
/// Each identifier accumulates a request count inside a window anchored at
/// its first request, not at wall-clock boundaries. The table is swept for
/// expired entries on every check, so memory stays bounded by the set of
/// identifiers active within the last window.
pub struct RateLimiter {
    entries: Mutex<HashMap<String, RateLimitEntry>>,
    window_ms: u64,
    max_requests: u32,
    clock: Arc<dyn Clock>,
}

impl RateLimiter {
    /// Create a rate limiter using the system wall clock
    pub fn new(config: &RateLimitConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a rate limiter with an injected time source
    pub fn with_clock(config: &RateLimitConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            window_ms: config.window_seconds.saturating_mul(1000),
            max_requests: config.max_requests,
            clock,
        }
    }

    /// Check whether a request from `identifier` is allowed, and count it.
    ///
    /// This never fails: the only outcomes are allowed and rate limited.
    /// The mutex keeps the check-then-increment sequence atomic per call,
    /// so two concurrent requests from one identifier cannot both pass on
    /// the last remaining slot.
    pub fn check_and_increment(&self, identifier: &str) -> RateLimitDecision {
        let now = self.clock.now_ms();
        let mut entries = self.entries.lock().unwrap();

        // Opportunistic sweep: drop every entry whose window has expired
        let window_ms = self.window_ms;
        entries.retain(|_, entry| now.saturating_sub(entry.window_start_ms) <= window_ms);

        let entry = entries
            .entry(identifier.to_string())
            .or_insert(RateLimitEntry {
                count: 0,
                window_start_ms: now,
            });

        // Reset the window if it has passed
        if now.saturating_sub(entry.window_start_ms) > window_ms {
            entry.count = 0;
            entry.window_start_ms = now;
        }

        let reset_ms = entry.window_start_ms + window_ms;

        if entry.count >= self.max_requests {
            let retry_after_secs = reset_ms.saturating_sub(now).div_ceil(1000);
            tracing::debug!(
                identifier = %identifier,
                retry_after_secs,
                "Rate limit quota exhausted"
            );
            return RateLimitDecision::RateLimited {
                retry_after_secs,
                limit: self.max_requests,
                reset_ms,
            };
        }

        entry.count += 1;
        RateLimitDecision::Allowed {
            limit: self.max_requests,
            remaining: self.max_requests - entry.count,
            reset_ms,
        }
    }

    /// Number of client identifiers currently tracked
    pub fn tracked_clients(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}
