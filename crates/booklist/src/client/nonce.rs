//! Cache-busting values for the `_` query parameter.
//!
//! The catalog's own pages send a 13-digit millisecond timestamp in `_` and the
//! server (or a proxy in front of it) serves fresh data whenever the value changes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of cache-busting values.
///
/// Implementations must return a strictly increasing sequence.
pub trait NonceSource: Send + Sync {
    /// Next value to send.
    fn next_nonce(&self) -> u64;
}

/// Wall-clock based nonce: `unix_seconds * 1000 + counter`.
///
/// The counter is per instance and bumps on every call, so two requests in the
/// same second still differ. The result is also kept strictly above the previous
/// value in case the clock steps backwards.
#[derive(Debug, Default)]
pub struct ClockNonce {
    counter: AtomicU64,
    last: AtomicU64,
}

impl ClockNonce {
    /// Create a nonce source with a fresh counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl NonceSource for ClockNonce {
    fn next_nonce(&self) -> u64 {
        let seconds = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        let increment = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        let candidate = seconds.saturating_mul(1000).saturating_add(increment);

        let previous = self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                Some(candidate.max(last.saturating_add(1)))
            })
            .unwrap_or_else(|last| last);
        candidate.max(previous.saturating_add(1))
    }
}

/// Deterministic nonce for tests: `start`, `start + 1`, ...
#[derive(Debug)]
pub struct SequenceNonce {
    next: AtomicU64,
}

impl SequenceNonce {
    /// Start the sequence at `start`.
    #[must_use]
    pub const fn new(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }
}

impl NonceSource for SequenceNonce {
    fn next_nonce(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}
