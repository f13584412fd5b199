//! Time handling for the rain monitor
//!
//! The monitor never reads a clock itself: every operation takes the
//! timestamp the host observed when the event fired. This module provides
//! the timestamp representation, the hour conversion used by the intensity
//! estimate, and a small clock abstraction hosts can inject when stamping
//! events:
//! - [`SystemClock`] for wall-clock hosts (requires `std`)
//! - [`FixedTime`] for tests and simulations

use crate::constants::time::MS_PER_HOUR;

/// Timestamp in milliseconds since the Unix epoch
pub type Timestamp = u64;

/// Span between two timestamps expressed in fractional hours
///
/// Callers must pass `earlier <= later`; ordering is checked at the call
/// sites before any subtraction so the `u64` math cannot wrap.
pub fn span_hours(earlier: Timestamp, later: Timestamp) -> f32 {
    debug_assert!(later >= earlier);
    (later - earlier) as f32 / MS_PER_HOUR as f32
}

/// Source of timestamps for host event wiring
pub trait TimeSource {
    /// Current timestamp in milliseconds
    fn now(&self) -> Timestamp;

    /// Whether this source tracks wall-clock time (day boundaries only
    /// make sense against a wall clock)
    fn is_wall_clock(&self) -> bool;
}

/// Wall-clock time source backed by the operating system
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl TimeSource for SystemClock {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }

    fn is_wall_clock(&self) -> bool {
        true
    }
}

/// Manually-advanced time source for tests and simulations
#[derive(Debug, Clone)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    /// Create a source pinned at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Jump to an absolute timestamp
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Advance by `ms` milliseconds
    pub fn advance(&mut self, ms: u64) {
        self.timestamp += ms;
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp
    }

    fn is_wall_clock(&self) -> bool {
        false
    }
}
