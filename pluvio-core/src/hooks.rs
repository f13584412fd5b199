//! Host Event Wiring
//!
//! The monitor owns no subscriptions: the host watches its gauge entity
//! and schedules the day boundary, then forwards both event kinds through
//! [`RainEvents`]. Keeping the seam as a trait lets hosts drive the
//! monitor from whatever event loop they already run (a home-automation
//! callback chain, an MQTT consumer, a test harness) and lets tests
//! substitute the monitor with a recording double.
//!
//! Error policy at this seam: invalid gauge states are logged at the
//! ingest boundary and swallowed here, so host wiring never has to route
//! a failure back through its event system. Derived values are untouched
//! by a rejected event.

use crate::monitor::RainMonitor;
use crate::time::Timestamp;

/// Callbacks the host's subscription machinery drives
///
/// `at` is the timestamp the host observed when the event fired, from
/// whatever [`TimeSource`](crate::time::TimeSource) it injects.
pub trait RainEvents {
    /// The gauge entity changed state; `raw_state` is the unparsed value
    fn gauge_changed(&mut self, at: Timestamp, raw_state: &str);

    /// The scheduled wall-clock boundary fired (once per day by default)
    fn day_boundary(&mut self, at: Timestamp);
}

impl<const N: usize> RainEvents for RainMonitor<N> {
    fn gauge_changed(&mut self, at: Timestamp, raw_state: &str) {
        // rejected states are already logged by the ingest boundary
        let _ = self.record_raw(at, raw_state);
    }

    fn day_boundary(&mut self, at: Timestamp) {
        self.record_day_boundary(at);
    }
}
