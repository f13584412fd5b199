//! Rain Gauge Reconciliation
//!
//! ## Measurement Background
//!
//! Tipping-bucket and optical rain gauges report a *cumulative* counter:
//! total millimeters since the counter last started. The counter is
//! monotonic between resets, but resets happen routinely:
//!
//! - the sensor power-cycles and restarts from zero
//! - the firmware rolls the total at a fixed time of day
//! - the host's own day boundary zeroes the baseline
//!
//! On top of that, live feeds repeat values, jitter, and occasionally
//! deliver samples with duplicate or out-of-order timestamps. None of
//! this may corrupt the two values irrigation control actually needs:
//!
//! - **accumulation**: rainfall attributed to the trailing window, in mm
//! - **intensity**: the short-term rain rate, in mm/hr
//!
//! ## Reconciliation Strategy
//!
//! Every accepted reading is appended to a time-ordered log along with a
//! reset flag, the log is trimmed to the trailing window, and both derived
//! values are recomputed from scratch by replaying the retained sequence:
//!
//! ```text
//! ingest(t, v)
//!   ├── classify: v < last value  => reset marker, else sample
//!   ├── trim:     drop entries with timestamp <= t - window
//!   ├── replay:   accumulation = Σ positive deltas between samples
//!   └── estimate: intensity from the final two non-reset entries
//! ```
//!
//! Replaying instead of maintaining a running sum costs O(window) per
//! ingest, but a reset invalidates any incremental total; the replay makes
//! drift impossible and the log is small (readings-per-window).
//!
//! ## Reset Handling
//!
//! The two reset paths are deliberately different operations:
//!
//! - a **detected regression** (`record_reading` sees a value below the
//!   previous one) carries the new low value into the log as a reset
//!   marker and credits it to the daily carry;
//! - a **day boundary** (`record_day_boundary`, host-scheduled) zeroes the
//!   comparison baseline and seeds a zero-valued reset marker, but trims
//!   nothing and recomputes nothing. Derived values refresh on the next
//!   gauge reading.

use log::{debug, warn};

use crate::constants::rain::DEFAULT_HOLD_THRESHOLD_MM;
use crate::constants::time::{DEFAULT_WINDOW_HOURS, MS_PER_HOUR};
use crate::errors::{MonitorError, MonitorResult};
use crate::policy::{self, HoldReason};
use crate::readings::{Reading, ReadingLog};
use crate::time::{span_hours, Timestamp};

/// Stateful reconciler for a single cumulative rain gauge
///
/// Configuration (window length, hold threshold) is fixed at construction.
/// The monitor owns its reading log exclusively and expects one logical
/// writer: all mutation happens on the host's event callback chain. Hosts
/// that deliver callbacks concurrently must serialize access externally
/// (a mutex or a single-threaded task queue); ingest reads and rewrites
/// the whole log non-atomically.
///
/// `N` is the log capacity, a memory bound only. Size it to at least
/// window duration / expected sample interval; the default of 512 covers
/// a 24 hour window at one update every ~3 minutes.
#[derive(Debug, Clone)]
pub struct RainMonitor<const N: usize = 512> {
    /// Trailing window length in ms
    window_ms: u64,
    /// Accumulation threshold for holding irrigation, in mm
    threshold_mm: f32,
    /// Retained readings, oldest to newest
    log: ReadingLog<N>,
    /// Windowed rainfall total, recomputed on every ingest
    accumulation_mm: f32,
    /// Most recent rate estimate; signed
    intensity_mm_hr: f32,
    /// Last observed gauge value, used only for reset detection
    last_value_mm: f32,
    /// Sum of pre-reset final values carried across detected resets.
    /// Tracked for parity with gauge daily totals; no output consumes it.
    daily_accumulation_mm: f32,
}

impl<const N: usize> Default for RainMonitor<N> {
    fn default() -> Self {
        Self::new(
            DEFAULT_HOLD_THRESHOLD_MM,
            DEFAULT_WINDOW_HOURS * MS_PER_HOUR,
        )
    }
}

impl<const N: usize> RainMonitor<N> {
    /// Create a monitor with an explicit window in milliseconds
    ///
    /// `threshold_mm` is the windowed-accumulation level at which
    /// irrigation is held; `window_ms` must be positive.
    pub fn new(threshold_mm: f32, window_ms: u64) -> Self {
        debug_assert!(window_ms > 0);
        debug_assert!(threshold_mm >= 0.0);

        Self {
            window_ms,
            threshold_mm,
            log: ReadingLog::new(),
            accumulation_mm: 0.0,
            intensity_mm_hr: 0.0,
            last_value_mm: 0.0,
            daily_accumulation_mm: 0.0,
        }
    }

    /// Create a monitor with the window given in whole hours
    ///
    /// Matches how hosts usually configure the lookback period.
    pub fn with_window_hours(threshold_mm: f32, hours: u64) -> Self {
        Self::new(threshold_mm, hours * MS_PER_HOUR)
    }

    /// Ingest a raw gauge state string as delivered by the host
    ///
    /// Parses the string and delegates to [`record_reading`]. States that
    /// do not parse to a finite number are logged, rejected with
    /// [`MonitorError::InvalidReading`], and leave every derived value and
    /// the log untouched.
    ///
    /// [`record_reading`]: RainMonitor::record_reading
    pub fn record_raw(&mut self, at: Timestamp, raw: &str) -> MonitorResult<()> {
        let value = raw.trim().parse::<f32>().map_err(|_| {
            warn!("unparseable rain gauge state {:?}; reading dropped", raw);
            MonitorError::InvalidReading
        })?;
        self.record_reading(at, value)
    }

    /// Ingest a new cumulative gauge value observed at `at`
    ///
    /// Classifies the value against the previous one (a strict decrease is
    /// a gauge reset), appends it to the log, trims the trailing window,
    /// and recomputes accumulation and intensity from the retained
    /// sequence. Non-finite values are rejected without touching state.
    pub fn record_reading(&mut self, at: Timestamp, value_mm: f32) -> MonitorResult<()> {
        if !value_mm.is_finite() {
            warn!("non-finite rain gauge value; reading dropped");
            return Err(MonitorError::InvalidReading);
        }

        if value_mm < self.last_value_mm {
            debug!(
                "rain gauge reset detected: {} -> {}",
                self.last_value_mm, value_mm
            );
            // the post-reset counter already includes this much rain
            self.daily_accumulation_mm += value_mm;
            self.log.push(Reading::reset(at, value_mm));
        } else {
            self.log.push(Reading::sample(at, value_mm));
        }
        self.last_value_mm = value_mm;

        // Inclusive cutoff; timestamps earlier than one full window
        // evict nothing.
        if let Some(cutoff) = at.checked_sub(self.window_ms) {
            self.log.evict_older_than(cutoff);
        }

        self.accumulation_mm = self.replay_accumulation();
        self.estimate_intensity();
        Ok(())
    }

    /// Record the scheduled wall-clock reset (local midnight by default;
    /// the time of day is host configuration)
    ///
    /// Zeroes the reset-detection baseline and seeds a zero-valued reset
    /// marker so the next gauge reading accumulates from zero. Does not
    /// trim the window and does not recompute derived values; both happen
    /// on the next [`record_reading`](RainMonitor::record_reading).
    pub fn record_day_boundary(&mut self, at: Timestamp) {
        debug!("day boundary: clearing gauge baseline");
        self.last_value_mm = 0.0;
        self.log.push(Reading::reset(at, 0.0));
    }

    /// Evaluate the hold policy against the current derived values
    ///
    /// `None` means clear to water. See [`policy::evaluate`] for the
    /// priority order.
    pub fn hold_decision(&self) -> Option<HoldReason> {
        policy::evaluate(self.accumulation_mm, self.intensity_mm_hr, self.threshold_mm)
    }

    /// Rainfall attributed to the trailing window, in mm (never negative)
    pub fn accumulation_mm(&self) -> f32 {
        self.accumulation_mm
    }

    /// Most recent rain-rate estimate, in mm/hr (signed)
    pub fn intensity_mm_hr(&self) -> f32 {
        self.intensity_mm_hr
    }

    /// Configured hold threshold, in mm
    pub fn threshold_mm(&self) -> f32 {
        self.threshold_mm
    }

    /// Configured window length, in ms
    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Running carry of pre-reset gauge values (see the field note)
    pub fn daily_accumulation_mm(&self) -> f32 {
        self.daily_accumulation_mm
    }

    /// Number of readings currently retained
    pub fn reading_count(&self) -> usize {
        self.log.len()
    }

    /// Copy of the displayable state for host attribute blocks
    pub fn snapshot(&self) -> RainSnapshot {
        RainSnapshot {
            accumulation_mm: self.accumulation_mm,
            intensity_mm_hr: self.intensity_mm_hr,
            threshold_mm: self.threshold_mm,
        }
    }

    /// Replay the retained sequence into a windowed rainfall total
    ///
    /// Pure fold, oldest to newest. The first entry has no predecessor
    /// and contributes nothing. Reset markers contribute nothing but
    /// become the baseline for the entry that follows them, so rainfall
    /// after a regression diffs against the new low value and rainfall
    /// after a day boundary diffs against zero. Zero and negative deltas
    /// between samples are gauge jitter and are skipped.
    fn replay_accumulation(&self) -> f32 {
        let mut total = 0.0f32;
        let mut prev: Option<f32> = None;

        for reading in self.log.iter() {
            if let Some(prev_mm) = prev {
                if !reading.is_reset {
                    let diff = reading.value_mm - prev_mm;
                    if diff > 0.0 {
                        total += diff;
                    }
                }
            }
            prev = Some(reading.value_mm);
        }
        total
    }

    /// Re-estimate intensity from the final two log slots
    ///
    /// Only the final two slots are inspected; a reset marker in either
    /// one resets the estimate to zero rather than scanning further back.
    /// With two genuine samples the estimate is their delta over elapsed
    /// hours. Duplicate or out-of-order timestamps leave the previous
    /// estimate in place (ordering is checked before subtracting, so the
    /// unsigned math cannot wrap).
    fn estimate_intensity(&mut self) {
        let qualifying = match self.log.tail_pair() {
            (Some(older), Some(newer)) if !older.is_reset && !newer.is_reset => {
                Some((older, newer))
            }
            _ => None,
        };

        match qualifying {
            Some((older, newer)) => {
                if newer.timestamp > older.timestamp {
                    let elapsed = span_hours(older.timestamp, newer.timestamp);
                    self.intensity_mm_hr = (newer.value_mm - older.value_mm) / elapsed;
                }
            }
            None => self.intensity_mm_hr = 0.0,
        }
    }
}

/// Displayable copy of the monitor's derived state
///
/// Rendered the way host attribute blocks present it, one decimal place
/// with units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RainSnapshot {
    /// Windowed rainfall total, in mm
    pub accumulation_mm: f32,
    /// Most recent rate estimate, in mm/hr
    pub intensity_mm_hr: f32,
    /// Configured hold threshold, in mm
    pub threshold_mm: f32,
}

impl core::fmt::Display for RainSnapshot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{:.1} mm accumulated (threshold {:.1} mm), {:.1} mm/hr",
            self.accumulation_mm, self.threshold_mm, self.intensity_mm_hr
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::time::MS_PER_MINUTE;

    fn monitor() -> RainMonitor<16> {
        RainMonitor::new(5.0, 24 * MS_PER_HOUR)
    }

    #[test]
    fn telescoping_accumulation() {
        let mut m = monitor();
        m.record_reading(1_000, 1.0).unwrap();
        m.record_reading(2_000, 1.4).unwrap();
        m.record_reading(3_000, 2.5).unwrap();

        assert!((m.accumulation_mm() - 1.5).abs() < 1e-6);
    }

    #[test]
    fn repeated_values_add_nothing() {
        let mut m = monitor();
        m.record_reading(1_000, 1.0).unwrap();
        m.record_reading(2_000, 1.0).unwrap();
        m.record_reading(3_000, 1.0).unwrap();

        assert_eq!(m.accumulation_mm(), 0.0);
    }

    #[test]
    fn regression_is_classified_as_reset() {
        let mut m = monitor();
        m.record_reading(1_000, 4.0).unwrap();
        m.record_reading(2_000, 0.2).unwrap();

        assert_eq!(m.reading_count(), 2);
        assert!((m.daily_accumulation_mm() - 0.2).abs() < 1e-6);
        // the reset entry itself contributes nothing
        assert_eq!(m.accumulation_mm(), 0.0);
    }

    #[test]
    fn post_reset_segment_diffs_against_new_baseline() {
        let mut m = monitor();
        m.record_reading(1_000, 6.0).unwrap();
        // gauge restarted at 0.5, then climbed
        m.record_reading(2_000, 0.5).unwrap();
        m.record_reading(3_000, 1.5).unwrap();
        m.record_reading(4_000, 2.0).unwrap();

        // post-reset contribution is 2.0 - 0.5, never 2.0 - 6.0
        assert!((m.accumulation_mm() - 1.5).abs() < 1e-6);
    }

    #[test]
    fn consecutive_resets_add_no_spurious_deltas() {
        let mut m = monitor();
        m.record_reading(1_000, 3.0).unwrap();
        m.record_reading(2_000, 1.0).unwrap();
        m.record_day_boundary(3_000);
        m.record_reading(4_000, 0.5).unwrap();

        assert!((m.accumulation_mm() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn readings_outside_window_are_evicted() {
        let mut m: RainMonitor<16> = RainMonitor::new(5.0, MS_PER_HOUR);
        m.record_reading(1_000, 1.0).unwrap();
        m.record_reading(2_000, 2.0).unwrap();

        // one window and a bit later: both old entries fall out
        m.record_reading(2_000 + MS_PER_HOUR + 1, 3.0).unwrap();

        assert_eq!(m.reading_count(), 1);
        assert_eq!(m.accumulation_mm(), 0.0);
    }

    #[test]
    fn intensity_from_two_samples() {
        let mut m = monitor();
        m.record_reading(0, 5.0).unwrap();
        m.record_reading(30 * MS_PER_MINUTE, 7.0).unwrap();

        assert_eq!(m.intensity_mm_hr(), 4.0);
    }

    #[test]
    fn duplicate_timestamp_keeps_previous_estimate() {
        let mut m = monitor();
        m.record_reading(0, 5.0).unwrap();
        m.record_reading(30 * MS_PER_MINUTE, 7.0).unwrap();
        assert_eq!(m.intensity_mm_hr(), 4.0);

        m.record_reading(30 * MS_PER_MINUTE, 7.5).unwrap();

        assert_eq!(m.intensity_mm_hr(), 4.0);
    }

    #[test]
    fn reset_in_tail_zeroes_intensity() {
        let mut m = monitor();
        m.record_reading(0, 5.0).unwrap();
        m.record_reading(30 * MS_PER_MINUTE, 7.0).unwrap();
        assert_eq!(m.intensity_mm_hr(), 4.0);

        // regression lands a reset marker in the final two slots
        m.record_reading(31 * MS_PER_MINUTE, 0.1).unwrap();

        assert_eq!(m.intensity_mm_hr(), 0.0);
    }

    #[test]
    fn single_reading_has_zero_intensity() {
        let mut m = monitor();
        m.record_reading(1_000, 2.0).unwrap();
        assert_eq!(m.intensity_mm_hr(), 0.0);
    }

    #[test]
    fn invalid_reading_mutates_nothing() {
        let mut m = monitor();
        m.record_reading(0, 5.0).unwrap();
        m.record_reading(30 * MS_PER_MINUTE, 7.0).unwrap();
        let acc = m.accumulation_mm();
        let rate = m.intensity_mm_hr();

        assert_eq!(m.record_raw(31 * MS_PER_MINUTE, "unknown"), Err(MonitorError::InvalidReading));
        assert_eq!(m.record_reading(31 * MS_PER_MINUTE, f32::NAN), Err(MonitorError::InvalidReading));
        assert_eq!(m.record_reading(31 * MS_PER_MINUTE, f32::INFINITY), Err(MonitorError::InvalidReading));

        assert_eq!(m.reading_count(), 2);
        assert_eq!(m.accumulation_mm(), acc);
        assert_eq!(m.intensity_mm_hr(), rate);
    }

    #[test]
    fn day_boundary_defers_recompute() {
        let mut m = monitor();
        m.record_reading(0, 5.0).unwrap();
        m.record_reading(30 * MS_PER_MINUTE, 7.0).unwrap();
        let acc = m.accumulation_mm();
        let rate = m.intensity_mm_hr();

        m.record_day_boundary(60 * MS_PER_MINUTE);

        // marker is in the log but derived values wait for the next reading
        assert_eq!(m.reading_count(), 3);
        assert_eq!(m.accumulation_mm(), acc);
        assert_eq!(m.intensity_mm_hr(), rate);
    }

    #[test]
    fn day_boundary_seeds_zero_baseline() {
        let mut m = monitor();
        m.record_day_boundary(1_000);
        m.record_reading(2_000, 0.5).unwrap();

        assert!((m.accumulation_mm() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn daily_carry_feeds_no_output() {
        let mut m = monitor();
        m.record_reading(1_000, 4.0).unwrap();
        m.record_reading(2_000, 0.3).unwrap();

        assert!(m.daily_accumulation_mm() > 0.0);
        assert_eq!(m.accumulation_mm(), 0.0);
        assert_eq!(m.intensity_mm_hr(), 0.0);
        assert_eq!(m.hold_decision(), None);
    }

    #[test]
    fn parses_host_state_strings() {
        let mut m = monitor();
        m.record_raw(1_000, " 1.25 ").unwrap();
        assert_eq!(m.reading_count(), 1);
    }

    #[test]
    fn snapshot_renders_with_units() {
        let mut m = monitor();
        m.record_reading(0, 5.0).unwrap();
        m.record_reading(30 * MS_PER_MINUTE, 7.0).unwrap();

        #[cfg(feature = "std")]
        assert_eq!(
            m.snapshot().to_string(),
            "2.0 mm accumulated (threshold 5.0 mm), 4.0 mm/hr"
        );
    }

    #[test]
    fn hold_decision_tracks_derived_values() {
        let mut m: RainMonitor<16> = RainMonitor::new(1.5, 24 * MS_PER_HOUR);
        assert_eq!(m.hold_decision(), None);

        m.record_reading(0, 0.0).unwrap();
        m.record_reading(30 * MS_PER_MINUTE, 2.0).unwrap();

        // 2.0 mm accumulated beats the 1.5 mm threshold
        assert_eq!(m.hold_decision(), Some(HoldReason::RainAccumulated));
    }
}
