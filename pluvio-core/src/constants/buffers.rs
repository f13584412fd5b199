//! Reading-log capacity limits
//!
//! The reading log is a fixed-capacity ring: capacity bounds memory, while
//! window membership stays strictly time-based. Size the capacity so that
//!
//! ```text
//! capacity >= window_duration / expected_sample_interval
//! ```
//!
//! or the ring starts dropping in-window readings from the oldest end.

/// Default reading-log capacity
///
/// Covers a 24 hour window at one gauge update every ~3 minutes. Kept a
/// power of two so the ring's index arithmetic compiles to a bit mask.
/// This value is duplicated as the literal default of the monitor's const
/// parameter (`RainMonitor<const N: usize = 512>`); keep the two in sync.
pub const DEFAULT_LOG_CAPACITY: usize = 512;
