//! Error Types for Gauge Ingest Failures
//!
//! ## Design Philosophy
//!
//! The monitor keeps its error surface deliberately tiny:
//!
//! 1. **One failure mode**: the only thing that can go wrong at the ingest
//!    boundary is a gauge state that does not parse to a finite number.
//!    Every numeric edge case inside the algorithms (empty window, zero
//!    elapsed time between samples, consecutive reset markers) is handled
//!    by an explicit branch and never surfaces as an error.
//!
//! 2. **No partial mutation**: a rejected reading leaves the log,
//!    accumulation, intensity, and the hold decision exactly as they were.
//!    Callers can retry or drop the sample without any cleanup.
//!
//! 3. **Small and `Copy`**: errors are returned on the hot ingest path and
//!    may be stored or forwarded by host wiring, so the type stays inline
//!    with no heap data.
//!
//! ## Handling Strategy
//!
//! The ingest boundary logs the rejected state itself, so host callbacks
//! can simply discard the error (see [`RainEvents`](crate::hooks::RainEvents)):
//!
//! ```rust
//! use pluvio_core::{MonitorError, RainMonitor};
//!
//! let mut monitor: RainMonitor = RainMonitor::default();
//! match monitor.record_raw(1_000, "unknown") {
//!     Ok(()) => {}
//!     Err(MonitorError::InvalidReading) => {
//!         // already logged; derived values are untouched
//!     }
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for monitor operations
pub type MonitorResult<T> = Result<T, MonitorError>;

/// Errors reported by the gauge ingest boundary
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorError {
    /// Raw gauge state did not parse to a finite number (NaN, infinity,
    /// or non-numeric text such as `"unavailable"`)
    #[error("rain gauge state is not a finite number")]
    InvalidReading,
}

#[cfg(feature = "defmt")]
impl defmt::Format for MonitorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidReading => defmt::write!(fmt, "invalid gauge reading"),
        }
    }
}
