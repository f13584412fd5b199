//! Rain gauge reconciliation engine for irrigation hold decisions
//!
//! Turns a noisy, periodically-resetting cumulative rain-gauge feed into a
//! clean windowed rainfall total, a short-term intensity estimate, and a
//! "should irrigation be held" decision.
//!
//! Cumulative gauges are awkward inputs: the counter resets when the sensor
//! power-cycles, when its firmware rolls the total at a fixed time of day,
//! or when the host clock crosses midnight. Samples can also repeat, jitter
//! downward, or arrive with duplicate timestamps. [`RainMonitor`] absorbs
//! all of that and exposes only the derived values.
//!
//! ```no_run
//! use pluvio_core::RainMonitor;
//!
//! // Hold irrigation once 5 mm has fallen within the last 24 hours.
//! let mut monitor: RainMonitor = RainMonitor::with_window_hours(5.0, 24);
//!
//! monitor.record_reading(1_000, 0.0).unwrap();
//! monitor.record_reading(1_801_000, 1.2).unwrap();
//!
//! match monitor.hold_decision() {
//!     Some(reason) => println!("hold irrigation: {}", reason.code()),
//!     None => println!("clear to water"),
//! }
//! ```
//!
//! The crate is a library embedded in a larger host: the host subscribes to
//! its sensor stream and scheduler, then forwards events through the
//! [`RainEvents`](hooks::RainEvents) seam. There is no IO, no blocking, and
//! no internal locking here.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod errors;
pub mod hooks;
pub mod monitor;
pub mod policy;
pub mod readings;
pub mod time;

// Public API
pub use errors::{MonitorError, MonitorResult};
pub use hooks::RainEvents;
pub use monitor::{RainMonitor, RainSnapshot};
pub use policy::HoldReason;
pub use readings::{Reading, ReadingLog};
pub use time::{TimeSource, Timestamp};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
