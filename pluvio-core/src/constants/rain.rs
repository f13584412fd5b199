//! Rainfall thresholds for the irrigation hold policy
//!
//! Meteorological convention classifies rain by hourly rate:
//!
//! ```text
//! Rate (mm/hr)   Classification
//! -----------------------------
//! < 2.5          Light rain
//! 2.5 - 10       Moderate rain
//! 10 - 50        Heavy rain
//! > 50           Violent rain
//! ```
//!
//! The hold policy only needs two cutoffs: a light-rain rate at which
//! watering is wasteful, and a heavy-rain rate at which it is pointless.

/// Intensity above which rainfall counts as light rain, in mm/hr
///
/// Even a light shower delivers water faster than most irrigation
/// schedules, so crossing this rate is enough to hold a run.
pub const LIGHT_RAIN_INTENSITY_MM_HR: f32 = 2.0;

/// Intensity above which rainfall counts as heavy rain, in mm/hr
pub const HEAVY_RAIN_INTENSITY_MM_HR: f32 = 10.0;

/// Default windowed-accumulation threshold for holding irrigation, in mm
///
/// 5 mm over the trailing window roughly matches one light watering cycle
/// for temperate turf. Hosts are expected to expose this as configuration;
/// the default only covers construction via `Default`.
pub const DEFAULT_HOLD_THRESHOLD_MM: f32 = 5.0;
