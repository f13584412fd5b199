//! Irrigation Hold Policy
//!
//! Stateless evaluation of the derived rainfall values. The policy asks
//! two questions, in order: has enough rain already fallen inside the
//! window, and is it raining hard enough right now that more is imminent?
//!
//! Evaluation is strict priority, first match wins:
//!
//! ```text
//! 1. accumulation >= threshold   -> RainAccumulated
//! 2. intensity    >  10.0 mm/hr  -> HeavyRain
//! 3. intensity    >   2.0 mm/hr  -> LightRain
//! 4. otherwise                   -> no hold
//! ```
//!
//! Accumulation outranks intensity so that a saturated lawn stays on hold
//! even after the rain tapers off.

use crate::constants::rain::{HEAVY_RAIN_INTENSITY_MM_HR, LIGHT_RAIN_INTENSITY_MM_HR};

/// Why irrigation is being held
///
/// The discriminants map to stable string codes consumed by hosts for
/// display and automation triggers; see [`HoldReason::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HoldReason {
    /// Windowed accumulation reached the configured threshold
    RainAccumulated,
    /// Current intensity above the heavy-rain cutoff
    HeavyRain,
    /// Current intensity above the light-rain cutoff
    LightRain,
}

impl HoldReason {
    /// Stable host-facing reason code
    pub const fn code(&self) -> &'static str {
        match self {
            HoldReason::RainAccumulated => "RAIN_ACCUMULATED",
            HoldReason::HeavyRain => "HEAVY_RAIN",
            HoldReason::LightRain => "LIGHT_RAIN",
        }
    }
}

impl core::fmt::Display for HoldReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for HoldReason {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.code());
    }
}

/// Evaluate the hold policy against the current derived values
///
/// Pure function, callable at any time; `None` means clear to water.
pub fn evaluate(accumulation_mm: f32, intensity_mm_hr: f32, threshold_mm: f32) -> Option<HoldReason> {
    if accumulation_mm >= threshold_mm {
        return Some(HoldReason::RainAccumulated);
    }
    if intensity_mm_hr > HEAVY_RAIN_INTENSITY_MM_HR {
        return Some(HoldReason::HeavyRain);
    }
    if intensity_mm_hr > LIGHT_RAIN_INTENSITY_MM_HR {
        return Some(HoldReason::LightRain);
    }
    None
}
