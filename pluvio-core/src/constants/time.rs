//! Time conversions and window defaults

/// Milliseconds per minute
pub const MS_PER_MINUTE: u64 = 60 * 1_000;

/// Milliseconds per hour
pub const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;

/// Default trailing accumulation window, in hours
///
/// A 24 hour lookback covers the "did it rain since the last scheduled
/// run" question for once-daily irrigation programs.
pub const DEFAULT_WINDOW_HOURS: u64 = 24;
