//! Conversions between facade verbosity and handler severity
//!
//! All arithmetic saturates at the bounds of `i32`/`u32` instead of wrapping.

use crate::core::{Level, Verbosity};

/// Map a handler level onto a facade verbosity, relative to `baseline`.
///
/// Levels at or above the baseline collapse to `0`; the facade has nothing
/// more important than that. Each step below the baseline is one step of
/// verbosity.
#[inline]
pub fn verbosity_from_level(level: Level, baseline: Level) -> Verbosity {
    let diff = level.0.saturating_sub(baseline.0);
    if diff >= 0 {
        0
    } else {
        diff.unsigned_abs()
    }
}

/// Map a facade verbosity onto a handler level: `V(n)` becomes `INFO - n`.
#[inline]
pub fn level_from_verbosity(level: Verbosity) -> Level {
    let level = i32::try_from(level).unwrap_or(i32::MAX);
    Level(Level::INFO.0.saturating_sub(level))
}

/// Baseline level captured from a logger's verbosity.
#[inline]
pub fn baseline_from_verbosity(level: Verbosity) -> Level {
    Level(i32::try_from(level).unwrap_or(i32::MAX))
}
