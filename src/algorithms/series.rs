//! Hourly temperature series synthesis.
//!
//! ## Purpose
//!
//! This module turns whatever upstream observation data is available into
//! the uniform hourly series the forecast pipeline fits against. When only
//! coarse samples (e.g. 3-hour forecast steps) exist, it synthesizes one
//! point per hour by linear interpolation, anchored at an injected "now"
//! timestamp.
//!
//! ## Design notes
//!
//! * **Injected clock**: "Now" is always a caller-supplied unix timestamp;
//!   this layer never reads the system clock, keeping synthesis
//!   deterministic and testable.
//! * **Current observation**: A live current temperature, when supplied, is
//!   prepended as the point at hour offset 0. Otherwise the first (nearest)
//!   coarse sample's temperature stands in for it.
//! * **Clamped tails**: Target hours before the first or after the last
//!   coarse sample take that boundary temperature unchanged; see
//!   [`interpolation`](crate::algorithms::interpolation).
//!
//! ## Key concepts
//!
//! * **Synthesis horizon**: Number of hourly points generated after the
//!   offset-0 point (default 18, enough for a 12-point fitting window plus
//!   predicted tail).
//!
//! ## Invariants
//!
//! * Output timestamps are `now, now+3600, now+2·3600, ..` — strictly
//!   increasing.
//! * Output length is `hours + 1`.
//!
//! ## Non-goals
//!
//! * This module does not fetch or parse upstream weather data.
//! * This module does not extrapolate beyond the coarse samples.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::interpolation::interpolate_at;
use crate::primitives::errors::ForecastError;
use crate::primitives::sample::SamplePoint;

/// Default number of hourly points synthesized after the offset-0 point.
pub const DEFAULT_SYNTHESIS_HOURS: usize = 18;

/// Seconds per synthesized step.
pub const HOUR_SECONDS: i64 = 3600;

// ============================================================================
// Synthesis
// ============================================================================

/// Synthesize a uniform hourly series from coarse samples.
///
/// The series starts at `now` with `current` (or the first coarse sample's
/// temperature when `current` is `None`), followed by one interpolated point
/// per hour for `hours` hours.
///
/// # Errors
///
/// * `EmptySeries` if `coarse` is empty.
pub fn synthesize_hourly<T: Float>(
    coarse: &[SamplePoint<T>],
    current: Option<T>,
    now: i64,
    hours: usize,
) -> Result<Vec<SamplePoint<T>>, ForecastError> {
    let first = coarse.first().ok_or(ForecastError::EmptySeries)?;
    let current = current.unwrap_or(first.temperature);

    let mut series = Vec::with_capacity(hours + 1);
    series.push(SamplePoint::new(now, current));
    for h in 1..=hours {
        let target = now + (h as i64) * HOUR_SECONDS;
        let temperature = interpolate_at(coarse, target)?;
        series.push(SamplePoint::new(target, temperature));
    }
    Ok(series)
}
