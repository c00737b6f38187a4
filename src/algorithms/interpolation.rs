//! Linear interpolation over coarse temperature samples.
//!
//! ## Purpose
//!
//! This module estimates the temperature at an arbitrary timestamp from a
//! chronological sequence of coarse samples (typically 3-hour forecast
//! steps) by bracketing linear interpolation.
//!
//! ## Design notes
//!
//! * **Bracketing**: The pair `(p0, p1)` with
//!   `p0.timestamp ≤ target ≤ p1.timestamp` is located by linear scan; the
//!   sequences involved are a handful of points, so no search structure is
//!   warranted.
//! * **Boundary clamp**: Targets outside the sampled span return the nearest
//!   boundary temperature unchanged. Extrapolation is the fitted
//!   polynomial's job, never the series builder's.
//!
//! ## Invariants
//!
//! * Input samples must be chronologically ordered (validated upstream).
//! * Equal bracket timestamps yield `p0`'s temperature directly.
//!
//! ## Non-goals
//!
//! * This module does not provide higher-order interpolation.
//! * This module does not sort or validate the input sequence.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ForecastError;
use crate::primitives::sample::SamplePoint;

// ============================================================================
// Interpolation
// ============================================================================

/// Estimate the temperature at `target` by linear interpolation between the
/// bracketing pair of samples, clamping to the boundary temperature outside
/// the sampled span.
///
/// # Errors
///
/// * `EmptySeries` if `samples` is empty.
pub fn interpolate_at<T: Float>(
    samples: &[SamplePoint<T>],
    target: i64,
) -> Result<T, ForecastError> {
    let (first, last) = match (samples.first(), samples.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(ForecastError::EmptySeries),
    };

    // Clamp outside the span: both bracket points collapse to the boundary.
    if target <= first.timestamp {
        return Ok(first.temperature);
    }
    if target >= last.timestamp {
        return Ok(last.temperature);
    }

    let mut p0 = first;
    let mut p1 = last;
    for pair in samples.windows(2) {
        if pair[0].timestamp <= target && target <= pair[1].timestamp {
            p0 = &pair[0];
            p1 = &pair[1];
            break;
        }
    }

    if p0.timestamp == p1.timestamp {
        return Ok(p0.temperature);
    }

    let ratio = T::from(target - p0.timestamp).unwrap()
        / T::from(p1.timestamp - p0.timestamp).unwrap();
    Ok(p0.temperature + (p1.temperature - p0.temperature) * ratio)
}
