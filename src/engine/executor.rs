//! Forecast pipeline execution.
//!
//! ## Purpose
//!
//! This module orchestrates one forecast: select the fitting window from the
//! series, fit a polynomial over integer positions, extrapolate the horizon,
//! and assemble the labelled [`ForecastResult`].
//!
//! ## Design notes
//!
//! * **Window selection**: The most recent `min(window_size, |series|)`
//!   points form the window, assigned positions `0..w-1`. The requested
//!   window silently clamps to the series length; the degree requirement is
//!   then re-checked against the clamped window.
//! * **Display rounding**: Predictions are rounded to one decimal place
//!   (display-grade precision); coefficients keep full precision.
//! * **No downgrades**: A failed fit propagates as an error. The pipeline
//!   never substitutes a degenerate chart for the caller to render.
//!
//! ## Key concepts
//!
//! * **Positions**: Fitting uses integer hour positions, not raw
//!   timestamps, keeping the normal-equations system well-scaled.
//! * **Predicted labels**: Derived from the last window timestamp plus
//!   `k·3600`, k in `1..=horizon`.
//!
//! ## Invariants
//!
//! * `predicted.len() == horizon` and
//!   `labels.len() == observed.len() + horizon` on success.
//!
//! ## Non-goals
//!
//! * This module does not construct series; see
//!   [`algorithms::series`](crate::algorithms::series).
//! * This module does not retry or adjust the degree on failure.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::output::{self, ForecastResult};
use crate::engine::validator::Validator;
use crate::math::linalg::PivotPolicy;
use crate::math::polynomial;
use crate::primitives::errors::ForecastError;
use crate::primitives::sample::SamplePoint;

/// Default fitting window size in points.
pub const DEFAULT_WINDOW_SIZE: usize = 12;

/// Default prediction horizon in hours.
pub const DEFAULT_HORIZON: usize = 6;

/// Default polynomial degree.
pub const DEFAULT_DEGREE: usize = 2;

// ============================================================================
// Configuration
// ============================================================================

/// Validated pipeline configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastConfig<T: Float> {
    /// Fitting window size in points (clamped to the series length).
    pub window_size: usize,
    /// Number of hours predicted beyond the window.
    pub horizon: usize,
    /// Polynomial degree.
    pub degree: usize,
    /// Near-zero pivot handling for the underlying solver.
    pub pivot_policy: PivotPolicy<T>,
}

impl<T: Float> Default for ForecastConfig<T> {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            horizon: DEFAULT_HORIZON,
            degree: DEFAULT_DEGREE,
            pivot_policy: PivotPolicy::default(),
        }
    }
}

// ============================================================================
// Pipeline
// ============================================================================

/// Run one forecast over `series` with the given configuration.
///
/// # Errors
///
/// * `EmptySeries`, `InvalidNumericValue`, or `NonChronological` for
///   malformed series.
/// * `InsufficientSamples` if the clamped window is shorter than
///   `degree + 1`.
/// * `SingularMatrix` under [`PivotPolicy::Fail`] on ill-conditioned fits.
pub fn run<T: Float>(
    series: &[SamplePoint<T>],
    config: &ForecastConfig<T>,
) -> Result<ForecastResult<T>, ForecastError> {
    Validator::validate_series(series)?;

    let window_len = config.window_size.min(series.len());
    Validator::validate_fit_window(window_len, config.degree)?;
    let window = &series[series.len() - window_len..];

    // Fit over integer positions 0..w-1.
    let positions: Vec<T> = (0..window_len).map(|i| T::from(i).unwrap()).collect();
    let observed: Vec<T> = window.iter().map(|p| p.temperature).collect();
    let coefficients = polynomial::fit(&positions, &observed, config.degree, config.pivot_policy)?;

    let mut labels = Vec::with_capacity(window_len + config.horizon);
    for point in window {
        labels.push(output::hour_label(point.timestamp));
    }

    // Extrapolate positions w..w+horizon-1; label from the last window
    // timestamp forward.
    let base = window[window_len - 1].timestamp;
    let mut predicted = Vec::with_capacity(config.horizon);
    for k in 1..=config.horizon {
        let position = T::from(window_len + k - 1).unwrap();
        predicted.push(round_tenths(polynomial::eval(&coefficients, position)));
        labels.push(output::hour_label(base + (k as i64) * 3600));
    }

    Ok(ForecastResult {
        observed,
        predicted,
        labels,
        coefficients,
    })
}

/// Round to one decimal place for display-grade predictions.
fn round_tenths<T: Float>(value: T) -> T {
    let ten = T::from(10).unwrap();
    (value * ten).round() / ten
}
