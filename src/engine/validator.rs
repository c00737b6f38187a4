//! Input validation for forecast configuration and series data.
//!
//! ## Purpose
//!
//! This module provides validation functions for pipeline configuration
//! parameters and input series. It checks requirements such as parameter
//! bounds, finite values, and chronological ordering.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Enforces constraints like `window_size ≥ 1` and
//!   `degree ≤ 8`.
//! * **Finite Checks**: Ensures all temperatures are finite (no NaN/Inf).
//! * **Fit Requirements**: Ensures the clamped window covers at least
//!   `degree + 1` points.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::linalg::PivotPolicy;
use crate::primitives::errors::ForecastError;
use crate::primitives::sample::SamplePoint;

/// Highest polynomial degree accepted by the pipeline.
///
/// Normal equations degrade quickly with degree; anything past this is a
/// configuration mistake for hourly temperature data.
pub const MAX_DEGREE: usize = 8;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for forecast configuration and input series.
///
/// Provides static methods returning `Result<(), ForecastError>` that fail
/// fast upon the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Series Validation
    // ========================================================================

    /// Validate a series: non-empty, finite temperatures, non-decreasing
    /// timestamps.
    pub fn validate_series<T: Float>(series: &[SamplePoint<T>]) -> Result<(), ForecastError> {
        // Check 1: Non-empty
        if series.is_empty() {
            return Err(ForecastError::EmptySeries);
        }

        // Check 2: Finite temperatures
        for (i, point) in series.iter().enumerate() {
            if !point.temperature.is_finite() {
                return Err(ForecastError::InvalidNumericValue(format!(
                    "temperature[{}]={}",
                    i,
                    point.temperature.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        // Check 3: Chronological order
        for (i, pair) in series.windows(2).enumerate() {
            if pair[1].timestamp < pair[0].timestamp {
                return Err(ForecastError::NonChronological { index: i + 1 });
            }
        }

        Ok(())
    }

    /// Validate a single scalar for finiteness.
    pub fn validate_scalar<T: Float>(value: T, name: &str) -> Result<(), ForecastError> {
        if !value.is_finite() {
            return Err(ForecastError::InvalidNumericValue(format!(
                "{}={}",
                name,
                value.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Reject builders where a parameter was set more than once.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), ForecastError> {
        match duplicate_param {
            Some(name) => Err(ForecastError::DuplicateParameter(name)),
            None => Ok(()),
        }
    }

    /// Validate the fitting window size (must be at least 1).
    pub fn validate_window_size(window_size: Option<usize>) -> Result<(), ForecastError> {
        if let Some(0) = window_size {
            return Err(ForecastError::InvalidWindowSize(0));
        }
        Ok(())
    }

    /// Validate the prediction horizon (must be at least 1).
    pub fn validate_horizon(horizon: Option<usize>) -> Result<(), ForecastError> {
        if let Some(0) = horizon {
            return Err(ForecastError::InvalidHorizon(0));
        }
        Ok(())
    }

    /// Validate the polynomial degree (must be at most [`MAX_DEGREE`]).
    pub fn validate_degree(degree: Option<usize>) -> Result<(), ForecastError> {
        if let Some(d) = degree {
            if d > MAX_DEGREE {
                return Err(ForecastError::InvalidDegree {
                    got: d,
                    max: MAX_DEGREE,
                });
            }
        }
        Ok(())
    }

    /// Validate a pivot policy's epsilon (must be finite and positive).
    pub fn validate_pivot_policy<T: Float>(
        policy: Option<PivotPolicy<T>>,
    ) -> Result<(), ForecastError> {
        if let Some(policy) = policy {
            let epsilon = policy.epsilon();
            if !epsilon.is_finite() || epsilon <= T::zero() {
                return Err(ForecastError::InvalidEpsilon(
                    epsilon.to_f64().unwrap_or(f64::NAN),
                ));
            }
        }
        Ok(())
    }

    /// Validate the synthesis horizon in hours (must be at least 1).
    pub fn validate_hours(hours: Option<usize>) -> Result<(), ForecastError> {
        if let Some(0) = hours {
            return Err(ForecastError::InvalidHours(0));
        }
        Ok(())
    }

    // ========================================================================
    // Fit Requirements
    // ========================================================================

    /// Ensure the clamped window covers at least `degree + 1` points.
    pub fn validate_fit_window(window: usize, degree: usize) -> Result<(), ForecastError> {
        let need = degree + 1;
        if window < need {
            return Err(ForecastError::InsufficientSamples { got: window, need });
        }
        Ok(())
    }
}
