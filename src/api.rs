//! High-level API for temperature micro-forecasting.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: a fluent builder for
//! configuring and running forecasts ([`ForecasterBuilder`], aliased
//! `Forecaster` in the prelude) and a builder for assembling the hourly
//! series a forecast consumes ([`SeriesBuilder`]).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builders with sensible defaults for every
//!   parameter.
//! * **Validated**: Parameters are validated when `.build()` is called, not
//!   at each setter; setting the same parameter twice is rejected.
//! * **Type-Safe**: Generic over `Float` types for f32/f64 precision.
//!
//! ### Configuration flow
//!
//! 1. Assemble a series via [`SeriesBuilder`] (pass-through hourly data or
//!    interpolated coarse data).
//! 2. Configure a [`ForecasterBuilder`] and call `.build()` to obtain a
//!    validated [`ForecastModel`].
//! 3. Call `.forecast(&series)` for an owned
//!    [`ForecastResult`](crate::engine::output::ForecastResult).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::series::{synthesize_hourly, DEFAULT_SYNTHESIS_HOURS};
use crate::engine::executor::{self, DEFAULT_DEGREE, DEFAULT_HORIZON, DEFAULT_WINDOW_SIZE};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::executor::ForecastConfig;
pub use crate::engine::output::ForecastResult;
pub use crate::math::linalg::PivotPolicy;
pub use crate::primitives::errors::ForecastError;
pub use crate::primitives::sample::{SamplePoint, Series};

// ============================================================================
// ForecasterBuilder
// ============================================================================

/// Fluent builder for configuring a forecast model.
#[derive(Debug, Clone)]
pub struct ForecasterBuilder<T: Float> {
    /// Fitting window size in points (default 12).
    pub window_size: Option<usize>,

    /// Prediction horizon in hours (default 6).
    pub horizon: Option<usize>,

    /// Polynomial degree (default 2).
    pub degree: Option<usize>,

    /// Near-zero pivot handling (default clamp at 1e-12).
    pub pivot_policy: Option<PivotPolicy<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for ForecasterBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ForecasterBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            window_size: None,
            horizon: None,
            degree: None,
            pivot_policy: None,
            duplicate_param: None,
        }
    }

    /// Set the fitting window size in points.
    pub fn window_size(mut self, window_size: usize) -> Self {
        if self.window_size.is_some() {
            self.duplicate_param = Some("window_size");
        }
        self.window_size = Some(window_size);
        self
    }

    /// Set the prediction horizon in hours.
    pub fn horizon(mut self, horizon: usize) -> Self {
        if self.horizon.is_some() {
            self.duplicate_param = Some("horizon");
        }
        self.horizon = Some(horizon);
        self
    }

    /// Set the polynomial degree.
    pub fn degree(mut self, degree: usize) -> Self {
        if self.degree.is_some() {
            self.duplicate_param = Some("degree");
        }
        self.degree = Some(degree);
        self
    }

    /// Set the near-zero pivot handling policy.
    pub fn pivot_policy(mut self, policy: PivotPolicy<T>) -> Self {
        if self.pivot_policy.is_some() {
            self.duplicate_param = Some("pivot_policy");
        }
        self.pivot_policy = Some(policy);
        self
    }

    /// Validate the configuration and build a [`ForecastModel`].
    ///
    /// # Errors
    ///
    /// * `DuplicateParameter` if any setter was called twice.
    /// * `InvalidWindowSize`, `InvalidHorizon`, `InvalidDegree`, or
    ///   `InvalidEpsilon` for out-of-range parameters.
    pub fn build(self) -> Result<ForecastModel<T>, ForecastError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_window_size(self.window_size)?;
        Validator::validate_horizon(self.horizon)?;
        Validator::validate_degree(self.degree)?;
        Validator::validate_pivot_policy(self.pivot_policy)?;

        Ok(ForecastModel {
            config: ForecastConfig {
                window_size: self.window_size.unwrap_or(DEFAULT_WINDOW_SIZE),
                horizon: self.horizon.unwrap_or(DEFAULT_HORIZON),
                degree: self.degree.unwrap_or(DEFAULT_DEGREE),
                pivot_policy: self.pivot_policy.unwrap_or_default(),
            },
        })
    }
}

// ============================================================================
// ForecastModel
// ============================================================================

/// A validated forecast model, ready to run against series data.
#[derive(Debug, Clone, Copy)]
pub struct ForecastModel<T: Float> {
    config: ForecastConfig<T>,
}

impl<T: Float> ForecastModel<T> {
    /// Run one forecast over `series`.
    ///
    /// # Errors
    ///
    /// * `EmptySeries`, `InvalidNumericValue`, or `NonChronological` for
    ///   malformed series.
    /// * `InsufficientSamples` if the series (after window clamping) cannot
    ///   support the configured degree.
    pub fn forecast(&self, series: &[SamplePoint<T>]) -> Result<ForecastResult<T>, ForecastError> {
        executor::run(series, &self.config)
    }

    /// The validated configuration this model runs with.
    pub fn config(&self) -> &ForecastConfig<T> {
        &self.config
    }
}

// ============================================================================
// SeriesBuilder
// ============================================================================

/// Fluent builder producing the hourly [`Series`] a forecast consumes.
///
/// Two input paths, checked in order:
///
/// * **Hourly** (`.hourly(..)`): true hourly observations pass through
///   unchanged (truncated to `hours + 1` points when `.hours(..)` is set).
/// * **Coarse** (`.coarse(..)`): coarser samples (e.g. 3-hour forecast
///   steps) are interpolated into one point per hour, anchored at the
///   injected `.anchor(now)` timestamp, optionally led by a live
///   `.current(..)` observation.
#[derive(Debug, Clone)]
pub struct SeriesBuilder<T: Float> {
    /// True hourly observations (path a).
    pub hourly: Option<Vec<SamplePoint<T>>>,

    /// Coarse-interval samples to interpolate (path b).
    pub coarse: Option<Vec<SamplePoint<T>>>,

    /// Live current temperature, prepended at hour offset 0 (path b).
    pub current: Option<T>,

    /// "Now" as unix seconds; the injected clock anchoring synthesis.
    pub anchor: Option<i64>,

    /// Number of hourly points synthesized after offset 0 (default 18).
    pub hours: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for SeriesBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SeriesBuilder<T> {
    /// Create a new builder with no inputs.
    pub fn new() -> Self {
        Self {
            hourly: None,
            coarse: None,
            current: None,
            anchor: None,
            hours: None,
            duplicate_param: None,
        }
    }

    /// Supply true hourly observations.
    pub fn hourly(mut self, points: Vec<SamplePoint<T>>) -> Self {
        if self.hourly.is_some() {
            self.duplicate_param = Some("hourly");
        }
        self.hourly = Some(points);
        self
    }

    /// Supply coarse-interval samples for interpolation.
    pub fn coarse(mut self, points: Vec<SamplePoint<T>>) -> Self {
        if self.coarse.is_some() {
            self.duplicate_param = Some("coarse");
        }
        self.coarse = Some(points);
        self
    }

    /// Supply a live current temperature observation.
    pub fn current(mut self, temperature: T) -> Self {
        if self.current.is_some() {
            self.duplicate_param = Some("current");
        }
        self.current = Some(temperature);
        self
    }

    /// Supply "now" as unix seconds (the injected clock).
    pub fn anchor(mut self, now: i64) -> Self {
        if self.anchor.is_some() {
            self.duplicate_param = Some("anchor");
        }
        self.anchor = Some(now);
        self
    }

    /// Set the number of hourly points synthesized after offset 0.
    pub fn hours(mut self, hours: usize) -> Self {
        if self.hours.is_some() {
            self.duplicate_param = Some("hours");
        }
        self.hours = Some(hours);
        self
    }

    /// Validate the inputs and build the hourly series.
    ///
    /// # Errors
    ///
    /// * `EmptySeries` if no input was supplied, or the supplied input is
    ///   empty.
    /// * `MissingAnchor` if coarse input was supplied without `.anchor(..)`.
    /// * `NonChronological` or `InvalidNumericValue` for malformed input.
    pub fn build(self) -> Result<Series<T>, ForecastError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_hours(self.hours)?;

        // Path (a): hourly observations pass through.
        if let Some(mut hourly) = self.hourly {
            Validator::validate_series(&hourly)?;
            if let Some(hours) = self.hours {
                hourly.truncate(hours + 1);
            }
            return Ok(hourly);
        }

        // Path (b): interpolate coarse samples into an hourly series.
        if let Some(coarse) = self.coarse {
            Validator::validate_series(&coarse)?;
            if let Some(current) = self.current {
                Validator::validate_scalar(current, "current")?;
            }
            let now = self.anchor.ok_or(ForecastError::MissingAnchor)?;
            let hours = self.hours.unwrap_or(DEFAULT_SYNTHESIS_HOURS);
            return synthesize_hourly(&coarse, self.current, now, hours);
        }

        Err(ForecastError::EmptySeries)
    }
}
