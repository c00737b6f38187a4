//! # thermocast — short-horizon temperature micro-forecasting
//!
//! A small, dependency-light library for turning a handful of recent
//! temperature observations into a few hours of predicted values: build a
//! uniform hourly series (observed directly, or interpolated from coarse
//! 3-hour forecast steps), fit a low-degree polynomial by least squares, and
//! extrapolate a short horizon ahead.
//!
//! ## How it works
//!
//! 1. **Series construction**: [`SeriesBuilder`](api::SeriesBuilder) turns
//!    whatever upstream data exists into an hourly
//!    [`Series`](primitives::sample::Series). True hourly observations pass
//!    through; coarse samples are linearly interpolated, anchored at an
//!    injected "now" timestamp, clamped (never extrapolated) at the
//!    boundaries.
//! 2. **Fitting**: the most recent window of points (default 12) is
//!    assigned integer positions `0..w-1` and fitted with a degree-2
//!    polynomial via the normal equations, solved by Gaussian elimination
//!    with partial pivoting.
//! 3. **Extrapolation**: the fitted polynomial is evaluated at positions
//!    `w..w+horizon-1` (default horizon 6), predictions rounded to one
//!    decimal for display.
//! 4. **Output**: an owned [`ForecastResult`](engine::output::ForecastResult)
//!    with observed values, predictions, hour-of-day labels for both, and
//!    the fit coefficients as a diagnostic.
//!
//! ## Quick start
//!
//! ```rust
//! use thermocast::prelude::*;
//!
//! // Coarse 3-hour forecast samples from an upstream weather API.
//! let now = 1_700_000_000;
//! let coarse = vec![
//!     SamplePoint::new(now, 20.0),
//!     SamplePoint::new(now + 3 * 3600, 23.0),
//!     SamplePoint::new(now + 6 * 3600, 27.5),
//!     SamplePoint::new(now + 9 * 3600, 26.0),
//!     SamplePoint::new(now + 12 * 3600, 22.0),
//!     SamplePoint::new(now + 15 * 3600, 19.5),
//!     SamplePoint::new(now + 18 * 3600, 18.0),
//! ];
//!
//! // Synthesize an hourly series anchored at "now".
//! let series = SeriesBuilder::new()
//!     .coarse(coarse)
//!     .current(20.4)
//!     .anchor(now)
//!     .build()?;
//!
//! // Fit a quadratic over the last 12 points and predict 6 hours ahead.
//! let result = Forecaster::new()
//!     .window_size(12)
//!     .horizon(6)
//!     .degree(2)
//!     .build()?
//!     .forecast(&series)?;
//!
//! assert_eq!(result.predicted.len(), 6);
//! assert_eq!(result.labels.len(), result.observed.len() + 6);
//! println!("{}", result);
//! println!("Coeffs: {}", result.diagnostic());
//! # Result::<(), ForecastError>::Ok(())
//! ```
//!
//! ## Failure model
//!
//! Every failure is an explicit [`ForecastError`](primitives::errors::ForecastError)
//! value, terminal for that forecast attempt:
//!
//! * `EmptySeries` — no usable temperature data; surface a "no data" state,
//!   not a chart.
//! * `InsufficientSamples` — fewer points than `degree + 1`; gather more
//!   samples or lower the degree.
//! * `SingularMatrix` — ill-conditioned fit under the fail-fast pivot
//!   policy.
//!
//! Near-singular systems are handled by pivot clamping by default — a
//! deliberate robustness-over-strictness trade-off for display-grade
//! forecasting. Correctness-sensitive callers should select
//! [`PivotPolicy::fail()`](math::linalg::PivotPolicy::fail).
//!
//! ## Precision
//!
//! All numeric entry points are generic over [`num_traits::Float`], so both
//! `f32` and `f64` work; `f64` is the sensible default for fitting.
//!
//! ## no_std
//!
//! The crate is `no_std`-compatible (requires `alloc`): disable default
//! features to drop the `std` dependency. The clock is always injected as a
//! unix timestamp; nothing here reads system time.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the error taxonomy (`ForecastError`) and the fundamental sample
// types (`SamplePoint`, `Series`).
mod primitives;

// Layer 2: Math - pure numeric functions.
//
// Contains Gaussian elimination with a configurable pivot policy and
// polynomial least-squares fitting/evaluation.
mod math;

// Layer 3: Algorithms - series construction.
//
// Contains bracketing linear interpolation and hourly series synthesis
// anchored at an injected clock.
mod algorithms;

// Layer 4: Engine - orchestration and execution control.
//
// Contains fail-fast validation, the fit-and-extrapolate pipeline, and
// result assembly (labels, diagnostics).
mod engine;

// High-level fluent API.
//
// Provides the `Forecaster` and `SeriesBuilder` builders.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard thermocast prelude.
///
/// This module is intended to be wildcard-imported for convenient access to
/// the most commonly used types:
///
/// ```
/// use thermocast::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        ForecastConfig, ForecastError, ForecastModel, ForecastResult,
        ForecasterBuilder as Forecaster, PivotPolicy, SamplePoint, Series, SeriesBuilder,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal series-construction algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
