//! Forecast result assembly and presentation.
//!
//! ## Purpose
//!
//! This module defines [`ForecastResult`], the owned value a forecast
//! invocation returns, plus the label formatting and diagnostic string the
//! rendering collaborator consumes.
//!
//! ## Design notes
//!
//! * **Owned output**: A result is a self-contained value with no borrows
//!   into the input series, so a renderer can atomically replace its current
//!   chart with a new result (last-request-wins).
//! * **Labels**: Hour-of-day strings ("3pm", "12am") derived in UTC via
//!   `chrono`. Callers needing local-time labels shift their timestamps
//!   before building the series.
//! * **Display precision**: Predictions are rounded upstream to one decimal
//!   for display; coefficients keep full precision here and are fixed to
//!   three decimals only in the diagnostic string.
//!
//! ## Invariants
//!
//! * `labels.len() == observed.len() + predicted.len()`.
//! * `coefficients.len()` equals the fitted degree + 1.
//!
//! ## Non-goals
//!
//! * This module does not draw charts or own any visual resource.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt;

// External dependencies
use chrono::{DateTime, Timelike};
use num_traits::Float;

// ============================================================================
// Labels
// ============================================================================

/// Format a unix timestamp as a UTC hour-of-day label ("3pm", "12am").
pub fn hour_label(timestamp: i64) -> String {
    // Timestamps outside chrono's representable range fall back to hour 0.
    let hour = DateTime::from_timestamp(timestamp, 0).map_or(0, |dt| dt.hour());
    let suffix = if hour >= 12 { "pm" } else { "am" };
    let mut display = hour % 12;
    if display == 0 {
        display = 12;
    }
    format!("{}{}", display, suffix)
}

// ============================================================================
// ForecastResult
// ============================================================================

/// The outcome of one forecast invocation: the fitted window, the predicted
/// tail, hour labels covering both, and the fit coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastResult<T: Float> {
    /// Temperatures of the fitted window, oldest first.
    pub observed: Vec<T>,

    /// Predicted temperatures, rounded to one decimal place.
    pub predicted: Vec<T>,

    /// Hour-of-day labels for `observed` followed by `predicted`.
    pub labels: Vec<String>,

    /// Fitted coefficients `[c0, c1, .., cd]` at full precision.
    pub coefficients: Vec<T>,
}

impl<T: Float> ForecastResult<T> {
    /// Fitted polynomial degree.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Human-readable coefficient string, fixed to three decimal places and
    /// comma-separated ("20.214, 0.831, 0.102").
    pub fn diagnostic(&self) -> String {
        let parts: Vec<String> = self
            .coefficients
            .iter()
            .map(|c| format!("{:.3}", c.to_f64().unwrap_or(f64::NAN)))
            .collect();
        parts.join(", ")
    }
}

impl<T: Float> fmt::Display for ForecastResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Forecast summary:")?;
        writeln!(f, "  Observed points: {}", self.observed.len())?;
        writeln!(f, "  Predicted points: {}", self.predicted.len())?;
        writeln!(f, "  Model: polynomial deg {}", self.degree())?;
        writeln!(f, "  Coefficients: {}", self.diagnostic())?;
        writeln!(f)?;
        writeln!(f, "  Label        Temp")?;
        writeln!(f, "  -----------------")?;
        let values = self.observed.iter().chain(self.predicted.iter());
        for (i, (label, value)) in self.labels.iter().zip(values).enumerate() {
            let marker = if i >= self.observed.len() { "*" } else { " " };
            writeln!(
                f,
                "  {:<6} {:>8.1}{}",
                label,
                value.to_f64().unwrap_or(f64::NAN),
                marker
            )?;
        }
        if !self.predicted.is_empty() {
            writeln!(f)?;
            writeln!(f, "  (* predicted)")?;
        }
        Ok(())
    }
}
