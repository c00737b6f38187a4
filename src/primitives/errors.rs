//! Error types for forecasting operations.
//!
//! ## Purpose
//!
//! This module defines the unified error type (`ForecastError`) returned by
//! every fallible operation in the crate, from low-level linear solves up to
//! the forecast pipeline.
//!
//! ## Design notes
//!
//! * **Terminal**: Every error is terminal for the forecast attempt that
//!   produced it. Nothing in this crate retries internally.
//! * **Explicit**: Callers receive structured variants (with the offending
//!   values embedded) rather than stringly-typed catch-alls, so an
//!   unavailable-forecast state can be surfaced precisely.
//! * **no_std**: Implements `core::fmt::Display` always and
//!   `std::error::Error` behind the `std` feature.
//!
//! ## Key concepts
//!
//! * **EmptySeries / InsufficientSamples**: Data-shape failures a caller can
//!   recover from by gathering more samples or lowering the degree.
//! * **DimensionMismatch / MismatchedInputs**: Malformed solver or fitter
//!   input, indicating a caller bug.
//! * **SingularMatrix**: Only produced under [`fail-fast pivot policy`];
//!   the default clamp policy never raises it.
//!
//! ## Non-goals
//!
//! * This module does not implement error recovery or retry logic.
//! * This module does not downgrade failures into degenerate results.
//!
//! [`fail-fast pivot policy`]: crate::math::linalg::PivotPolicy

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt;

// ============================================================================
// ForecastError
// ============================================================================

/// Errors produced by series construction, fitting, and forecasting.
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// No usable temperature data was supplied at all.
    EmptySeries,

    /// Fewer sample points than the polynomial degree requires.
    InsufficientSamples {
        /// Number of points available.
        got: usize,
        /// Minimum required (degree + 1).
        need: usize,
    },

    /// Solver input is malformed: the matrix is not n-by-n for the
    /// right-hand side of length n.
    DimensionMismatch {
        /// Length of the right-hand side vector.
        n: usize,
        /// Number of matrix elements supplied.
        a_len: usize,
    },

    /// A pivot fell below the configured epsilon under fail-fast policy.
    SingularMatrix {
        /// Pivot column at which elimination stopped.
        column: usize,
    },

    /// The x and y arrays passed to the fitter have different lengths.
    MismatchedInputs {
        /// Length of the x array.
        x_len: usize,
        /// Length of the y array.
        y_len: usize,
    },

    /// A non-finite value (NaN or infinity) was found in the input.
    InvalidNumericValue(String),

    /// Series timestamps decrease at the given index.
    NonChronological {
        /// Index of the first out-of-order point.
        index: usize,
    },

    /// Window size must be at least 1.
    InvalidWindowSize(usize),

    /// Horizon must be at least 1.
    InvalidHorizon(usize),

    /// Polynomial degree exceeds what normal equations handle reliably.
    InvalidDegree {
        /// Requested degree.
        got: usize,
        /// Maximum supported degree.
        max: usize,
    },

    /// Pivot epsilon must be finite and strictly positive.
    InvalidEpsilon(f64),

    /// Synthesis hours must be at least 1.
    InvalidHours(usize),

    /// Interpolated series construction requires an anchor timestamp.
    MissingAnchor,

    /// A builder parameter was set more than once.
    DuplicateParameter(&'static str),
}

impl fmt::Display for ForecastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySeries => write!(f, "No temperature samples available"),
            Self::InsufficientSamples { got, need } => {
                write!(f, "Insufficient samples: got {}, need at least {}", got, need)
            }
            Self::DimensionMismatch { n, a_len } => write!(
                f,
                "Dimension mismatch: matrix has {} elements, expected {}x{} for rhs of length {}",
                a_len, n, n, n
            ),
            Self::SingularMatrix { column } => {
                write!(f, "Singular matrix: pivot below epsilon in column {}", column)
            }
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {} points, y has {}", x_len, y_len)
            }
            Self::InvalidNumericValue(detail) => {
                write!(f, "Invalid numeric value: {}", detail)
            }
            Self::NonChronological { index } => {
                write!(f, "Series timestamps decrease at index {}", index)
            }
            Self::InvalidWindowSize(got) => {
                write!(f, "Invalid window_size: {} (must be at least 1)", got)
            }
            Self::InvalidHorizon(got) => {
                write!(f, "Invalid horizon: {} (must be at least 1)", got)
            }
            Self::InvalidDegree { got, max } => {
                write!(f, "Invalid degree: {} (must be at most {})", got, max)
            }
            Self::InvalidEpsilon(got) => {
                write!(f, "Invalid epsilon: {} (must be finite and > 0)", got)
            }
            Self::InvalidHours(got) => {
                write!(f, "Invalid hours: {} (must be at least 1)", got)
            }
            Self::MissingAnchor => {
                write!(f, "Anchor timestamp required to synthesize an hourly series")
            }
            Self::DuplicateParameter(name) => {
                write!(f, "Parameter '{}' was set more than once", name)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ForecastError {}
