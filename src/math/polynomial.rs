//! Polynomial least-squares fitting and evaluation.
//!
//! ## Purpose
//!
//! This module fits a polynomial of a given degree to sample points by the
//! classical normal-equations method and evaluates fitted polynomials at
//! arbitrary positions (interpolation or extrapolation).
//!
//! ## Design notes
//!
//! * **Normal equations**: The least-squares problem is reformulated as the
//!   square system `AᵗA·c = Aᵗy` and delegated to
//!   [`linalg::solve`](crate::math::linalg::solve). Adequate for the low
//!   degrees (≤ 2) and tiny sample counts (≤ ~12) this crate targets; a
//!   QR-based fitter would be preferred for higher degrees or
//!   ill-conditioned inputs. Explicit trade-off, not a defect.
//! * **Fail-fast**: Underdetermined fits (`n < degree + 1`) are rejected
//!   here with `InsufficientSamples` rather than left to the solver's pivot
//!   clamp, which would silently produce degenerate coefficients.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Design matrix**: `A[i][j] = x_i^j`; only the (degree+1)-sized
//!   products `AᵗA` and `Aᵗy` are materialized.
//! * **Coefficient order**: `[c0, c1, .., cd]` for `f(x) = Σ ci·x^i`.
//!
//! ## Non-goals
//!
//! * This module does not weight samples or iterate for robustness.
//! * This module does not select the degree; that is pipeline configuration.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::linalg::{self, PivotPolicy};
use crate::primitives::errors::ForecastError;

// ============================================================================
// Fitting
// ============================================================================

/// Fit a polynomial of the given degree to `(x, y)` samples by least
/// squares, returning coefficients `[c0, c1, .., cd]`.
///
/// # Errors
///
/// * `MismatchedInputs` if `x` and `y` differ in length.
/// * `InsufficientSamples` if fewer than `degree + 1` samples are given.
/// * `SingularMatrix` under [`PivotPolicy::Fail`] on ill-conditioned input.
pub fn fit<T: Float>(
    x: &[T],
    y: &[T],
    degree: usize,
    policy: PivotPolicy<T>,
) -> Result<Vec<T>, ForecastError> {
    if x.len() != y.len() {
        return Err(ForecastError::MismatchedInputs {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    let n = x.len();
    let m = degree + 1;
    if n < m {
        return Err(ForecastError::InsufficientSamples { got: n, need: m });
    }

    // Accumulate AᵗA (m-by-m, flat row-major) and Aᵗy directly; the full
    // n-by-m design matrix is never materialized.
    let mut ata = vec![T::zero(); m * m];
    let mut aty = vec![T::zero(); m];
    let mut powers = vec![T::one(); m];
    for i in 0..n {
        for j in 1..m {
            powers[j] = powers[j - 1] * x[i];
        }
        for r in 0..m {
            aty[r] = aty[r] + powers[r] * y[i];
            for c in 0..m {
                ata[r * m + c] = ata[r * m + c] + powers[r] * powers[c];
            }
        }
    }

    linalg::solve(&ata, &aty, policy)
}

// ============================================================================
// Evaluation
// ============================================================================

/// Evaluate `f(x) = Σ ci·x^i` at `x` via Horner's scheme.
///
/// Total over finite inputs; no failure modes.
pub fn eval<T: Float>(coefficients: &[T], x: T) -> T {
    coefficients
        .iter()
        .rev()
        .fold(T::zero(), |acc, &c| acc * x + c)
}
