//! Dense linear system solving for least-squares fitting.
//!
//! ## Purpose
//!
//! This module solves small square linear systems `A·x = b` by Gaussian
//! elimination with partial pivoting on the augmented matrix `[A|b]`. It is
//! the numeric leaf under the polynomial fitter, sized for the tiny
//! normal-equations systems (3x3 for a quadratic fit) this crate produces.
//!
//! ## Design notes
//!
//! * **Partial pivoting**: Each elimination step pivots on the row with the
//!   largest absolute value in the current column, for numerical stability.
//! * **Pivot policy**: Near-zero pivots are handled per [`PivotPolicy`].
//!   The default clamps the pivot to a small epsilon and continues, trading
//!   accuracy on ill-conditioned systems for robustness; fail-fast is
//!   available for callers that prefer an explicit `SingularMatrix` error.
//! * **Layout**: Matrices are flat row-major slices; no matrix type is
//!   exposed.
//! * **Generics**: Generic over `Float` types (f32 and f64).
//!
//! ## Key concepts
//!
//! * **Augmented matrix**: `[A|b]` reduced in place; after full reduction
//!   the last column holds the solution.
//! * **Pivot clamp**: Substituting epsilon for a near-zero pivot avoids
//!   division failure at the cost of numerical accuracy.
//!
//! ## Invariants
//!
//! * `a.len()` must equal `b.len()²`; violations fail with
//!   `DimensionMismatch`.
//! * An empty system (`n = 0`) solves to the empty vector.
//!
//! ## Non-goals
//!
//! * This module does not implement QR or SVD decompositions; the fitter
//!   documents the conditioning limits of the normal-equations approach.
//! * This module does not detect rank deficiency beyond the pivot epsilon.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ForecastError;

/// Default magnitude below which a pivot is considered near-zero.
pub const DEFAULT_PIVOT_EPSILON: f64 = 1e-12;

// ============================================================================
// PivotPolicy
// ============================================================================

/// Behavior when a pivot magnitude falls below epsilon during elimination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PivotPolicy<T: Float> {
    /// Substitute epsilon for the pivot and continue.
    ///
    /// A singular or near-singular system then yields a degenerate (but
    /// finite) solution instead of an error.
    Clamp {
        /// Minimum pivot magnitude.
        epsilon: T,
    },

    /// Stop and return `SingularMatrix`.
    Fail {
        /// Minimum pivot magnitude.
        epsilon: T,
    },
}

impl<T: Float> PivotPolicy<T> {
    /// Clamp policy with the default epsilon (1e-12).
    pub fn clamp() -> Self {
        Self::Clamp {
            epsilon: T::from(DEFAULT_PIVOT_EPSILON).unwrap(),
        }
    }

    /// Fail-fast policy with the default epsilon (1e-12).
    pub fn fail() -> Self {
        Self::Fail {
            epsilon: T::from(DEFAULT_PIVOT_EPSILON).unwrap(),
        }
    }

    /// The configured minimum pivot magnitude.
    pub fn epsilon(&self) -> T {
        match *self {
            Self::Clamp { epsilon } | Self::Fail { epsilon } => epsilon,
        }
    }
}

impl<T: Float> Default for PivotPolicy<T> {
    fn default() -> Self {
        Self::clamp()
    }
}

// ============================================================================
// Gaussian Elimination
// ============================================================================

/// Solve the square system `A·x = b` by Gaussian elimination with partial
/// pivoting.
///
/// `a` is the n-by-n coefficient matrix in flat row-major order and `b` the
/// right-hand side of length n. Rows of the augmented matrix `[A|b]` are
/// fully reduced (Gauss-Jordan), so the solution is read directly from the
/// augmented column without back-substitution.
///
/// # Errors
///
/// * `DimensionMismatch` if `a.len() != b.len()²`.
/// * `SingularMatrix` if a pivot falls below epsilon under
///   [`PivotPolicy::Fail`].
pub fn solve<T: Float>(a: &[T], b: &[T], policy: PivotPolicy<T>) -> Result<Vec<T>, ForecastError> {
    let n = b.len();
    if a.len() != n * n {
        return Err(ForecastError::DimensionMismatch { n, a_len: a.len() });
    }
    if n == 0 {
        return Ok(Vec::new());
    }

    // Augmented matrix [A|b], width n+1, flat row-major.
    let width = n + 1;
    let mut m = vec![T::zero(); n * width];
    for row in 0..n {
        m[row * width..row * width + n].copy_from_slice(&a[row * n..row * n + n]);
        m[row * width + n] = b[row];
    }

    let epsilon = policy.epsilon();
    for i in 0..n {
        // Partial pivot: row with the largest magnitude in column i.
        let mut max_row = i;
        for k in (i + 1)..n {
            if m[k * width + i].abs() > m[max_row * width + i].abs() {
                max_row = k;
            }
        }
        if max_row != i {
            for c in 0..width {
                m.swap(i * width + c, max_row * width + c);
            }
        }

        let mut pivot = m[i * width + i];
        if pivot.abs() < epsilon {
            match policy {
                PivotPolicy::Fail { .. } => {
                    return Err(ForecastError::SingularMatrix { column: i });
                }
                PivotPolicy::Clamp { .. } => pivot = epsilon,
            }
        }

        // Normalize the pivot row.
        for c in i..width {
            m[i * width + c] = m[i * width + c] / pivot;
        }

        // Eliminate column i from every other row.
        for r in 0..n {
            if r == i {
                continue;
            }
            let factor = m[r * width + i];
            for c in i..width {
                m[r * width + c] = m[r * width + c] - factor * m[i * width + c];
            }
        }
    }

    Ok((0..n).map(|row| m[row * width + n]).collect())
}
