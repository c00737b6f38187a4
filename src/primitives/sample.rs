//! Temperature sample types.
//!
//! ## Purpose
//!
//! This module defines the fundamental data carried through the crate: a
//! single timestamped temperature observation (`SamplePoint`) and the
//! chronological sequence of observations (`Series`) that the forecast
//! pipeline consumes.
//!
//! ## Invariants
//!
//! * A `Series` produced by [`SeriesBuilder`](crate::api::SeriesBuilder) has
//!   non-decreasing timestamps. Hand-assembled series are validated again at
//!   forecast time.
//!
//! ## Non-goals
//!
//! * This module does not enforce uniqueness of timestamps.
//! * This module does not own unit conversion; temperatures are whatever
//!   unit the upstream observation source reports.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::Float;

// ============================================================================
// SamplePoint
// ============================================================================

/// A single temperature observation at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint<T: Float> {
    /// Unix timestamp in seconds.
    pub timestamp: i64,
    /// Observed (or interpolated) temperature.
    pub temperature: T,
}

impl<T: Float> SamplePoint<T> {
    /// Create a sample point from a unix timestamp and a temperature.
    pub fn new(timestamp: i64, temperature: T) -> Self {
        Self {
            timestamp,
            temperature,
        }
    }
}

/// A chronologically ordered sequence of temperature samples.
pub type Series<T> = Vec<SamplePoint<T>>;
