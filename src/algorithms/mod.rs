//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer contains the series-construction algorithms:
//! - Bracketing linear interpolation over coarse samples
//! - Hourly series synthesis anchored at an injected clock
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Bracketing linear interpolation with boundary clamp.
pub mod interpolation;

/// Hourly series synthesis from coarse samples.
pub mod series;
