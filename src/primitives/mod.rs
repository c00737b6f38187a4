//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental building blocks used throughout the
//! crate:
//! - The unified error taxonomy (`ForecastError`)
//! - Temperature sample types (`SamplePoint`, `Series`)
//!
//! These carry no algorithmic logic of their own.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for forecasting operations.
pub mod errors;

/// Temperature sample types.
pub mod sample;
