//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates forecast execution:
//! - Fail-fast validation of configuration and series input
//! - The fit-and-extrapolate pipeline
//! - Result assembly, labels, and diagnostics
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fail-fast validation of configuration and series data.
pub mod validator;

/// Forecast pipeline execution.
pub mod executor;

/// Result assembly, hour labels, and diagnostics.
pub mod output;
