//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure numeric functions under the forecast
//! pipeline:
//! - Gaussian elimination for square linear systems
//! - Polynomial least-squares fitting and evaluation
//!
//! These are reusable mathematical building blocks with no
//! forecasting-specific logic.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Gaussian elimination with configurable pivot policy.
pub mod linalg;

/// Polynomial fitting (normal equations) and Horner evaluation.
pub mod polynomial;
