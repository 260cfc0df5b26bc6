//! Layer 1: Math
//!
//! # Purpose
//!
//! This layer provides the scalar operator catalogue:
//! - Elementary arithmetic and comparison operators
//! - Numerically stable activations (sigmoid, ReLU) and a stabilized log
//! - Backward helpers that scale a local derivative by an upstream value
//!
//! Every function here is pure and O(1). Nothing in this layer knows about
//! sequences.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: API
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Math ← You are here
//!   ↓
//! Layer 0: Primitives
//! ```

/// Forward scalar operators.
pub mod scalar;

/// Derivative-scaling ("backward") operators.
pub mod backward;
