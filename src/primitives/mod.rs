//! Layer 0: Primitives
//!
//! # Purpose
//!
//! This layer holds the building blocks every other layer relies on:
//! - The crate error type
//! - Fixed numeric constants shared by the scalar operators
//!
//! # Architecture
//!
//! ```text
//! Layer 3: API
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Math
//!   ↓
//! Layer 0: Primitives ← You are here
//! ```

/// Error types for fallible operators.
pub mod errors;

/// Numeric constants and conversion helpers.
pub mod constants;
