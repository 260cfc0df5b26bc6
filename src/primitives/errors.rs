//! Error types for scalar operators.
//!
//! ## Purpose
//!
//! This module defines `OpsError`, the single error type returned by the
//! fallible operators (`inv`, `inv_back`, `log_back`) and propagated
//! unchanged through the fallible combinator entry points.
//!
//! ## Design notes
//!
//! * **no_std**: `Display` is implemented by hand over `core::fmt`; the
//!   `std::error::Error` impl is only compiled with the `std` feature.
//! * **Static context**: Variants carry `&'static str` operator names, so
//!   constructing an error never allocates.
//!
//! ## Invariants
//!
//! * Errors are returned synchronously at the call site; nothing retries.
//!
//! ## Non-goals
//!
//! * Overflow in `exp`/`log` is not an error; those return non-finite values.
//! * Length mismatch in `combine` is not an error; the output is truncated.

use core::fmt;

/// Errors raised by scalar operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpsError {
    /// The denominator of a reciprocal evaluated to zero.
    DivisionByZero {
        /// Name of the operator that failed.
        op: &'static str,
    },
}

impl fmt::Display for OpsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpsError::DivisionByZero { op } => write!(f, "Division by zero in `{}`", op),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OpsError {}
