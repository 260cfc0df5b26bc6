//! # primops — scalar operators and sequence combinators
//!
//! The primitive layer of a differentiable-programming stack: numerically
//! careful scalar functions, their derivative-scaling ("backward") helpers,
//! and a handful of higher-order combinators for working over sequences of
//! scalars.
//!
//! ## Scalar operators
//!
//! | Operator | Result |
//! |---|---|
//! | `mul`, `add`, `neg`, `id` | elementary arithmetic |
//! | `lt`, `eq` | `1` or `0` in the input type |
//! | `max` | `x` if `x > y`, else `y` (ties return `y`) |
//! | `is_close` | `\|x - y\| < 1e-2` |
//! | `sigmoid` | logistic, evaluated without overflow for either sign |
//! | `relu` | `x` if `x > 0`, else `0` |
//! | `log` | `ln(x + 1e-6)` |
//! | `exp` | `e^x` |
//! | `inv` | `1 / x`, `Err` at zero |
//! | `log_back`, `inv_back`, `relu_back` | `d * f'(x)` |
//!
//! All operators are generic over [`num_traits::Float`].
//!
//! ## Combinators
//!
//! A combinator factory captures an operator and returns a bound value that
//! can be applied to any number of sequences:
//!
//! ```
//! use primops::prelude::*;
//!
//! let squash = transform(sigmoid::<f64>);
//! let ys = squash.apply(&[-1.0, 0.0, 1.0]);
//! assert!(is_close(ys[1], 0.5));
//!
//! let dot = |a: &[f64], b: &[f64]| sum(&combine(mul::<f64>).apply(a, b));
//! assert_eq!(dot(&[1.0, 2.0], &[3.0, 4.0]), 11.0);
//! ```
//!
//! Fallible operators go through `try_apply`:
//!
//! ```
//! use primops::prelude::*;
//!
//! assert_eq!(transform(inv::<f64>).try_apply(&[2.0, 4.0]), Ok(vec![0.5, 0.25]));
//! assert!(transform(inv::<f64>).try_apply(&[1.0, 0.0]).is_err());
//! ```
//!
//! ## Compatibility notes
//!
//! Two empty-input behaviors are kept as-is for downstream compatibility:
//!
//! - `combine(op).apply(&[], b)` returns `b` unchanged (and symmetrically).
//! - `fold(op, start).apply(&[])` returns `0` whatever `start` is, so
//!   `prod(&[])` is `0`.
//!
//! `inv_back` returns the true derivative `-d / x^2` and `log_back` returns
//! `d / (x + 1e-6)`.
//!
//! ## Feature Flags
//!
//! - `std` (default): implements `std::error::Error` for [`OpsError`]. Without
//!   it the crate is `no_std` + `alloc`, using `libm` for transcendentals.
//! - `dev`: exposes the internal module tree under `internals` for tests.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 0: Primitives - error type and numeric constants.
mod primitives;

// Layer 1: Math - forward and backward scalar operators.
mod math;

// Layer 2: Algorithms - combinators and derived sequence helpers.
mod algorithms;

// Layer 3: Flat public re-exports.
mod api;

pub use crate::api::OpsError;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// ```
/// use primops::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::*;
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// Only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and constants.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal scalar operators.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal combinators.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
