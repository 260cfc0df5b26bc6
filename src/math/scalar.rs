//! Forward scalar operators.
//!
//! ## Purpose
//!
//! This module provides the elementary functions of one or two real inputs
//! consumed by the combinators and, later, by gradient propagation.
//!
//! ## Design notes
//!
//! * **Generics**: All operators are generic over `Float`.
//! * **Boolean-as-number**: `lt` and `eq` return `1` or `0` in the input type
//!   so they compose with arithmetic operators and combinators.
//! * **Stability**: `sigmoid` branches on the sign of `x` so the exponential it
//!   evaluates is never of a large positive number.
//!
//! ## Key concepts
//!
//! * **Stabilized log**: `log(x) = ln(x + 1e-6)`; finite at `x = 0`.
//! * **Tie-break**: `max` returns its second argument when the inputs compare
//!   equal, which is observable with signed zeros.
//!
//! ## Invariants
//!
//! * Every operator is pure and total except `inv`, which fails at zero.
//! * `relu(x) >= 0` for every non-NaN `x`.
//!
//! ## Non-goals
//!
//! * `exp` and `log` do not guard against overflow or non-finite results.
//! * `is_close` uses a fixed absolute tolerance, not a relative one.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::constants::{CLOSE_TOLERANCE, LOG_EPSILON, cast};
use crate::primitives::errors::OpsError;

// ============================================================================
// Arithmetic
// ============================================================================

/// `f(x, y) = x * y`
#[inline]
pub fn mul<T: Float>(x: T, y: T) -> T {
    x * y
}

/// `f(x) = x`
#[inline]
pub fn id<T: Float>(x: T) -> T {
    x
}

/// `f(x, y) = x + y`
#[inline]
pub fn add<T: Float>(x: T, y: T) -> T {
    x + y
}

/// `f(x) = -x`
#[inline]
pub fn neg<T: Float>(x: T) -> T {
    -x
}

// ============================================================================
// Comparison
// ============================================================================

/// `1` if `x < y`, else `0`.
#[inline]
pub fn lt<T: Float>(x: T, y: T) -> T {
    if x < y { T::one() } else { T::zero() }
}

/// `1` if `x == y`, else `0`.
#[inline]
pub fn eq<T: Float>(x: T, y: T) -> T {
    if x == y { T::one() } else { T::zero() }
}

/// `x` if `x > y`, else `y`.
///
/// On a tie the second argument wins, so `max(0.0, -0.0)` is `-0.0`. This
/// differs from `Float::max`, which makes no promise about which zero it
/// returns.
#[inline]
pub fn max<T: Float>(x: T, y: T) -> T {
    if x > y { x } else { y }
}

/// `|x - y| < 1e-2`
#[inline]
pub fn is_close<T: Float>(x: T, y: T) -> bool {
    (x - y).abs() < cast(CLOSE_TOLERANCE)
}

// ============================================================================
// Activations
// ============================================================================

/// Logistic function `1 / (1 + e^-x)`.
///
/// # Formula
///
/// ```text
/// sigmoid(x) = 1 / (1 + e^-x)       if x >= 0
///            = e^x / (1 + e^x)      otherwise
/// ```
///
/// Only `e` raised to a non-positive power is ever evaluated, so the result
/// stays in `[0, 1]` for inputs of any magnitude.
#[inline]
pub fn sigmoid<T: Float>(x: T) -> T {
    if x >= T::zero() {
        T::one() / (T::one() + (-x).exp())
    } else {
        let e = x.exp();
        e / (T::one() + e)
    }
}

/// Rectified linear unit: `x` if `x > 0`, else `0`.
#[inline]
pub fn relu<T: Float>(x: T) -> T {
    if x > T::zero() { x } else { T::zero() }
}

// ============================================================================
// Transcendental
// ============================================================================

/// Stabilized natural logarithm `ln(x + 1e-6)`.
///
/// Callers must not rely on true `ln` behavior near zero: `log(0)` is
/// `ln(1e-6)`, not `-inf`. Inputs below `-1e-6` yield NaN.
#[inline]
pub fn log<T: Float>(x: T) -> T {
    (x + cast(LOG_EPSILON)).ln()
}

/// `f(x) = e^x`. Overflows to `+inf` for large `x`.
#[inline]
pub fn exp<T: Float>(x: T) -> T {
    x.exp()
}

/// Reciprocal `1 / x`.
///
/// # Errors
///
/// Returns [`OpsError::DivisionByZero`] when `x` is zero (of either sign).
#[inline]
pub fn inv<T: Float>(x: T) -> Result<T, OpsError> {
    reciprocal(x, "inv")
}

/// Shared reciprocal that reports failures against the calling operator.
#[inline]
pub(crate) fn reciprocal<T: Float>(x: T, op: &'static str) -> Result<T, OpsError> {
    if x == T::zero() {
        return Err(OpsError::DivisionByZero { op });
    }
    Ok(T::one() / x)
}
