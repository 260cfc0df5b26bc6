//! Derivative-scaling ("backward") operators.
//!
//! ## Purpose
//!
//! Each function here computes `d * f'(x)` for one of the non-linear forward
//! operators: the local derivative at `x` scaled by an upstream value `d`.
//! A gradient-propagation engine calls these while walking a graph backwards.
//!
//! ## Design notes
//!
//! * **Fallibility**: `log_back` and `inv_back` divide by a function of `x` and
//!   return `Result`; `relu_back` is total.
//! * **Closed forms**: Derivatives are written directly from their closed form
//!   rather than composed from other operators.
//!
//! ## Key concepts
//!
//! * **Sub-gradient**: ReLU is not differentiable at zero; the convention here
//!   is a derivative of `0` at `x = 0`.
//!
//! ## Invariants
//!
//! * `log_back(x, d) == d / (x + 1e-6)`, matching the stabilized `log`.
//! * `inv_back(x, d) == -d / x^2`.
//!
//! ## Non-goals
//!
//! * No backward helper for `sigmoid` or `exp`; the consuming engine derives
//!   those from the forward value.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::scalar::reciprocal;
use crate::primitives::constants::{LOG_EPSILON, cast};
use crate::primitives::errors::OpsError;

/// Backward of the stabilized `log`: `d / (x + 1e-6)`.
///
/// # Errors
///
/// Returns [`OpsError::DivisionByZero`] when `x + 1e-6` is zero.
#[inline]
pub fn log_back<T: Float>(x: T, d: T) -> Result<T, OpsError> {
    Ok(d * reciprocal(x + cast(LOG_EPSILON), "log_back")?)
}

/// Backward of `inv`: `-d / x^2`.
///
/// The reciprocal is squared instead of `x` so that the only division is the
/// checked one.
///
/// # Errors
///
/// Returns [`OpsError::DivisionByZero`] when `x` is zero.
#[inline]
pub fn inv_back<T: Float>(x: T, d: T) -> Result<T, OpsError> {
    let r = reciprocal(x, "inv_back")?;
    Ok(-(d * r * r))
}

/// Backward of `relu`: `d` if `x > 0`, else `0`.
#[inline]
pub fn relu_back<T: Float>(x: T, d: T) -> T {
    if x > T::zero() { d } else { T::zero() }
}
