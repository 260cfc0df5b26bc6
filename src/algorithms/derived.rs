//! Sequence helpers built from combinators.
//!
//! ## Purpose
//!
//! Convenience functions that wire a specific scalar operator into a
//! combinator. None of them contains iteration logic of its own.
//!
//! ## Invariants
//!
//! * `sum(&[])` and `prod(&[])` are both `0`, inherited from `fold`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::combinators::{combine, fold, transform};
use crate::math::scalar::{add, inv, mul, neg};
use crate::primitives::errors::OpsError;

/// Negate every element.
#[inline]
pub fn neg_list<T: Float>(seq: &[T]) -> Vec<T> {
    transform(neg::<T>).apply(seq)
}

/// Add two sequences element-wise, with `combine`'s truncation and empty
/// shortcuts.
#[inline]
pub fn add_lists<T: Float>(a: &[T], b: &[T]) -> Vec<T> {
    combine(add::<T>).apply(a, b)
}

/// Sum of a sequence, folding `add` from `0.0`.
#[inline]
pub fn sum<T: Float>(seq: &[T]) -> T {
    fold(add::<T>, T::zero()).apply(seq)
}

/// Product of a sequence, folding `mul` from `1.0`.
///
/// Returns `0` for an empty sequence.
#[inline]
pub fn prod<T: Float>(seq: &[T]) -> T {
    fold(mul::<T>, T::one()).apply(seq)
}

/// Reciprocal of every element.
///
/// # Errors
///
/// Returns [`OpsError::DivisionByZero`] at the first zero element.
#[inline]
pub fn inv_list<T: Float>(seq: &[T]) -> Result<Vec<T>, OpsError> {
    transform(inv::<T>).try_apply(seq)
}
