//! Higher-order combinators over sequences.
//!
//! ## Purpose
//!
//! This module provides the three combinators the rest of the system uses to
//! iterate over sequences of scalars: `transform` (map), `combine` (zip-with)
//! and `fold` (left reduce). Each factory captures one operator and returns a
//! bound combinator that can be applied any number of times.
//!
//! ## Design notes
//!
//! * **Two-stage**: Binding an operator and applying it are separate steps, so
//!   a bound combinator can be built once and reused.
//! * **Immutable capture**: The operator (and fold start value) are private
//!   fields with no setters.
//! * **Fallible operators**: `try_apply` accepts operators returning
//!   `Result` and stops at the first error, returning no partial output.
//!
//! ## Key concepts
//!
//! * **Truncation**: `combine` pairs elements positionally and stops at the
//!   shorter input.
//! * **Empty shortcuts**: `combine` with one empty input returns the other
//!   input unchanged, and `fold` over an empty input returns `0` rather than
//!   its start value. Both break the usual algebraic laws (for example the
//!   product of an empty sequence is `0`, not `1`) and are kept because
//!   downstream code depends on them.
//!
//! ## Invariants
//!
//! * Inputs are never mutated; `transform` and `combine` always allocate.
//! * Applying a bound combinator never changes it.
//!
//! ## Non-goals
//!
//! * No parallel or lazy evaluation.
//! * No length validation; mismatched lengths are not an error.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt;
use num_traits::Zero;

// ============================================================================
// Factories
// ============================================================================

/// Bind `op` into an element-wise [`Transform`].
///
/// ```
/// use primops::prelude::*;
///
/// let negate = transform(neg::<f64>);
/// assert_eq!(negate.apply(&[1.0, -2.0]), vec![-1.0, 2.0]);
/// ```
#[inline]
pub fn transform<F>(op: F) -> Transform<F> {
    Transform { op }
}

/// Bind `op` into a pairwise [`Combine`].
///
/// ```
/// use primops::prelude::*;
///
/// let plus = combine(add::<f64>);
/// assert_eq!(plus.apply(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), vec![5.0, 7.0, 9.0]);
/// ```
#[inline]
pub fn combine<F>(op: F) -> Combine<F> {
    Combine { op }
}

/// Bind `op` and a start value into a left [`Fold`].
///
/// ```
/// use primops::prelude::*;
///
/// let product = fold(mul::<f64>, 1.0);
/// assert_eq!(product.apply(&[1.0, 2.0, 3.0, 4.0]), 24.0);
/// ```
#[inline]
pub fn fold<F, T>(op: F, start: T) -> Fold<F, T> {
    Fold { op, start }
}

// ============================================================================
// Transform
// ============================================================================

/// Element-wise map bound to a unary operator.
#[derive(Clone, Copy)]
pub struct Transform<F> {
    op: F,
}

impl<F> Transform<F> {
    /// Apply the operator to every element, preserving order and length.
    pub fn apply<T>(&self, seq: &[T]) -> Vec<T>
    where
        T: Copy,
        F: Fn(T) -> T,
    {
        seq.iter().map(|&x| (self.op)(x)).collect()
    }

    /// Apply a fallible operator to every element.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by the operator.
    pub fn try_apply<T, E>(&self, seq: &[T]) -> Result<Vec<T>, E>
    where
        T: Copy,
        F: Fn(T) -> Result<T, E>,
    {
        seq.iter().map(|&x| (self.op)(x)).collect()
    }
}

impl<F> fmt::Debug for Transform<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform").finish_non_exhaustive()
    }
}

// ============================================================================
// Combine
// ============================================================================

/// Positional zip-with bound to a binary operator.
#[derive(Clone, Copy)]
pub struct Combine<F> {
    op: F,
}

impl<F> Combine<F> {
    /// Pair `a` and `b` positionally and apply the operator to each pair.
    ///
    /// The result has the length of the shorter input, except that an empty
    /// `a` returns a copy of `b` and an empty `b` returns a copy of `a`
    /// without invoking the operator.
    pub fn apply<T>(&self, a: &[T], b: &[T]) -> Vec<T>
    where
        T: Copy,
        F: Fn(T, T) -> T,
    {
        if let Some(shortcut) = empty_shortcut(a, b) {
            return shortcut;
        }
        a.iter().zip(b).map(|(&x, &y)| (self.op)(x, y)).collect()
    }

    /// Fallible variant of [`Combine::apply`] with the same empty shortcuts.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by the operator.
    pub fn try_apply<T, E>(&self, a: &[T], b: &[T]) -> Result<Vec<T>, E>
    where
        T: Copy,
        F: Fn(T, T) -> Result<T, E>,
    {
        if let Some(shortcut) = empty_shortcut(a, b) {
            return Ok(shortcut);
        }
        a.iter().zip(b).map(|(&x, &y)| (self.op)(x, y)).collect()
    }
}

impl<F> fmt::Debug for Combine<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combine").finish_non_exhaustive()
    }
}

/// The non-empty side (or an empty vector) when either input is empty.
#[inline]
fn empty_shortcut<T: Copy>(a: &[T], b: &[T]) -> Option<Vec<T>> {
    if a.is_empty() {
        Some(b.to_vec())
    } else if b.is_empty() {
        Some(a.to_vec())
    } else {
        None
    }
}

// ============================================================================
// Fold
// ============================================================================

/// Left fold bound to a binary operator and a start value.
#[derive(Clone, Copy)]
pub struct Fold<F, T> {
    op: F,
    start: T,
}

impl<F, T> Fold<F, T>
where
    T: Copy + Zero,
{
    /// Compute `op(...op(op(start, x1), x2)..., xn)`.
    ///
    /// An empty sequence returns `0`, not `start`.
    pub fn apply(&self, seq: &[T]) -> T
    where
        F: Fn(T, T) -> T,
    {
        if seq.is_empty() {
            return T::zero();
        }
        seq.iter().fold(self.start, |acc, &x| (self.op)(acc, x))
    }

    /// Fallible variant of [`Fold::apply`]; an empty sequence returns `Ok(0)`.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by the operator.
    pub fn try_apply<E>(&self, seq: &[T]) -> Result<T, E>
    where
        F: Fn(T, T) -> Result<T, E>,
    {
        if seq.is_empty() {
            return Ok(T::zero());
        }
        seq.iter().try_fold(self.start, |acc, &x| (self.op)(acc, x))
    }

    /// The captured start value.
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }
}

impl<F, T: fmt::Debug> fmt::Debug for Fold<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fold")
            .field("start", &self.start)
            .finish_non_exhaustive()
    }
}
