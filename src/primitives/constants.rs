//! Numeric constants for the scalar operators.
//!
//! ## Purpose
//!
//! Fixed tolerances are kept as `f64` and converted to the working float type
//! at the point of use. They are not configurable.

use num_traits::Float;

/// Additive stabilizer for `log`: `log(x) = ln(x + LOG_EPSILON)`.
pub const LOG_EPSILON: f64 = 1e-6;

/// Absolute tolerance used by `is_close`.
pub const CLOSE_TOLERANCE: f64 = 1e-2;

/// Convert an `f64` constant into `T`.
///
/// Every `Float` type can represent (possibly with rounding) these constants,
/// so a failed conversion falls back to NaN instead of panicking.
#[inline]
pub fn cast<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}
