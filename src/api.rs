//! Public API surface.
//!
//! ## Purpose
//!
//! This module gathers the operators, combinators and derived helpers from
//! the lower layers into one flat namespace. The crate prelude re-exports
//! everything here.
//!
//! ## Design notes
//!
//! * **Flat**: Callers never need to know which layer an item lives in.
//! * **Stable**: Internal module paths may change; these names do not.

// Scalar operators
pub use crate::math::backward::{inv_back, log_back, relu_back};
pub use crate::math::scalar::{
    add, eq, exp, id, inv, is_close, log, lt, max, mul, neg, relu, sigmoid,
};

// Combinators
pub use crate::algorithms::combinators::{Combine, Fold, Transform, combine, fold, transform};
pub use crate::algorithms::derived::{add_lists, inv_list, neg_list, prod, sum};

// Primitives
pub use crate::primitives::constants::{CLOSE_TOLERANCE, LOG_EPSILON};
pub use crate::primitives::errors::OpsError;
