//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer provides operator-parameterized sequence processing:
//! - Bound combinators (`Transform`, `Combine`, `Fold`) and their factories
//! - Derived helpers (`neg_list`, `add_lists`, `sum`, `prod`, `inv_list`)
//!
//! Combinators are independent of what the captured operator computes; the
//! derived helpers are the only place where specific operators are wired in.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: API
//!   ↓
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Math
//!   ↓
//! Layer 0: Primitives
//! ```

/// Higher-order combinators over sequences.
pub mod combinators;

/// Sequence helpers built from combinators and scalar operators.
pub mod derived;
