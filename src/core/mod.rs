//! Low-level, allocation-free primitives.
//!
//! These types are deliberately small and `Copy`-friendly; the solver touches
//! them in the innermost loop of the search:
//!
//! - [`coord`]: integer cell coordinates with the usual vector operators.
//! - [`moves`]: the fixed knight step table and candidate expansion.

pub mod coord;
pub mod moves;
