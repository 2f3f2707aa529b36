//! Fitted polynomial model.
//!
//! Kept as a small value type so fitting, reporting and export code can share
//! one evaluation routine.

pub mod polynomial;

pub use polynomial::*;
