//! Polynomial fitting orchestration.
//!
//! Responsibilities:
//!
//! - wire samples through Vandermonde -> QR -> back substitution
//! - compute residual diagnostics (SSE / RMSE / BIC)
//! - select a degree over a candidate range (parallel)

pub mod polyfit;
pub mod selection;

pub use polyfit::*;
pub use selection::*;
