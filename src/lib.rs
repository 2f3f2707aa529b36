//! `qr-polyfit` library crate.
//!
//! Least-squares polynomial fitting over complex samples: a Vandermonde design
//! matrix, modified Gram-Schmidt QR and back substitution.
//!
//! The binary (`polyfit`) is a thin wrapper around this library so that:
//!
//! - the linear-algebra engine is testable without spawning processes
//! - callers can use [`fit::fit`] directly with a features vector, a labels
//!   vector and a degree

pub mod app;
pub mod cli;
pub mod data;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod models;
pub mod report;

pub use error::{AppError, LinalgError};
pub use fit::fit;
pub use math::{Matrix, Scalar, Vector};
