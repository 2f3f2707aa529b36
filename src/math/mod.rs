//! Complex linear algebra: scalars, vectors, column-major matrices, the
//! Vandermonde design matrix, modified Gram-Schmidt QR and back substitution.

#[cfg(test)]
mod interop;
pub mod matrix;
pub mod qr;
pub mod scalar;
pub mod triangular;
pub mod vandermonde;
pub mod vector;

pub use matrix::*;
pub use qr::*;
pub use scalar::*;
pub use triangular::*;
pub use vandermonde::*;
pub use vector::*;
