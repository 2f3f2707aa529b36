//! Back substitution for upper-triangular systems.

use crate::error::LinalgError;
use crate::math::matrix::Matrix;
use crate::math::scalar::Scalar;
use crate::math::vector::Vector;

/// Solve `R · x = b` for square upper-triangular `R`.
///
/// Rows are resolved from the last one up to row 0 inclusive:
/// `x[i] = (b[i] − Σ_{j>i} R[i][j]·x[j]) · inverse(R[i][i])`.
/// Entries below the diagonal are never read. A zero diagonal entry fails
/// with `DivisionByZero`.
pub fn back_substitution(r: &Matrix, b: &Vector) -> Result<Vector, LinalgError> {
    let n = r.nrows();
    if r.ncols() != n {
        return Err(LinalgError::DimensionMismatch {
            op: "back_substitution (R not square)",
            left: n,
            right: r.ncols(),
        });
    }
    if b.len() != n {
        return Err(LinalgError::DimensionMismatch {
            op: "back_substitution",
            left: n,
            right: b.len(),
        });
    }

    let mut x = vec![Scalar::ZERO; n];
    for i in (0..n).rev() {
        let acc = (i + 1..n).fold(b[i], |acc, j| acc - r.at(i, j) * x[j]);
        x[i] = acc * r.at(i, i).inverse()?;
    }
    Ok(Vector::new(x))
}
