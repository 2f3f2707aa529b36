//! Column-major complex matrices.
//!
//! A `Matrix` is a list of column vectors of identical length, so `m[j][i]`
//! is row `i` of column `j`. Rectangularity is checked once, in
//! [`Matrix::from_columns`]; every other constructor and operation preserves
//! it, which is why `transpose` and friends cannot fail.

use std::ops::Index;

use crate::error::LinalgError;
use crate::math::scalar::Scalar;
use crate::math::vector::{Vector, dot_product};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Matrix {
    columns: Vec<Vector>,
    nrows: usize,
}

impl Matrix {
    /// Build a matrix from its columns.
    ///
    /// Fails with `RaggedMatrix` if the columns do not all share the length of
    /// the first one.
    pub fn from_columns(columns: Vec<Vector>) -> Result<Self, LinalgError> {
        let nrows = columns.first().map_or(0, Vector::len);
        if let Some((column, col)) = columns.iter().enumerate().find(|(_, c)| c.len() != nrows) {
            return Err(LinalgError::RaggedMatrix {
                column,
                expected: nrows,
                found: col.len(),
            });
        }
        Ok(Self { columns, nrows })
    }

    pub fn from_real_columns(columns: &[&[f64]]) -> Result<Self, LinalgError> {
        Self::from_columns(columns.iter().map(|c| Vector::from_reals(c)).collect())
    }

    /// All-zero matrix with `ncols` columns of length `nrows`.
    pub fn zeros(ncols: usize, nrows: usize) -> Self {
        Self {
            columns: vec![Vector::zeros(nrows); ncols],
            nrows,
        }
    }

    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |row, col| if row == col { Scalar::ONE } else { Scalar::ZERO })
    }

    /// Build an `nrows × ncols` matrix from `f(row, col)`.
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> Scalar) -> Self {
        let columns = (0..ncols)
            .map(|col| (0..nrows).map(|row| f(row, col)).collect())
            .collect();
        Self { columns, nrows }
    }

    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn columns(&self) -> &[Vector] {
        &self.columns
    }

    /// Entry at (`row`, `col`).
    pub fn at(&self, row: usize, col: usize) -> Scalar {
        self.columns[col][row]
    }

    pub fn is_upper_triangular(&self, tol: f64) -> bool {
        (0..self.ncols()).all(|col| (col + 1..self.nrows).all(|row| self.at(row, col).abs() <= tol))
    }
}

impl Index<usize> for Matrix {
    type Output = Vector;

    fn index(&self, j: usize) -> &Vector {
        &self.columns[j]
    }
}

/// Swap rows and columns.
pub fn transpose(matrix: &Matrix) -> Matrix {
    Matrix::from_fn(matrix.ncols(), matrix.nrows(), |row, col| matrix.at(col, row))
}

/// Elementwise conjugate.
pub fn conjugate_matrix(matrix: &Matrix) -> Matrix {
    Matrix::from_fn(matrix.nrows(), matrix.ncols(), |row, col| matrix.at(row, col).conjugate())
}

/// `A*`: transpose followed by elementwise conjugation.
pub fn conjugate_transpose(matrix: &Matrix) -> Matrix {
    conjugate_matrix(&transpose(matrix))
}

/// `A* · v` computed column by column: `result[i] = dot_product(A[i], v)`.
pub fn adjoint_vector_mult(matrix: &Matrix, vector: &Vector) -> Result<Vector, LinalgError> {
    if matrix.nrows() != vector.len() {
        return Err(LinalgError::DimensionMismatch {
            op: "adjoint_vector_mult",
            left: matrix.nrows(),
            right: vector.len(),
        });
    }
    matrix.columns().iter().map(|col| dot_product(col, vector)).collect()
}

/// Ordinary product `A · v = Σ_j v[j] · A[j]`.
pub fn matrix_vector_mult(matrix: &Matrix, vector: &Vector) -> Result<Vector, LinalgError> {
    if matrix.ncols() != vector.len() {
        return Err(LinalgError::DimensionMismatch {
            op: "matrix_vector_mult",
            left: matrix.ncols(),
            right: vector.len(),
        });
    }
    Ok((0..matrix.nrows())
        .map(|row| {
            matrix
                .columns()
                .iter()
                .zip(vector.iter())
                .fold(Scalar::ZERO, |acc, (col, &x)| acc + col[row] * x)
        })
        .collect())
}

/// Ordinary product `A · B`; column `k` of the result is `A · B[k]`.
pub fn matrix_mult(a: &Matrix, b: &Matrix) -> Result<Matrix, LinalgError> {
    if a.ncols() != b.nrows() {
        return Err(LinalgError::DimensionMismatch {
            op: "matrix_mult",
            left: a.ncols(),
            right: b.nrows(),
        });
    }
    let columns = b
        .columns()
        .iter()
        .map(|col| matrix_vector_mult(a, col))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Matrix {
        columns,
        nrows: a.nrows(),
    })
}
