//! QR factorization by modified Gram-Schmidt.
//!
//! For an `m × n` matrix `A` (n columns of length m) we produce `Q` (n
//! orthonormal columns of length m) and an `n × n` upper-triangular `R` with
//! `Q · R = A`.
//!
//! The modified variant deflates every remaining column against `q_i` as soon
//! as `q_i` is known, so each projection coefficient is taken from the current
//! (already deflated) working column rather than from the original `A`. This
//! ordering is what keeps `Q` orthogonal to working precision; do not reorder
//! the loop into the classical form.

use log::{debug, trace};

use crate::error::LinalgError;
use crate::math::matrix::Matrix;
use crate::math::scalar::Scalar;
use crate::math::vector::{Vector, dot_product, p_norm, scalar_vector_mult, vector_subtract};

/// Relative threshold below which a deflated column counts as zero.
pub const DEFAULT_RANK_TOLERANCE: f64 = 1e-10;

/// The factors of a QR decomposition.
#[derive(Debug, Clone, PartialEq)]
pub struct QrDecomposition {
    q: Matrix,
    r: Matrix,
}

impl QrDecomposition {
    /// Column-orthonormal factor.
    pub fn q(&self) -> &Matrix {
        &self.q
    }

    /// Upper-triangular factor; nonzero entries satisfy `row <= col`.
    pub fn r(&self) -> &Matrix {
        &self.r
    }

    pub fn into_parts(self) -> (Matrix, Matrix) {
        (self.q, self.r)
    }
}

/// Factorize `a` with the default rank tolerance.
pub fn qr_factorize(a: &Matrix) -> Result<QrDecomposition, LinalgError> {
    modified_gram_schmidt(a, DEFAULT_RANK_TOLERANCE)
}

/// Factorize `a`, treating a column as rank-deficient once its deflated norm
/// drops to `tolerance` times its original norm (or the original norm is 0).
pub fn modified_gram_schmidt(a: &Matrix, tolerance: f64) -> Result<QrDecomposition, LinalgError> {
    let n = a.ncols();

    // Owned working copy; nothing below writes through `a`.
    let mut v: Vec<Vector> = a.columns().to_vec();
    let original_norms = a
        .columns()
        .iter()
        .map(|col| p_norm(2, col))
        .collect::<Result<Vec<_>, _>>()?;

    let mut q: Vec<Vector> = Vec::with_capacity(n);
    // r[row][col], filled row by row.
    let mut r = vec![vec![Scalar::ZERO; n]; n];

    for i in 0..n {
        let norm = p_norm(2, &v[i])?;
        trace!("mgs column {i}: norm {norm:e} (original {:e})", original_norms[i]);
        if original_norms[i] == 0.0 || norm <= tolerance * original_norms[i] {
            debug!("mgs column {i} is linearly dependent (norm {norm:e})");
            return Err(LinalgError::RankDeficient { column: i, norm });
        }
        r[i][i] = Scalar::real(norm);
        let q_i = scalar_vector_mult(r[i][i].inverse()?, &v[i]);

        for j in i + 1..n {
            r[i][j] = dot_product(&q_i, &v[j])?;
            v[j] = vector_subtract(&v[j], &scalar_vector_mult(r[i][j], &q_i))?;
        }
        q.push(q_i);
    }

    let q = Matrix::from_columns(q)?;
    let r = Matrix::from_fn(n, n, |row, col| r[row][col]);
    debug!("mgs factorized {}x{} matrix", a.nrows(), n);
    Ok(QrDecomposition { q, r })
}
