//! Least-squares polynomial fit through QR.
//!
//! Data flow:
//!
//! ```text
//! features -> A = vandermonde(degree, features)
//!          -> (Q, R) = mgs(A)
//!          -> rhs = Q* · labels
//!          -> coefficients = back_substitution(R, rhs)
//! ```
//!
//! Because `Q` has orthonormal columns, `R · c = Q* · y` is the reduced normal
//! system of `min ‖A·c − y‖₂`, so tall inputs (more samples than coefficients)
//! get the least-squares solution and square inputs get the interpolant.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::LinalgError;
use crate::math::{
    DEFAULT_RANK_TOLERANCE, Vector, back_substitution, conjugate_transpose, matrix_vector_mult,
    modified_gram_schmidt, p_norm, vandermonde, vector_subtract,
};
use crate::models::Polynomial;

/// Numerical options for a single fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitOptions {
    /// Relative norm below which a Gram-Schmidt column is treated as dependent.
    pub rank_tolerance: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            rank_tolerance: DEFAULT_RANK_TOLERANCE,
        }
    }
}

/// Fit quality diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitQuality {
    pub sse: f64,
    pub rmse: f64,
    pub bic: f64,
    pub n: usize,
}

/// A fitted polynomial together with its residuals and diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolyFit {
    pub polynomial: Polynomial,
    /// `label − p(feature)` per sample.
    pub residuals: Vector,
    pub quality: FitQuality,
}

impl PolyFit {
    pub fn degree(&self) -> usize {
        self.polynomial.degree()
    }

    pub fn coefficients(&self) -> &Vector {
        self.polynomial.coefficients()
    }
}

/// Fit a degree-`degree` polynomial and return its `degree + 1` coefficients,
/// constant term first.
pub fn fit(features: &Vector, labels: &Vector, degree: usize) -> Result<Vector, LinalgError> {
    fit_coefficients(features, labels, degree, &FitOptions::default())
}

/// [`fit`] with explicit numerical options.
pub fn fit_coefficients(
    features: &Vector,
    labels: &Vector,
    degree: usize,
    opts: &FitOptions,
) -> Result<Vector, LinalgError> {
    validate_inputs(features, labels, degree)?;

    let a = vandermonde(degree, features)?;
    let (q, r) = modified_gram_schmidt(&a, opts.rank_tolerance)?.into_parts();
    let rhs = matrix_vector_mult(&conjugate_transpose(&q), labels)?;
    back_substitution(&r, &rhs)
}

/// Fit and compute residual diagnostics.
pub fn fit_polynomial(
    features: &Vector,
    labels: &Vector,
    degree: usize,
    opts: &FitOptions,
) -> Result<PolyFit, LinalgError> {
    let coefficients = fit_coefficients(features, labels, degree, opts)?;
    let polynomial = Polynomial::new(coefficients);

    let fitted = polynomial.evaluate_all(features);
    let residuals = vector_subtract(labels, &fitted)?;
    let n = features.len();
    let sse = p_norm(2, &residuals)?.powi(2);
    let rmse = (sse / n as f64).sqrt();
    let quality = FitQuality {
        sse,
        rmse,
        bic: bic(n, sse, degree + 1),
        n,
    };
    debug!("fit degree {degree}: n={n} sse={sse:e} bic={:.3}", quality.bic);

    Ok(PolyFit {
        polynomial,
        residuals,
        quality,
    })
}

fn validate_inputs(features: &Vector, labels: &Vector, degree: usize) -> Result<(), LinalgError> {
    if degree == 0 {
        return Err(LinalgError::InvalidDegree { degree });
    }
    if features.len() != labels.len() {
        return Err(LinalgError::DimensionMismatch {
            op: "fit (features vs labels)",
            left: features.len(),
            right: labels.len(),
        });
    }
    // `len <= degree` rather than `len < degree + 1`: the degree is caller input.
    if features.len() <= degree {
        return Err(LinalgError::InsufficientSamples {
            samples: features.len(),
            required: degree.saturating_add(1),
        });
    }
    Ok(())
}

/// Bayesian information criterion for Gaussian residuals with `k` parameters.
pub(crate) fn bic(n: usize, sse: f64, k: usize) -> f64 {
    let n_f = n as f64;
    let sse_per = (sse / n_f).max(1e-12);
    n_f * sse_per.ln() + (k as f64) * n_f.ln()
}
