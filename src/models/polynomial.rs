//! Polynomial evaluation.

use serde::{Deserialize, Serialize};

use crate::math::{Scalar, Vector};

/// `p(x) = c[0] + c[1]·x + … + c[d]·x^d`, coefficients ordered from the
/// constant term up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polynomial {
    coefficients: Vector,
}

impl Polynomial {
    pub fn new(coefficients: Vector) -> Self {
        Self { coefficients }
    }

    pub fn coefficients(&self) -> &Vector {
        &self.coefficients
    }

    /// Highest power carried (`len − 1`); an empty polynomial has degree 0.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Evaluate by Horner's rule.
    pub fn evaluate(&self, x: Scalar) -> Scalar {
        self.coefficients
            .iter()
            .rev()
            .fold(Scalar::ZERO, |acc, &c| acc * x + c)
    }

    /// Evaluate at every sample.
    pub fn evaluate_all(&self, xs: &Vector) -> Vector {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }
}
