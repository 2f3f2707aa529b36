//! Fixed-length complex vectors.
//!
//! A `Vector` is an immutable value: its length is fixed at construction and
//! every operation below returns a fresh vector instead of writing into an
//! operand.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::LinalgError;
use crate::math::scalar::Scalar;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector(Vec<Scalar>);

impl Vector {
    pub fn new(values: Vec<Scalar>) -> Self {
        Self(values)
    }

    /// All-zero vector of length `n`.
    pub fn zeros(n: usize) -> Self {
        Self(vec![Scalar::ZERO; n])
    }

    pub fn from_reals(values: &[f64]) -> Self {
        values.iter().copied().map(Scalar::real).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        self.0.iter()
    }
}

impl FromIterator<Scalar> for Vector {
    fn from_iter<I: IntoIterator<Item = Scalar>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Index<usize> for Vector {
    type Output = Scalar;

    fn index(&self, i: usize) -> &Scalar {
        &self.0[i]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Scalar;
    type IntoIter = std::slice::Iter<'a, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn check_len(op: &'static str, a: &Vector, b: &Vector) -> Result<(), LinalgError> {
    if a.len() != b.len() {
        return Err(LinalgError::DimensionMismatch {
            op,
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Hermitian inner product `Σ conj(a_i) · b_i`, conjugate-linear in `a`.
pub fn dot_product(a: &Vector, b: &Vector) -> Result<Scalar, LinalgError> {
    check_len("dot_product", a, b)?;
    Ok(a
        .iter()
        .zip(b.iter())
        .fold(Scalar::ZERO, |acc, (&x, &y)| acc + x.conjugate() * y))
}

/// Elementwise `s · v`.
pub fn scalar_vector_mult(s: Scalar, v: &Vector) -> Vector {
    v.iter().map(|&x| s * x).collect()
}

/// Elementwise `a − b`.
pub fn vector_subtract(a: &Vector, b: &Vector) -> Result<Vector, LinalgError> {
    check_len("vector_subtract", a, b)?;
    Ok(a.iter().zip(b.iter()).map(|(&x, &y)| x - y).collect())
}

/// Elementwise `a + b`.
pub fn vector_add(a: &Vector, b: &Vector) -> Result<Vector, LinalgError> {
    check_len("vector_add", a, b)?;
    Ok(a.iter().zip(b.iter()).map(|(&x, &y)| x + y).collect())
}

/// `(Σ |v_i|^p)^(1/p)`. For `p = 2` this is the Hermitian norm.
///
/// Entries are divided by the largest modulus before the power is taken, so
/// tiny or huge (but finite) entries do not underflow or overflow the sum.
pub fn p_norm(p: u32, v: &Vector) -> Result<f64, LinalgError> {
    if p == 0 {
        return Err(LinalgError::InvalidNormOrder { p });
    }
    let exp = i32::try_from(p).map_err(|_| LinalgError::InvalidNormOrder { p })?;
    let scale = v.iter().fold(0.0_f64, |acc, s| acc.max(s.abs()));
    if scale == 0.0 || !scale.is_finite() {
        return Ok(scale);
    }
    let sum = v.iter().fold(0.0_f64, |acc, s| acc + (s.abs() / scale).powi(exp));
    Ok(scale * sum.powf(1.0 / f64::from(p)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cv(values: &[(f64, f64)]) -> Vector {
        values.iter().map(|&(re, im)| Scalar::new(re, im)).collect()
    }

    #[test]
    fn dot_product_conjugates_first_argument() {
        let a = cv(&[(1.0, 2.0), (3.0, 4.0)]);
        let b = cv(&[(0.0, 0.0), (0.0, 6.0)]);
        // conj(3+4i) * 6i = (3-4i) * 6i = 24 + 18i
        assert_eq!(dot_product(&a, &b).unwrap(), Scalar::new(24.0, 18.0));
        // Reversing the arguments conjugates the result.
        assert_eq!(dot_product(&b, &a).unwrap(), Scalar::new(24.0, -18.0));
    }

    #[test]
    fn dot_product_with_self_is_squared_norm() {
        let a = cv(&[(1.0, 1.0), (-2.0, 0.5), (0.0, 3.0)]);
        let d = dot_product(&a, &a).unwrap();
        let n = p_norm(2, &a).unwrap();
        assert_eq!(d.im, 0.0);
        assert!((d.re - n * n).abs() < 1e-12);
    }

    #[test]
    fn dot_product_rejects_length_mismatch() {
        let err = dot_product(&Vector::zeros(2), &Vector::zeros(3)).unwrap_err();
        assert_eq!(
            err,
            LinalgError::DimensionMismatch { op: "dot_product", left: 2, right: 3 }
        );
    }

    #[test]
    fn scalar_mult_does_not_touch_input() {
        let v = Vector::from_reals(&[1.0, -2.0, 3.0]);
        let w = scalar_vector_mult(Scalar::new(0.0, 2.0), &v);
        assert_eq!(v, Vector::from_reals(&[1.0, -2.0, 3.0]));
        assert_eq!(w, cv(&[(0.0, 2.0), (0.0, -4.0), (0.0, 6.0)]));
    }

    #[test]
    fn subtract_and_add_are_elementwise() {
        let a = Vector::from_reals(&[5.0, 7.0]);
        let b = cv(&[(1.0, 1.0), (2.0, -1.0)]);
        assert_eq!(vector_subtract(&a, &b).unwrap(), cv(&[(4.0, -1.0), (5.0, 1.0)]));
        assert_eq!(vector_add(&a, &b).unwrap(), cv(&[(6.0, 1.0), (9.0, -1.0)]));
        assert!(vector_subtract(&a, &Vector::zeros(1)).is_err());
    }

    #[test]
    fn p_norm_orders() {
        let v = cv(&[(3.0, 4.0), (0.0, -12.0)]);
        assert!((p_norm(1, &v).unwrap() - 17.0).abs() < 1e-12);
        assert!((p_norm(2, &v).unwrap() - 13.0).abs() < 1e-12);
        assert_eq!(p_norm(2, &Vector::zeros(4)).unwrap(), 0.0);
        assert_eq!(p_norm(0, &v), Err(LinalgError::InvalidNormOrder { p: 0 }));
    }

    #[test]
    fn p_norm_survives_extreme_magnitudes() {
        let tiny = cv(&[(3e-170, 0.0), (0.0, 4e-170)]);
        assert!((p_norm(2, &tiny).unwrap() / 5e-170 - 1.0).abs() < 1e-12);
        let huge = Vector::from_reals(&[3e200, 4e200]);
        assert!((p_norm(2, &huge).unwrap() / 5e200 - 1.0).abs() < 1e-12);
    }
}
