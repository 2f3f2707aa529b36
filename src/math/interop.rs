//! Conversions to nalgebra's complex dense types.
//!
//! Test-only: nalgebra's SVD solver is the reference the QR fit is checked
//! against.

use nalgebra::{Complex, DMatrix, DVector};

use crate::math::matrix::Matrix;
use crate::math::scalar::Scalar;
use crate::math::vector::Vector;

impl From<Complex<f64>> for Scalar {
    fn from(c: Complex<f64>) -> Self {
        Scalar::new(c.re, c.im)
    }
}

impl From<Scalar> for Complex<f64> {
    fn from(s: Scalar) -> Self {
        Complex::new(s.re, s.im)
    }
}

impl From<&Vector> for DVector<Complex<f64>> {
    fn from(v: &Vector) -> Self {
        DVector::from_iterator(v.len(), v.iter().map(|&s| Complex::<f64>::from(s)))
    }
}

impl From<&DVector<Complex<f64>>> for Vector {
    fn from(v: &DVector<Complex<f64>>) -> Self {
        v.iter().map(|&c| Scalar::from(c)).collect()
    }
}

impl From<&Matrix> for DMatrix<Complex<f64>> {
    fn from(m: &Matrix) -> Self {
        DMatrix::from_fn(m.nrows(), m.ncols(), |row, col| Complex::<f64>::from(m.at(row, col)))
    }
}

impl From<&DMatrix<Complex<f64>>> for Matrix {
    fn from(m: &DMatrix<Complex<f64>>) -> Self {
        Matrix::from_fn(m.nrows(), m.ncols(), |row, col| Scalar::from(m[(row, col)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_conversion_preserves_layout() {
        let m = Matrix::from_columns(vec![
            Vector::new(vec![Scalar::new(1.0, 1.0), Scalar::real(2.0), Scalar::real(3.0)]),
            Vector::new(vec![Scalar::real(4.0), Scalar::new(0.0, -5.0), Scalar::real(6.0)]),
        ])
        .unwrap();
        let d: DMatrix<Complex<f64>> = (&m).into();
        assert_eq!(d.shape(), (3, 2));
        assert_eq!(d[(0, 0)], Complex::new(1.0, 1.0));
        assert_eq!(d[(1, 1)], Complex::new(0.0, -5.0));
        assert_eq!(Matrix::from(&d), m);
    }

    #[test]
    fn vector_conversion_round_trips() {
        let v = Vector::new(vec![Scalar::new(0.5, -2.0), Scalar::real(7.0)]);
        let d: DVector<Complex<f64>> = (&v).into();
        assert_eq!(d[0], Complex::new(0.5, -2.0));
        assert_eq!(Vector::from(&d), v);
    }
}
