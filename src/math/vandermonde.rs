//! Vandermonde design matrix for polynomial least squares.

use crate::error::LinalgError;
use crate::math::matrix::Matrix;
use crate::math::vector::Vector;

/// Build the degree-`degree` Vandermonde matrix of `samples`.
///
/// The result has `degree + 1` columns; column `i` holds every sample raised
/// to the power `i`, so column 0 is all ones and row count equals
/// `samples.len()`. No column scaling is applied: high degrees or widely spread
/// samples give an ill-conditioned matrix.
pub fn vandermonde(degree: usize, samples: &Vector) -> Result<Matrix, LinalgError> {
    if degree == 0 {
        return Err(LinalgError::InvalidDegree { degree });
    }
    if samples.is_empty() {
        return Err(LinalgError::InsufficientSamples {
            samples: 0,
            required: degree.saturating_add(1),
        });
    }
    let max_exp = u32::try_from(degree).map_err(|_| LinalgError::InvalidDegree { degree })?;

    let columns = (0..=max_exp)
        .map(|exp| samples.iter().map(|s| s.powi(exp)).collect())
        .collect();
    Matrix::from_columns(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::scalar::Scalar;

    #[test]
    fn shape_and_constant_column() {
        let x = Vector::from_reals(&[0.0, -0.69583, 1.0, 2.0, 3.5]);
        let a = vandermonde(3, &x).unwrap();
        assert_eq!(a.ncols(), 4);
        assert_eq!(a.nrows(), 5);
        assert!(a[0].iter().all(|&s| s == Scalar::ONE));
    }

    #[test]
    fn columns_are_successive_powers() {
        let x = Vector::from_reals(&[2.0, -3.0]);
        let a = vandermonde(3, &x).unwrap();
        assert_eq!(a[1], Vector::from_reals(&[2.0, -3.0]));
        assert_eq!(a[2], Vector::from_reals(&[4.0, 9.0]));
        assert_eq!(a[3], Vector::from_reals(&[8.0, -27.0]));
    }

    #[test]
    fn complex_samples() {
        let x = Vector::new(vec![Scalar::new(0.0, 1.0)]);
        let a = vandermonde(2, &x).unwrap();
        assert_eq!(a.at(0, 1), Scalar::new(0.0, 1.0));
        assert_eq!(a.at(0, 2), Scalar::real(-1.0));
    }

    #[test]
    fn rejects_zero_degree_and_empty_samples() {
        let x = Vector::from_reals(&[1.0]);
        assert_eq!(vandermonde(0, &x), Err(LinalgError::InvalidDegree { degree: 0 }));
        assert_eq!(
            vandermonde(2, &Vector::zeros(0)),
            Err(LinalgError::InsufficientSamples { samples: 0, required: 3 })
        );
        assert_eq!(
            vandermonde(usize::MAX, &Vector::zeros(0)),
            Err(LinalgError::InsufficientSamples { samples: 0, required: usize::MAX })
        );
    }
}
