//! Synthetic sample generation from a known polynomial.
//!
//! Features are drawn uniformly from `[x_min, x_max]`; labels are the true
//! polynomial plus Gaussian noise. A seeded `StdRng` makes every run with the
//! same configuration reproducible.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::error::AppError;
use crate::math::{Scalar, Vector};
use crate::models::Polynomial;

#[derive(Debug, Clone, PartialEq)]
pub struct SampleConfig {
    pub count: usize,
    pub x_min: f64,
    pub x_max: f64,
    /// True coefficients, constant term first.
    pub coefficients: Vec<f64>,
    /// Standard deviation of the additive label noise.
    pub noise_sigma: f64,
    pub seed: u64,
}

#[derive(Debug, Clone)]
pub struct SampleData {
    pub features: Vector,
    pub labels: Vector,
    pub truth: Polynomial,
}

pub fn generate_sample(config: &SampleConfig) -> Result<SampleData, AppError> {
    if config.count == 0 {
        return Err(AppError::new(2, "Sample count must be > 0."));
    }
    if !(config.x_min.is_finite() && config.x_max.is_finite() && config.x_max > config.x_min) {
        return Err(AppError::new(2, "Invalid x range for sample generation."));
    }
    if config.coefficients.is_empty() {
        return Err(AppError::new(2, "At least one true coefficient is required."));
    }
    if !(config.noise_sigma.is_finite() && config.noise_sigma >= 0.0) {
        return Err(AppError::new(2, "Noise sigma must be finite and >= 0."));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let normal = Normal::new(0.0, config.noise_sigma)
        .map_err(|e| AppError::new(4, format!("Noise distribution error: {e}")))?;

    let truth = Polynomial::new(Vector::from_reals(&config.coefficients));

    let mut features = Vec::with_capacity(config.count);
    let mut labels = Vec::with_capacity(config.count);
    for _ in 0..config.count {
        let x = Scalar::real(rng.gen_range(config.x_min..=config.x_max));
        let noise = normal.sample(&mut rng);
        features.push(x);
        labels.push(truth.evaluate(x) + Scalar::real(noise));
    }

    Ok(SampleData {
        features: Vector::new(features),
        labels: Vector::new(labels),
        truth,
    })
}
