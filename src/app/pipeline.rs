//! Shared fit pipeline logic used by every subcommand.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! samples -> fit (or degree selection) -> diagnostics
//!
//! The front end then only deals with presentation.

use log::info;

use crate::data::{SampleConfig, SampleData, generate_sample};
use crate::error::AppError;
use crate::fit::{
    DegreeSelection, FitOptions, PolyFit, SelectionConfig, fit_polynomial, select_degree,
};
use crate::math::Vector;

/// Reference samples from the original sample run.
const REFERENCE_FEATURES: [f64; 4] = [0.0, -0.69583, 1.0, 2.0];
const REFERENCE_LABELS: [f64; 4] = [1.0, 0.0, 10.0, 49.0];
const REFERENCE_DEGREE: usize = 3;

/// A single fixed-degree fit as understood by the pipeline.
#[derive(Debug, Clone)]
pub struct FitConfig {
    pub features: Vector,
    pub labels: Vector,
    pub degree: usize,
    pub options: FitOptions,
}

/// All computed outputs of a single fit run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub features: Vector,
    pub labels: Vector,
    pub fit: PolyFit,
}

/// All computed outputs of a sample + selection run.
#[derive(Debug, Clone)]
pub struct SelectionOutput {
    pub sample: SampleData,
    pub selection: DegreeSelection,
}

/// The cubic through the four reference samples.
pub fn reference_config() -> FitConfig {
    FitConfig {
        features: Vector::from_reals(&REFERENCE_FEATURES),
        labels: Vector::from_reals(&REFERENCE_LABELS),
        degree: REFERENCE_DEGREE,
        options: FitOptions::default(),
    }
}

/// Execute a fixed-degree fit.
pub fn run_fit(config: &FitConfig) -> Result<RunOutput, AppError> {
    info!(
        "fitting degree {} to {} samples",
        config.degree,
        config.features.len()
    );
    check_options(&config.options)?;
    let fit = fit_polynomial(&config.features, &config.labels, config.degree, &config.options)?;

    Ok(RunOutput {
        features: config.features.clone(),
        labels: config.labels.clone(),
        fit,
    })
}

/// Generate a synthetic sample and select its degree by BIC.
pub fn run_selection(
    sample_config: &SampleConfig,
    selection_config: &SelectionConfig,
) -> Result<SelectionOutput, AppError> {
    check_options(&selection_config.options)?;
    let sample = generate_sample(sample_config)?;
    info!(
        "generated {} samples (seed {})",
        sample.features.len(),
        sample_config.seed
    );
    let selection = select_degree(&sample.features, &sample.labels, selection_config)?;

    Ok(SelectionOutput { sample, selection })
}

/// Rank detection needs a finite, non-negative tolerance.
fn check_options(options: &FitOptions) -> Result<(), AppError> {
    let tol = options.rank_tolerance;
    if !tol.is_finite() || tol < 0.0 {
        return Err(AppError::new(
            2,
            format!("Invalid rank tolerance {tol}: expected a finite value >= 0"),
        ));
    }
    Ok(())
}
