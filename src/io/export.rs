//! Read/write fit report JSON files.
//!
//! A fit report is the portable representation of one fit:
//! - the input samples
//! - the polynomial coefficients (constant term first)
//! - residuals and quality diagnostics

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::fit::{FitQuality, PolyFit};
use crate::math::Vector;
use crate::models::Polynomial;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitReport {
    pub tool: String,
    pub degree: usize,
    pub features: Vector,
    pub labels: Vector,
    pub polynomial: Polynomial,
    pub residuals: Vector,
    pub quality: FitQuality,
}

impl FitReport {
    pub fn new(features: &Vector, labels: &Vector, fit: &PolyFit) -> Self {
        Self {
            tool: "polyfit".to_string(),
            degree: fit.degree(),
            features: features.clone(),
            labels: labels.clone(),
            polynomial: fit.polynomial.clone(),
            residuals: fit.residuals.clone(),
            quality: fit.quality.clone(),
        }
    }
}

/// Write a fit report as pretty-printed JSON.
pub fn write_fit_json(path: &Path, report: &FitReport) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create fit JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, report)
        .map_err(|e| AppError::new(2, format!("Failed to write fit JSON: {e}")))?;

    Ok(())
}

/// Read a fit report JSON file.
pub fn read_fit_json(path: &Path) -> Result<FitReport, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open fit JSON '{}': {e}", path.display())))?;
    let report: FitReport =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid fit JSON: {e}")))?;
    Ok(report)
}
