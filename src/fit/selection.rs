//! Degree selection using BIC with guardrails.
//!
//! Every degree in `min_degree..=max_degree` is fitted (in parallel) and
//! scored with `BIC = n · ln(SSE/n) + k · ln(n)`, `k = degree + 1`.
//!
//! Selection rules:
//! 1. Skip underdetermined degrees: require `n >= k + min_extra_samples`
//!    (the range is clamped first, so a huge `max_degree` costs nothing)
//! 2. Skip degrees whose design matrix is numerically rank-deficient
//! 3. Choose the minimum BIC, but prefer the lowest degree within 2 BIC points

use log::debug;
use rayon::prelude::*;

use crate::error::LinalgError;
use crate::fit::polyfit::{FitOptions, PolyFit, fit_polynomial};
use crate::math::Vector;

/// Preference margin for simpler models.
const BIC_MARGIN: f64 = 2.0;

/// Candidate range and guardrails for degree selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionConfig {
    pub min_degree: usize,
    pub max_degree: usize,
    /// Observations required beyond the coefficient count.
    pub min_extra_samples: usize,
    pub options: FitOptions,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            min_degree: 1,
            max_degree: 6,
            min_extra_samples: 2,
            options: FitOptions::default(),
        }
    }
}

/// Output of fitting + selection.
#[derive(Debug, Clone)]
pub struct DegreeSelection {
    pub best: PolyFit,
    /// Fits for all surviving degrees, lowest degree first.
    pub fits: Vec<PolyFit>,
    /// Degrees that were skipped and why. The underdetermined tail of the
    /// range is a single entry keyed by its lowest degree.
    pub skipped: Vec<(usize, String)>,
}

/// Fit each candidate degree and select the best by BIC.
pub fn select_degree(
    features: &Vector,
    labels: &Vector,
    config: &SelectionConfig,
) -> Result<DegreeSelection, LinalgError> {
    if config.min_degree == 0 || config.max_degree < config.min_degree {
        return Err(LinalgError::InvalidDegree {
            degree: config.min_degree.min(config.max_degree),
        });
    }
    if features.len() != labels.len() {
        return Err(LinalgError::DimensionMismatch {
            op: "select_degree (features vs labels)",
            left: features.len(),
            right: labels.len(),
        });
    }

    let n = features.len();
    // Highest degree with `n >= degree + 1 + min_extra_samples`.
    let supported = n.saturating_sub(config.min_extra_samples.saturating_add(1));
    let candidates: Vec<usize> = (config.min_degree..=config.max_degree.min(supported)).collect();

    let mut skipped = Vec::new();
    if config.max_degree > supported {
        // Every degree above `supported` is underdetermined; record the tail once.
        let first = config.min_degree.max(supported + 1);
        skipped.push((
            first,
            format!(
                "Underdetermined: n={n} supports degree <= {supported} (degrees {first}..={})",
                config.max_degree
            ),
        ));
    }

    let outcomes: Vec<(usize, Result<PolyFit, LinalgError>)> = candidates
        .par_iter()
        .map(|&degree| (degree, fit_polynomial(features, labels, degree, &config.options)))
        .collect();

    let mut fits = Vec::new();
    let mut first_rank_error = None;
    for (degree, outcome) in outcomes {
        match outcome {
            Ok(fit) => fits.push(fit),
            Err(err @ (LinalgError::RankDeficient { .. } | LinalgError::DivisionByZero)) => {
                debug!("skipping degree {degree}: {err}");
                skipped.push((degree, err.to_string()));
                first_rank_error.get_or_insert(err);
            }
            Err(err) => return Err(err),
        }
    }

    if fits.is_empty() {
        return Err(first_rank_error.unwrap_or(LinalgError::InsufficientSamples {
            samples: n,
            required: config
                .min_degree
                .saturating_add(1)
                .saturating_add(config.min_extra_samples),
        }));
    }

    let best = select_by_bic(&fits);
    debug!(
        "selected degree {} (bic {:.3}) from {} candidates",
        best.degree(),
        best.quality.bic,
        fits.len()
    );

    Ok(DegreeSelection {
        best,
        fits,
        skipped,
    })
}

fn select_by_bic(fits: &[PolyFit]) -> PolyFit {
    let best_bic = fits
        .iter()
        .map(|f| f.quality.bic)
        .fold(f64::INFINITY, f64::min);

    // `fits` is ordered by increasing degree.
    fits.iter()
        .find(|f| f.quality.bic <= best_bic + BIC_MARGIN)
        .unwrap_or(&fits[0])
        .clone()
}
