//! Command-line parsing for the polynomial fitter.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! fitting/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::math::Scalar;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "polyfit", version, about = "Least-squares polynomial fit via modified Gram-Schmidt QR")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit a polynomial of a given degree to explicit samples.
    Fit(FitArgs),
    /// Generate noisy samples from a known polynomial and select a degree by BIC.
    Sample(SampleArgs),
    /// Fit the built-in reference samples with a cubic.
    Demo,
}

/// Options for fitting explicit samples.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// Comma-separated features, e.g. `0,-0.69583,1,2` or `1+2i,3`.
    #[arg(long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
    pub features: Vec<Scalar>,

    /// Comma-separated labels (same count as features).
    #[arg(long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
    pub labels: Vec<Scalar>,

    /// Polynomial degree (the fit has degree + 1 coefficients).
    #[arg(short = 'd', long, default_value_t = 3)]
    pub degree: usize,

    /// Relative norm below which a Gram-Schmidt column counts as dependent.
    #[arg(long, default_value_t = crate::math::DEFAULT_RANK_TOLERANCE)]
    pub rank_tol: f64,

    /// Export the fit report to JSON.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Options for synthetic sample generation and degree selection.
#[derive(Debug, Parser, Clone)]
pub struct SampleArgs {
    /// True polynomial coefficients, constant term first.
    #[arg(long, value_delimiter = ',', default_value = "1,-2,0.5", allow_hyphen_values = true)]
    pub coeffs: Vec<f64>,

    /// Number of samples to generate.
    #[arg(short = 'n', long, default_value_t = 40)]
    pub count: usize,

    /// Lower bound of the feature range.
    #[arg(long, default_value_t = -2.0, allow_hyphen_values = true)]
    pub x_min: f64,

    /// Upper bound of the feature range.
    #[arg(long, default_value_t = 2.0, allow_hyphen_values = true)]
    pub x_max: f64,

    /// Standard deviation of the label noise.
    #[arg(long, default_value_t = 0.1)]
    pub noise: f64,

    /// Random seed for sample generation.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Lowest candidate degree.
    #[arg(long, default_value_t = 1)]
    pub min_degree: usize,

    /// Highest candidate degree.
    #[arg(long, default_value_t = 6)]
    pub max_degree: usize,

    /// Observations required beyond the coefficient count.
    #[arg(long, default_value_t = 2)]
    pub min_extra: usize,

    /// Relative norm below which a Gram-Schmidt column counts as dependent.
    #[arg(long, default_value_t = crate::math::DEFAULT_RANK_TOLERANCE)]
    pub rank_tol: f64,

    /// Export the selected fit report to JSON.
    #[arg(long)]
    pub export: Option<PathBuf>,
}
