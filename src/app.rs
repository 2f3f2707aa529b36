//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - builds samples (explicit, synthetic, or the reference fixture)
//! - runs the fit or the degree selection
//! - prints reports and writes optional exports

use clap::Parser;

use crate::cli::{Command, FitArgs, SampleArgs};
use crate::data::SampleConfig;
use crate::error::AppError;
use crate::fit::{FitOptions, SelectionConfig};
use crate::io::{FitReport, write_fit_json};
use crate::math::Vector;

pub mod pipeline;

use pipeline::FitConfig;

/// Entry point for the `polyfit` binary.
pub fn run() -> Result<(), AppError> {
    // `polyfit` with no arguments behaves like `polyfit demo`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Fit(args) => handle_fit(args),
        Command::Sample(args) => handle_sample(args),
        Command::Demo => handle_demo(),
    }
}

fn handle_fit(args: FitArgs) -> Result<(), AppError> {
    let config = fit_config_from_args(&args);
    let run = pipeline::run_fit(&config)?;

    println!(
        "{}",
        crate::report::format_fit_summary(&run.features, &run.labels, &run.fit)
    );

    if let Some(path) = &args.export {
        write_fit_json(path, &FitReport::new(&run.features, &run.labels, &run.fit))?;
        log::info!("wrote fit report to {}", path.display());
    }

    Ok(())
}

fn handle_sample(args: SampleArgs) -> Result<(), AppError> {
    let (sample_config, selection_config) = sample_configs_from_args(&args);
    let run = pipeline::run_selection(&sample_config, &selection_config)?;

    println!(
        "True model: {}\n",
        crate::report::format_polynomial(&run.sample.truth, 6)
    );
    println!("{}", crate::report::format_selection_summary(&run.selection));

    if let Some(path) = &args.export {
        let report = FitReport::new(&run.sample.features, &run.sample.labels, &run.selection.best);
        write_fit_json(path, &report)?;
        log::info!("wrote fit report to {}", path.display());
    }

    Ok(())
}

fn handle_demo() -> Result<(), AppError> {
    let run = pipeline::run_fit(&pipeline::reference_config())?;
    println!(
        "{}",
        crate::report::format_fit_summary(&run.features, &run.labels, &run.fit)
    );
    Ok(())
}

pub fn fit_config_from_args(args: &FitArgs) -> FitConfig {
    FitConfig {
        features: Vector::new(args.features.clone()),
        labels: Vector::new(args.labels.clone()),
        degree: args.degree,
        options: FitOptions {
            rank_tolerance: args.rank_tol,
        },
    }
}

pub fn sample_configs_from_args(args: &SampleArgs) -> (SampleConfig, SelectionConfig) {
    let sample = SampleConfig {
        count: args.count,
        x_min: args.x_min,
        x_max: args.x_max,
        coefficients: args.coeffs.clone(),
        noise_sigma: args.noise,
        seed: args.seed,
    };
    let selection = SelectionConfig {
        min_degree: args.min_degree,
        max_degree: args.max_degree,
        min_extra_samples: args.min_extra,
        options: FitOptions {
            rank_tolerance: args.rank_tol,
        },
    };
    (sample, selection)
}

/// Rewrite argv so `polyfit` defaults to `polyfit demo`.
///
/// Rules:
/// - `polyfit`                      -> `polyfit demo`
/// - anything else                  -> unchanged
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    if argv.len() <= 1 {
        argv.push("demo".to_string());
    }
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_runs_demo() {
        assert_eq!(rewrite_args(vec!["polyfit".into()]), vec!["polyfit", "demo"]);
        assert_eq!(
            rewrite_args(vec!["polyfit".into(), "--help".into()]),
            vec!["polyfit", "--help"]
        );
    }

    #[test]
    fn fit_args_map_to_config() {
        let cli = crate::cli::Cli::parse_from([
            "polyfit", "fit", "--features", "0,1,2", "--labels", "2,5,8", "-d", "1", "--rank-tol", "1e-8",
        ]);
        let Command::Fit(args) = cli.command else {
            panic!("expected fit subcommand");
        };
        let config = fit_config_from_args(&args);
        assert_eq!(config.degree, 1);
        assert_eq!(config.features, Vector::from_reals(&[0.0, 1.0, 2.0]));
        assert_eq!(config.options.rank_tolerance, 1e-8);
    }
}
