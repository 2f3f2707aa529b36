//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized

use crate::fit::{DegreeSelection, PolyFit};
use crate::math::{Scalar, Vector};
use crate::models::Polynomial;

/// Render `p(x) = a + bx + cx^2 + …` with `precision` decimals per coefficient.
pub fn format_polynomial(p: &Polynomial, precision: usize) -> String {
    let terms: Vec<String> = p
        .coefficients()
        .iter()
        .enumerate()
        .map(|(i, c)| match i {
            0 => format!("{c:.precision$}"),
            1 => format!("{c:.precision$}x"),
            _ => format!("{c:.precision$}x^{i}"),
        })
        .collect();
    format!("p(x) = {}", terms.join(" + "))
}

/// Summary of a single fit: polynomial, diagnostics and the residual table.
pub fn format_fit_summary(features: &Vector, labels: &Vector, fit: &PolyFit) -> String {
    let mut out = String::new();

    out.push_str("=== polyfit - least squares via modified Gram-Schmidt QR ===\n");
    out.push_str(&format!(
        "Samples: n={} | degree={}\n",
        fit.quality.n,
        fit.degree()
    ));
    out.push_str(&format!("{}\n", format_polynomial(&fit.polynomial, 6)));
    out.push_str(&format!(
        "SSE={:.6e} RMSE={:.6e} BIC={:.3}\n\n",
        fit.quality.sse, fit.quality.rmse, fit.quality.bic
    ));
    out.push_str(&format_residual_table(features, labels, fit));

    out
}

/// Per-degree diagnostics for a selection run, marking the chosen degree.
pub fn format_selection_summary(selection: &DegreeSelection) -> String {
    let mut out = String::new();

    out.push_str("Degree diagnostics:\n");
    for fit in &selection.fits {
        let chosen = if fit.degree() == selection.best.degree() { "*" } else { " " };
        out.push_str(&format!(
            "{chosen} degree {:<3} SSE={:.6e} RMSE={:.6e} BIC={:.3}\n",
            fit.degree(),
            fit.quality.sse,
            fit.quality.rmse,
            fit.quality.bic
        ));
    }
    for (degree, reason) in &selection.skipped {
        out.push_str(&format!("  (skipped degree {degree}) {reason}\n"));
    }

    out.push_str("\nChosen model:\n");
    out.push_str(&format!("- {}\n", format_polynomial(&selection.best.polynomial, 6)));

    out
}

fn format_residual_table(features: &Vector, labels: &Vector, fit: &PolyFit) -> String {
    let mut out = String::new();
    out.push_str(format!("{:>24} {:>24} {:>24} {:>24}", "x", "y_obs", "y_fit", "residual").trim_end());
    out.push('\n');
    out.push_str(format!("{:-<24} {:-<24} {:-<24} {:-<24}", "", "", "", "").trim_end());
    out.push('\n');

    for ((x, y), r) in features.iter().zip(labels.iter()).zip(fit.residuals.iter()) {
        let y_fit = fit.polynomial.evaluate(*x);
        out.push_str(
            format!(
                "{:>24} {:>24} {:>24} {:>24}",
                fmt_scalar(*x),
                fmt_scalar(*y),
                fmt_scalar(y_fit),
                fmt_scalar(*r)
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

fn fmt_scalar(s: Scalar) -> String {
    format!("{s:.6}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::{FitOptions, fit_polynomial};

    #[test]
    fn polynomial_string_orders_terms_by_power() {
        let p = Polynomial::new(Vector::from_reals(&[1.0, 2.5, -3.0, 0.25]));
        assert_eq!(
            format_polynomial(&p, 2),
            "p(x) = 1.00 + 2.50x + -3.00x^2 + 0.25x^3"
        );
    }

    #[test]
    fn complex_coefficients_are_parenthesized() {
        let p = Polynomial::new(Vector::new(vec![Scalar::new(1.0, -1.0), Scalar::real(2.0)]));
        assert_eq!(format_polynomial(&p, 1), "p(x) = (1.0-1.0i) + 2.0x");
    }

    #[test]
    fn fit_summary_lists_every_sample() {
        let features = Vector::from_reals(&[0.0, 1.0, 2.0]);
        let labels = Vector::from_reals(&[2.0, 5.0, 8.0]);
        let fit = fit_polynomial(&features, &labels, 1, &FitOptions::default()).unwrap();

        let text = format_fit_summary(&features, &labels, &fit);
        assert!(text.contains("degree=1"));
        assert!(text.contains("p(x) = 2.000000 + 3.000000x"));
        // header + rule + one row per sample
        let table_rows = text.lines().skip_while(|l| !l.trim_start().starts_with('x')).count();
        assert_eq!(table_rows, 2 + 3);
    }
}
