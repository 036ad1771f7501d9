//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the interpolation/fitting code stays clean and testable
//! - output changes are localized (important for snapshot tests)

use crate::domain::{Dataset, DemoOutcome, EvaluatedPoint, FitKind, FittedModel, PolyConfig};
use crate::report::mean_squared_error;

/// Console listing of Hermite results: `t = <t>,\tf = <f>` rounded to 6 decimals.
pub fn format_hermite_points(points: &[EvaluatedPoint]) -> String {
    let mut out = String::new();
    for p in points {
        out.push_str(&format!("t = {:?},\tf = {:?}\n", round6(p.t), round6(p.f)));
    }
    out
}

/// Summary of a fitting demo (dataset, degree, coefficients, MSE).
pub fn format_demo_summary(outcome: &DemoOutcome, config: &PolyConfig) -> String {
    let model = &outcome.report.model;
    let mut out = String::new();

    out.push_str("=== curvekit - polynomial fit demo ===\n");
    out.push_str(&format!(
        "Demo: {} ({})\n",
        outcome.demo.display_name(),
        fit_kind_label(model.kind)
    ));
    out.push_str(&format!(
        "Data: n={} | noise={} | seed={}\n",
        config.npoints, config.noise_std, config.seed
    ));
    out.push_str(&format!(
        "Degree: requested={} | fitted={}\n",
        outcome.requested_degree, model.degree
    ));
    out.push_str(&format!(
        "Coefficients (x^0..x^{}): {}\n",
        model.degree,
        fmt_vec(&model.coefficients)
    ));
    out.push_str(&format!("MSE: {:.4}\n", outcome.report.mse));

    out
}

/// Table of ridge strengths against training MSE and coefficient norm.
pub fn format_ridge_path(models: &[FittedModel], data: &Dataset) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:>12} {:>12} {:>14}\n", "alpha", "mse", "coef_norm"));
    out.push_str(&format!("{:-<12} {:-<12} {:-<14}\n", "", "", ""));
    for model in models {
        let alpha = model.kind.regularization_strength().unwrap_or(0.0);
        let mse = mean_squared_error(model, data.x(), data.y())
            .map(|v| format!("{v:.6}"))
            .unwrap_or_else(|_| "-".to_string());
        out.push_str(&format!(
            "{:>12} {:>12} {:>14.6}\n",
            format!("{alpha}"),
            mse,
            model.coefficient_norm()
        ));
    }
    out
}

fn fit_kind_label(kind: FitKind) -> String {
    match kind {
        FitKind::Plain => "plain least squares".to_string(),
        FitKind::Regularized { alpha } => format!("ridge, alpha={alpha}"),
    }
}

fn fmt_vec(v: &[f64]) -> String {
    let parts: Vec<String> = v.iter().map(|x| format!("{x:.6}")).collect();
    format!("[{}]", parts.join(", "))
}

fn round6(v: f64) -> f64 {
    (v * 1e6).round() / 1e6
}
