//! Fit quality scoring and terminal reporting.

pub mod format;

pub use format::*;

use crate::domain::{Dataset, FitReport, FittedModel};
use crate::error::{CurveError, Result};

/// `(1/n) · Σ (model(x_i) − y_i)²`.
pub fn mean_squared_error(model: &FittedModel, x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(CurveError::config(format!(
            "x/y length mismatch: {} vs {}",
            x.len(),
            y.len()
        )));
    }
    if x.is_empty() {
        return Err(CurveError::config("cannot score a model on an empty dataset"));
    }

    let sse: f64 = residuals(model, x, y).map(|r| r * r).sum();
    Ok(sse / x.len() as f64)
}

/// Residuals `y_i − model(x_i)` in input order.
pub fn residuals<'a>(
    model: &'a FittedModel,
    x: &'a [f64],
    y: &'a [f64],
) -> impl Iterator<Item = f64> + 'a {
    x.iter().zip(y).map(move |(&xi, &yi)| yi - model.evaluate(xi))
}

impl FitReport {
    /// Score `model` against `data`.
    pub fn score(model: FittedModel, data: &Dataset) -> Result<Self> {
        let mse = mean_squared_error(&model, data.x(), data.y())?;
        Ok(Self { model, mse })
    }
}
