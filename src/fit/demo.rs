//! Fitting demonstrations: a reasonable fit, a deliberate overfit, and its
//! ridge correction.
//!
//! Each demo turns the caller's requested degree into the degree actually fitted:
//!
//! - `fit`:     `min(requested, max(1, n / 2))`, plain least squares
//! - `overfit`: `max(requested, n − 1)`, plain least squares
//! - `correct`: `max(requested, n − 1)`, ridge with the given `alpha`
//!
//! `overfit` and `correct` may raise the degree above what was requested so the
//! model has enough freedom to pass through every point. The adjustment is
//! logged and reported next to the requested degree.

use log::info;

use crate::domain::{Dataset, DemoOutcome, FitDemo, FitKind, FitReport};
use crate::error::Result;
use crate::fit::fitter::fit_dataset;

impl FitDemo {
    /// Degree actually fitted for a requested degree on `n` points.
    pub fn effective_degree(self, requested: i64, n: usize) -> i64 {
        let n = i64::try_from(n).unwrap_or(i64::MAX);
        match self {
            FitDemo::Fit => requested.min((n / 2).max(1)),
            FitDemo::Overfit | FitDemo::Correct => requested.max(n - 1),
        }
    }

    pub fn fit_kind(self, alpha: f64) -> FitKind {
        match self {
            FitDemo::Fit | FitDemo::Overfit => FitKind::Plain,
            FitDemo::Correct => FitKind::Regularized { alpha },
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            FitDemo::Fit => "fit",
            FitDemo::Overfit => "overfit",
            FitDemo::Correct => "correct",
        }
    }
}

/// Run one demo on `data` and score the model against the same data.
pub fn run_demo(data: &Dataset, demo: FitDemo, requested_degree: i64, alpha: f64) -> Result<DemoOutcome> {
    let degree = demo.effective_degree(requested_degree, data.len());
    if degree != requested_degree {
        info!(
            "{} demo: requested degree {requested_degree}, fitting degree {degree} (n={})",
            demo.display_name(),
            data.len()
        );
    }

    let model = fit_dataset(data, degree, demo.fit_kind(alpha))?;
    let report = FitReport::score(model, data)?;

    Ok(DemoOutcome {
        demo,
        requested_degree,
        report,
    })
}
