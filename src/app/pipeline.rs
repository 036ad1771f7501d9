//! Shared run logic used by the CLI handlers.
//!
//! Keeping this in one place keeps the two workflows explicit:
//! - interpolation: domain -> points -> Hermite values
//! - fitting: dataset -> demo fit -> score (-> optional ridge sweep)
//!
//! The handlers in `app` then only deal with presentation.

use log::info;

use crate::data::generate_dataset;
use crate::domain::{Dataset, DemoOutcome, EvaluatedPoint, FittedModel, HermiteConfig, PolyConfig};
use crate::error::AppError;
use crate::fit::{ridge_path, run_demo};
use crate::interp::generate_parameter_domain;

/// All computed outputs of a single `curvekit poly` run.
#[derive(Debug, Clone)]
pub struct PolyRun {
    pub dataset: Dataset,
    pub outcome: DemoOutcome,
    /// One model per `config.alphas` entry, at the demo's fitted degree.
    pub ridge_path: Vec<FittedModel>,
}

/// Evaluate the configured Hermite segment on its parameter domain.
pub fn run_hermite(config: &HermiteConfig) -> Result<Vec<EvaluatedPoint>, AppError> {
    let ts = generate_parameter_domain(&config.domain)?;
    info!("evaluating hermite segment on {} points", ts.len());
    Ok(config.segment.evaluate_all(&ts))
}

/// Generate the dataset, run the demo, and optionally sweep ridge strengths.
pub fn run_poly(config: &PolyConfig) -> Result<PolyRun, AppError> {
    let dataset = generate_dataset(config.npoints, config.noise_std, config.seed)?;
    let outcome = run_demo(&dataset, config.demo, config.requested_degree, config.alpha)?;

    let ridge_path = if config.alphas.is_empty() {
        Vec::new()
    } else {
        let degree = outcome.report.model.degree as i64;
        ridge_path(&dataset, degree, &config.alphas)?
    };

    Ok(PolyRun {
        dataset,
        outcome,
        ridge_path,
    })
}
