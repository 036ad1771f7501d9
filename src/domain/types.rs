//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory while interpolating and fitting
//! - exported to JSON / tab-separated text
//! - reloaded later for plotting

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{CurveError, Result};

/// A single cubic Hermite segment: two endpoint values and two endpoint tangents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HermiteSegment {
    pub f0: f64,
    pub f1: f64,
    pub fd0: f64,
    pub fd1: f64,
}

/// A parameter sample paired with its interpolated or fitted value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluatedPoint {
    pub t: f64,
    pub f: f64,
}

/// How the evaluation points of a Hermite run are produced.
///
/// Exactly one mode exists per value, so "no mode" and "two modes" cannot be
/// represented here. Those cases are rejected earlier, when a
/// `DomainSelection` is resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamDomain {
    /// One literal value.
    Single(f64),
    /// `start, start + step, ...` up to and including `end`.
    Range { start: f64, end: f64, step: f64 },
    /// Values in source order.
    List(Vec<f64>),
}

/// Sampled `(x, y)` pairs used for polynomial fitting.
///
/// `x` and `y` always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Dataset {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(CurveError::config(format!(
                "dataset x/y length mismatch: {} vs {}",
                x.len(),
                y.len()
            )));
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// Which least-squares problem produced (or should produce) a model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FitKind {
    /// Ordinary least squares.
    Plain,
    /// Ridge: `(XᵗX + αI) c = Xᵗy`, no implicit intercept.
    Regularized { alpha: f64 },
}

impl FitKind {
    pub fn display_name(self) -> &'static str {
        match self {
            FitKind::Plain => "plain",
            FitKind::Regularized { .. } => "regularized",
        }
    }

    pub fn regularization_strength(self) -> Option<f64> {
        match self {
            FitKind::Plain => None,
            FitKind::Regularized { alpha } => Some(alpha),
        }
    }
}

/// A fitted polynomial.
///
/// `coefficients[k]` multiplies `x^k`, and `coefficients.len() == degree + 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedModel {
    pub degree: usize,
    pub coefficients: Vec<f64>,
    pub kind: FitKind,
}

/// A model together with its mean squared error on the data it was scored against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitReport {
    pub model: FittedModel,
    pub mse: f64,
}

/// Fitting demonstration to run on a generated dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FitDemo {
    /// Conservative degree, plain least squares.
    Fit,
    /// Enough degrees of freedom to pass through every point.
    Overfit,
    /// Same high degree as `overfit`, corrected with ridge regularization.
    Correct,
}

/// Result of a fitting demonstration.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoOutcome {
    pub demo: FitDemo,
    pub requested_degree: i64,
    pub report: FitReport,
}

/// A Hermite run's configuration as understood by the pipeline.
#[derive(Debug, Clone)]
pub struct HermiteConfig {
    pub segment: HermiteSegment,
    pub domain: ParamDomain,
    pub output: Option<PathBuf>,
}

/// A polynomial demo run's configuration.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct PolyConfig {
    pub npoints: usize,
    pub noise_std: f64,
    pub seed: u64,
    pub requested_degree: i64,
    pub demo: FitDemo,
    pub alpha: f64,
    /// Extra ridge strengths to sweep at the effective degree.
    pub alphas: Vec<f64>,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_model: Option<PathBuf>,
}

/// A saved model file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub demo: Option<FitDemo>,
    pub requested_degree: Option<i64>,
    pub model: FittedModel,
    pub mse: f64,
    pub grid: ModelGrid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelGrid {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}
