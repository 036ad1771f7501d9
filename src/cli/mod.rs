//! Command-line parsing for `curvekit`.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the interpolation/fitting code. Flag values are only collected
//! here; validating them (e.g. "exactly one t mode") is the library's job.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::FitDemo;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "curvekit",
    version,
    about = "Cubic Hermite interpolation and polynomial fitting demos"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate a cubic Hermite segment (two values, two tangents) on a set of t values.
    Hermite(HermiteArgs),
    /// Fit, overfit, or correct an overfit polynomial on noisy samples of sin(x).
    Poly(PolyArgs),
    /// Plot a previously exported model JSON.
    Plot(PlotArgs),
}

/// Options for Hermite interpolation.
#[derive(Debug, Parser, Clone)]
pub struct HermiteArgs {
    /// Value at t = 0.
    #[arg(long, allow_negative_numbers = true)]
    pub f0: f64,

    /// Value at t = 1.
    #[arg(long, allow_negative_numbers = true)]
    pub f1: f64,

    /// Tangent (slope) at t = 0.
    #[arg(long, allow_negative_numbers = true)]
    pub fd0: f64,

    /// Tangent (slope) at t = 1.
    #[arg(long, allow_negative_numbers = true)]
    pub fd1: f64,

    /// A single t value.
    #[arg(long, allow_negative_numbers = true)]
    pub t: Option<f64>,

    /// A t range as `start,end,step` (end inclusive).
    #[arg(long, value_name = "START,END,STEP", allow_hyphen_values = true)]
    pub trange: Option<String>,

    /// A file with one t value per line (non-numeric lines are ignored).
    #[arg(long, value_name = "PATH")]
    pub tfile: Option<PathBuf>,

    /// Write tab-separated `t f` lines here instead of printing to the console.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Options for the polynomial fitting demos.
#[derive(Debug, Parser, Clone)]
pub struct PolyArgs {
    /// Number of data points.
    #[arg(short = 'n', long, default_value_t = 10)]
    pub npoints: usize,

    /// Noise standard deviation.
    #[arg(long, env = "CURVEKIT_NOISE", default_value_t = 0.1)]
    pub noise: f64,

    /// Random seed for data generation.
    #[arg(long, env = "CURVEKIT_SEED", default_value_t = 12)]
    pub seed: u64,

    /// Requested polynomial degree (the demo may adjust it).
    #[arg(short = 'd', long, default_value_t = 3, allow_negative_numbers = true)]
    pub degree: i64,

    /// Which demonstration to run.
    #[arg(long, value_enum, default_value_t = FitDemo::Fit)]
    pub demo: FitDemo,

    /// Regularization strength for `--demo correct`.
    #[arg(long, default_value_t = 1.0)]
    pub alpha: f64,

    /// Also sweep these ridge strengths at the fitted degree (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub alphas: Vec<f64>,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Export the fitted model (coefficients + fitted grid) to JSON.
    #[arg(long = "export-model", value_name = "JSON")]
    pub export_model: Option<PathBuf>,
}

/// Options for plotting a saved model.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Model JSON file produced by `curvekit poly --export-model`.
    #[arg(long, value_name = "JSON")]
    pub model: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}
