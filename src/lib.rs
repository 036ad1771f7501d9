//! `curvekit` library crate.
//!
//! Two independent numerical paths:
//!
//! - interpolation: parameter domains (`interp::params`) evaluated on a single
//!   cubic Hermite segment (`interp::hermite`)
//! - fitting: synthetic noisy data (`data`) fitted with plain or ridge
//!   polynomial least squares (`fit`) and scored by MSE (`report`)
//!
//! The binary (`curvekit`) is a thin wrapper around this library so that
//! core logic is testable without spawning processes.

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod interp;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;

pub use data::generate_dataset;
pub use error::{CurveError, Result};
pub use fit::fit_polynomial;
pub use interp::{evaluate_hermite, generate_parameter_domain};
pub use models::evaluate_model;
pub use report::mean_squared_error;
