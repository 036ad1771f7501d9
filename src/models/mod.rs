//! Fitted polynomial model evaluation.
//!
//! Models are plain coefficient vectors so fitting, scoring, plotting and export
//! can share them without conversions.

pub mod model;

pub use model::*;
