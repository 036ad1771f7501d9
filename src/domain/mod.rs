//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - interpolation inputs/outputs (`HermiteSegment`, `ParamDomain`, `EvaluatedPoint`)
//! - fitting inputs/outputs (`Dataset`, `FitKind`, `FittedModel`, `FitReport`)
//! - run configuration (`HermiteConfig`, `PolyConfig`) and saved files (`ModelFile`)

pub mod types;

pub use types::*;
