//! Polynomial fitting.
//!
//! Responsibilities:
//!
//! - fit plain least-squares and ridge-regularized polynomials
//! - sweep ridge strengths (parallel)
//! - map demo modes (fit / overfit / correct) to the degree actually fitted

pub mod demo;
pub mod fitter;

pub use demo::*;
pub use fitter::*;
