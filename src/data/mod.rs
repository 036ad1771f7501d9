//! Synthetic data generation for fitting demonstrations.

pub mod sample;

pub use sample::*;
