//! Mathematical utilities: basis functions and dense linear solves.

pub mod basis;
pub mod ols;

pub use basis::*;
pub use ols::*;
