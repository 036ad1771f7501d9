//! Interpolation: single-segment cubic Hermite evaluation and the parameter
//! domains it is evaluated on.

pub mod hermite;
pub mod params;

pub use hermite::*;
pub use params::*;
