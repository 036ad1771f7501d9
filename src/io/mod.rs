//! Input/output helpers.
//!
//! - parameter files for Hermite runs (`ingest`)
//! - tab-separated `(t, f)` exports (`export`)
//! - fitted model JSON read/write (`curve`)

pub mod curve;
pub mod export;
pub mod ingest;

pub use curve::*;
pub use export::*;
pub use ingest::*;
