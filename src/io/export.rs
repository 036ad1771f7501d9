//! Export evaluated points as tab-separated text.
//!
//! One `t\tf` line per point, in evaluation order, full precision.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::EvaluatedPoint;
use crate::error::AppError;

/// Write points to `path` (created or truncated).
pub fn write_points_tsv(path: &Path, points: &[EvaluatedPoint]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create output '{}': {e}", path.display())))?;
    let mut out = BufWriter::new(file);
    write_points(&mut out, points)
        .and_then(|()| out.flush())
        .map_err(|e| AppError::new(2, format!("Failed to write output '{}': {e}", path.display())))
}

/// Write `t\tf` lines to any writer.
pub fn write_points<W: Write>(out: &mut W, points: &[EvaluatedPoint]) -> std::io::Result<()> {
    for p in points {
        writeln!(out, "{:?}\t{:?}", p.t, p.f)?;
    }
    Ok(())
}
