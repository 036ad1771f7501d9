//! Read/write fitted model JSON files.
//!
//! A model file is the portable representation of a fit:
//! - kind + degree + coefficients
//! - the MSE it was scored with and, for demos, the requested degree
//! - a precomputed fitted grid for quick plotting
//!
//! The schema is defined by `domain::ModelFile`.

use std::f64::consts::TAU;
use std::fs::File;
use std::path::Path;

use chrono::Utc;

use crate::domain::{DemoOutcome, FitReport, ModelFile, ModelGrid};
use crate::error::AppError;
use crate::interp::linspace;

/// Number of points in the exported fitted grid.
pub const GRID_POINTS: usize = 200;

/// Build a model file for a report, with a grid over `[0, 2π]`.
pub fn model_file(report: &FitReport, demo: Option<&DemoOutcome>) -> ModelFile {
    let x = linspace(0.0, TAU, GRID_POINTS);
    let y = report.model.evaluate_many(&x);

    ModelFile {
        tool: "curvekit".to_string(),
        generated_at: Utc::now(),
        demo: demo.map(|d| d.demo),
        requested_degree: demo.map(|d| d.requested_degree),
        model: report.model.clone(),
        mse: report.mse,
        grid: ModelGrid { x, y },
    }
}

/// Write a demo outcome as model JSON.
pub fn write_model_json(path: &Path, outcome: &DemoOutcome) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create model JSON '{}': {e}", path.display())))?;

    let contents = model_file(&outcome.report, Some(outcome));
    serde_json::to_writer_pretty(file, &contents)
        .map_err(|e| AppError::new(2, format!("Failed to write model JSON: {e}")))?;

    Ok(())
}

/// Read a model JSON file.
pub fn read_model_json(path: &Path) -> Result<ModelFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open model JSON '{}': {e}", path.display())))?;
    let contents: ModelFile =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid model JSON: {e}")))?;

    if !contents.model.is_consistent() {
        return Err(AppError::new(
            2,
            format!(
                "Invalid model JSON: degree {} does not match {} coefficients",
                contents.model.degree,
                contents.model.coefficients.len()
            ),
        ));
    }
    if contents.grid.x.len() != contents.grid.y.len() {
        return Err(AppError::new(2, "Invalid model JSON: grid x/y length mismatch"));
    }
    Ok(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FitDemo, FitKind, FittedModel};

    fn temp_path(tag: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("curvekit_{tag}_{}.json", std::process::id()))
    }

    #[test]
    fn model_json_survives_reload() {
        let outcome = DemoOutcome {
            demo: FitDemo::Correct,
            requested_degree: 3,
            report: FitReport {
                model: FittedModel::new(FitKind::Regularized { alpha: 0.5 }, vec![0.1, 0.9, -0.2]),
                mse: 0.0123,
            },
        };
        let path = temp_path("model");
        write_model_json(&path, &outcome).unwrap();

        let loaded = read_model_json(&path).unwrap();
        assert_eq!(loaded.tool, "curvekit");
        assert_eq!(loaded.demo, Some(FitDemo::Correct));
        assert_eq!(loaded.requested_degree, Some(3));
        assert_eq!(loaded.model, outcome.report.model);
        assert_eq!(loaded.grid.x.len(), GRID_POINTS);
        assert_eq!(loaded.grid.y[0], 0.1);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"kind\": \"regularized\""));
        assert!(raw.contains("\"alpha\": 0.5"));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn inconsistent_model_is_rejected() {
        let report = FitReport {
            model: FittedModel::new(FitKind::Plain, vec![1.0, 2.0]),
            mse: 0.0,
        };
        let mut contents = model_file(&report, None);
        contents.model.degree = 4;

        let path = temp_path("bad_model");
        std::fs::write(&path, serde_json::to_string(&contents).unwrap()).unwrap();
        let err = read_model_json(&path).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        std::fs::remove_file(&path).ok();
    }
}
