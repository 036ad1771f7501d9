//! Polynomial fitting on the monomial (Vandermonde) basis.
//!
//! Given samples `(x_i, y_i)` and a degree `d`, we solve for coefficients `c`
//! (increasing powers, `c.len() == d + 1`) in one of two ways:
//!
//! - **plain**: ordinary least squares, `minimize ‖X c − y‖²`
//! - **regularized**: ridge normal equations, `(XᵗX + αI) c = Xᵗy`
//!
//! The constant term is column 0 of `X`; no separate intercept is added.
//!
//! Numerical notes:
//! - The plain path scales each Vandermonde column to unit norm before the SVD
//!   solve and undoes the scaling afterwards. This helps, but high degrees on
//!   clustered `x` are still ill-conditioned; that is the behavior the ridge
//!   path exists to address.
//! - With `d + 1 > n` the plain system is underdetermined and the minimum-norm
//!   solution is returned (logged as a warning).
//! - The ridge path works on the unscaled matrix so `α` keeps its usual meaning.

use log::{debug, warn};
use nalgebra::{DMatrix, DVector};
use rayon::prelude::*;

use crate::domain::{Dataset, FitKind, FittedModel};
use crate::error::{CurveError, Result};
use crate::math::{solve_least_squares, solve_linear_system, vandermonde};

/// Upper bound on `degree + 1` (the ridge Gram matrix is square in this).
pub const MAX_COEFFICIENTS: usize = 2048;

/// Upper bound on the Vandermonde matrix size, `n × (degree + 1)`.
pub const MAX_DESIGN_CELLS: usize = 50_000_000;

/// Fit a polynomial of `degree` to `(x, y)`.
///
/// Fails with `DegenerateFit` for a negative degree, an empty sample, or a
/// system that cannot be solved.
pub fn fit_polynomial(x: &[f64], y: &[f64], degree: i64, kind: FitKind) -> Result<FittedModel> {
    if x.len() != y.len() {
        return Err(CurveError::config(format!(
            "x/y length mismatch: {} vs {}",
            x.len(),
            y.len()
        )));
    }
    if degree < 0 {
        return Err(CurveError::degenerate(format!(
            "polynomial degree must be >= 0, got {degree}"
        )));
    }
    if x.is_empty() {
        return Err(CurveError::degenerate("no data points to fit"));
    }
    let degree = checked_degree(degree, x.len())?;

    let coefficients = match kind {
        FitKind::Plain => plain_coefficients(x, y, degree)?,
        FitKind::Regularized { alpha } => ridge_coefficients(x, y, degree, alpha)?,
    };
    debug!(
        "{} fit: n={}, degree={degree}, coefficients={coefficients:?}",
        kind.display_name(),
        x.len()
    );

    Ok(FittedModel::new(kind, coefficients))
}

/// Convenience wrapper over [`fit_polynomial`] for a `Dataset`.
pub fn fit_dataset(data: &Dataset, degree: i64, kind: FitKind) -> Result<FittedModel> {
    fit_polynomial(data.x(), data.y(), degree, kind)
}

/// Fit one ridge model per `alpha` (in parallel), keeping the order of `alphas`.
pub fn ridge_path(data: &Dataset, degree: i64, alphas: &[f64]) -> Result<Vec<FittedModel>> {
    alphas
        .par_iter()
        .map(|&alpha| fit_dataset(data, degree, FitKind::Regularized { alpha }))
        .collect()
}

fn checked_degree(degree: i64, n: usize) -> Result<usize> {
    let columns = usize::try_from(degree)
        .ok()
        .and_then(|d| d.checked_add(1))
        .filter(|&c| c <= MAX_COEFFICIENTS)
        .ok_or_else(|| {
            CurveError::degenerate(format!(
                "polynomial degree {degree} is too large (at most {} coefficients)",
                MAX_COEFFICIENTS
            ))
        })?;
    n.checked_mul(columns)
        .filter(|&cells| cells <= MAX_DESIGN_CELLS)
        .ok_or_else(|| {
            CurveError::degenerate(format!(
                "design matrix {n}x{columns} exceeds {MAX_DESIGN_CELLS} entries"
            ))
        })?;
    Ok(columns - 1)
}

fn plain_coefficients(x: &[f64], y: &[f64], degree: usize) -> Result<Vec<f64>> {
    let n = x.len();
    if degree + 1 > n {
        warn!(
            "degree {degree} needs {} coefficients but only {n} points are available; \
             returning the minimum-norm solution",
            degree + 1
        );
    }

    let mut design = vandermonde(x, degree);
    let scale: Vec<f64> = design
        .column_iter()
        .map(|col| {
            let norm = col.norm();
            if norm > 0.0 && norm.is_finite() { norm } else { 1.0 }
        })
        .collect();
    for (j, &s) in scale.iter().enumerate() {
        let mut col = design.column_mut(j);
        col /= s;
    }

    let target = DVector::from_column_slice(y);
    let scaled = solve_least_squares(&design, &target).ok_or_else(|| {
        CurveError::degenerate(format!(
            "least-squares solve failed (n={n}, degree={degree})"
        ))
    })?;

    Ok(scaled.iter().zip(&scale).map(|(c, s)| c / s).collect())
}

fn ridge_coefficients(x: &[f64], y: &[f64], degree: usize, alpha: f64) -> Result<Vec<f64>> {
    let design = vandermonde(x, degree);
    let target = DVector::from_column_slice(y);

    let mut gram: DMatrix<f64> = design.tr_mul(&design);
    for i in 0..gram.nrows() {
        gram[(i, i)] += alpha;
    }
    let rhs = design.tr_mul(&target);

    let c = solve_linear_system(&gram, &rhs).ok_or_else(|| {
        CurveError::degenerate(format!(
            "normal equations are singular even after regularization (alpha={alpha}, degree={degree})"
        ))
    })?;
    Ok(c.iter().copied().collect())
}
