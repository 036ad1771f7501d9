//! Linear algebra boundary for the fit engine.
//!
//! Polynomial fitting reduces to two dense problems:
//!
//! ```text
//! plain:  minimize ‖X c − y‖²                  (least squares on the design matrix)
//! ridge:  (XᵗX + αI) c = Xᵗy                   (square, symmetric system)
//! ```
//!
//! where `X` is the increasing-power Vandermonde matrix.
//!
//! Implementation choices:
//! - Least squares goes through SVD so tall, square and wide design matrices
//!   are all handled. Wide (underdetermined) systems get the minimum-norm
//!   solution. (Nalgebra's `QR::solve` is intended for square systems and
//!   will panic for non-square matrices.)
//! - Singular values below `σ_max · max(rows, cols) · ε` are treated as zero.
//! - The square system tries Cholesky first, then LU with partial pivoting.

use log::debug;
use nalgebra::{DMatrix, DVector};

use crate::math::fill_monomial_row;

/// Build the `n × (degree + 1)` Vandermonde matrix with columns `x^0 .. x^degree`.
pub fn vandermonde(x: &[f64], degree: usize) -> DMatrix<f64> {
    let cols = degree + 1;
    let mut out = DMatrix::zeros(x.len(), cols);
    let mut row = vec![0.0; cols];
    for (i, &xi) in x.iter().enumerate() {
        fill_monomial_row(xi, &mut row);
        for (j, &v) in row.iter().enumerate() {
            out[(i, j)] = v;
        }
    }
    out
}

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the solve fails or produces non-finite coefficients.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    let sigma_max = svd.singular_values.iter().copied().fold(0.0_f64, f64::max);
    if !(sigma_max.is_finite() && sigma_max > 0.0) {
        return None;
    }
    let dim = x.nrows().max(x.ncols()) as f64;
    let tol = sigma_max * dim * f64::EPSILON;
    let rank = svd.singular_values.iter().filter(|&&s| s > tol).count();
    debug!(
        "svd least squares: {}x{}, rank {rank}, cutoff {tol:e}",
        x.nrows(),
        x.ncols()
    );

    let beta = svd.solve(y, tol).ok()?;
    beta.iter().all(|v| v.is_finite()).then_some(beta)
}

/// Solve a square linear system `a · c = b`.
///
/// Returns `None` if `a` is singular (both factorizations fail) or the
/// solution is not finite.
pub fn solve_linear_system(a: &DMatrix<f64>, b: &DVector<f64>) -> Option<DVector<f64>> {
    if !a.is_square() || a.nrows() != b.len() {
        return None;
    }

    if let Some(chol) = a.clone().cholesky() {
        let c = chol.solve(b);
        if c.iter().all(|v| v.is_finite()) {
            return Some(c);
        }
    }

    debug!("cholesky failed for {0}x{0} system, falling back to LU", a.nrows());
    let c = a.clone().lu().solve(b)?;
    c.iter().all(|v| v.is_finite()).then_some(c)
}
