//! Cubic Hermite evaluation for a single two-point segment.

use crate::domain::{EvaluatedPoint, HermiteSegment};
use crate::math::{hermite_basis, hermite_basis_derivative};

/// Interpolated value at `t` for endpoint values `f0`, `f1` and tangents `fd0`, `fd1`.
pub fn evaluate_hermite(f0: f64, f1: f64, fd0: f64, fd1: f64, t: f64) -> f64 {
    HermiteSegment::new(f0, f1, fd0, fd1).evaluate(t)
}

impl HermiteSegment {
    pub fn new(f0: f64, f1: f64, fd0: f64, fd1: f64) -> Self {
        Self { f0, f1, fd0, fd1 }
    }

    /// `f(t) = h0·f0 + h1·f1 + h2·fd0 + h3·fd1`.
    pub fn evaluate(&self, t: f64) -> f64 {
        let [h0, h1, h2, h3] = hermite_basis(t);
        h0 * self.f0 + h1 * self.f1 + h2 * self.fd0 + h3 * self.fd1
    }

    /// Tangent `f′(t)` of the same cubic.
    pub fn derivative(&self, t: f64) -> f64 {
        let [d0, d1, d2, d3] = hermite_basis_derivative(t);
        d0 * self.f0 + d1 * self.f1 + d2 * self.fd0 + d3 * self.fd1
    }

    /// Evaluate every sample, keeping input order.
    pub fn evaluate_all(&self, ts: &[f64]) -> Vec<EvaluatedPoint> {
        ts.iter()
            .map(|&t| EvaluatedPoint {
                t,
                f: self.evaluate(t),
            })
            .collect()
    }
}
