//! Evaluation of fitted polynomials.

use crate::domain::{FitKind, FittedModel};

impl FittedModel {
    /// Build a model from increasing-power coefficients.
    ///
    /// # Panics
    /// Panics if `coefficients` is empty (a polynomial has at least a constant term).
    pub fn new(kind: FitKind, coefficients: Vec<f64>) -> Self {
        assert!(!coefficients.is_empty(), "a polynomial needs at least one coefficient");
        Self {
            degree: coefficients.len() - 1,
            coefficients,
            kind,
        }
    }

    /// Predict `y(x)` (Horner's scheme).
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }

    pub fn evaluate_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Euclidean norm of the coefficient vector.
    pub fn coefficient_norm(&self) -> f64 {
        self.coefficients.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    /// `coefficients.len() == degree + 1` (can be violated by hand-edited files).
    pub fn is_consistent(&self) -> bool {
        self.coefficients.len() == self.degree + 1
    }
}

/// Predict `y(x)` for a model.
pub fn evaluate_model(model: &FittedModel, x: f64) -> f64 {
    model.evaluate(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horner_matches_expanded_polynomial() {
        // 1 - 2x + 3x^2
        let m = FittedModel::new(FitKind::Plain, vec![1.0, -2.0, 3.0]);
        assert_eq!(m.degree, 2);
        for &x in &[-2.0, 0.0, 0.5, 3.0] {
            let expected = 1.0 - 2.0 * x + 3.0 * x * x;
            assert!((m.evaluate(x) - expected).abs() < 1e-12);
        }
        assert_eq!(m.evaluate_many(&[0.0, 1.0]), vec![1.0, 2.0]);
        assert_eq!(evaluate_model(&m, 2.0), 9.0);
    }

    #[test]
    fn constant_model() {
        let m = FittedModel::new(FitKind::Regularized { alpha: 1.0 }, vec![4.0]);
        assert_eq!(m.degree, 0);
        assert_eq!(m.evaluate(123.0), 4.0);
        assert_eq!(m.kind.regularization_strength(), Some(1.0));
    }

    #[test]
    fn norm_and_consistency() {
        let mut m = FittedModel::new(FitKind::Plain, vec![3.0, 4.0]);
        assert_eq!(m.coefficient_norm(), 5.0);
        assert!(m.is_consistent());
        m.degree = 5;
        assert!(!m.is_consistent());
    }
}
