//! Basis functions.
//!
//! Cubic Hermite basis on the unit interval:
//!
//! - `h0(t) =  2t³ − 3t² + 1`
//! - `h1(t) = −2t³ + 3t²`
//! - `h2(t) =  t³ − 2t² + t`
//! - `h3(t) =  t³ − t²`
//!
//! `h0`/`h1` weight the endpoint values and `h2`/`h3` weight the endpoint
//! tangents. At `t = 0` only `h0` is 1 and only `h2′` is 1; at `t = 1` only
//! `h1` is 1 and only `h3′` is 1.
//!
//! The monomial basis (`1, x, x², ...`) used by polynomial fitting lives here too.

/// Evaluate `[h0, h1, h2, h3]` at `t`. No clamping: `t` outside `[0, 1]` extrapolates.
pub fn hermite_basis(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        2.0 * t3 - 3.0 * t2 + 1.0,
        -2.0 * t3 + 3.0 * t2,
        t3 - 2.0 * t2 + t,
        t3 - t2,
    ]
}

/// Evaluate the first derivatives `[h0′, h1′, h2′, h3′]` at `t`.
pub fn hermite_basis_derivative(t: f64) -> [f64; 4] {
    let t2 = t * t;
    [
        6.0 * t2 - 6.0 * t,
        -6.0 * t2 + 6.0 * t,
        3.0 * t2 - 4.0 * t + 1.0,
        3.0 * t2 - 2.0 * t,
    ]
}

/// Fill `out` with increasing powers of `x`: `out[k] = x^k`.
pub fn fill_monomial_row(x: f64, out: &mut [f64]) {
    let mut power = 1.0;
    for slot in out.iter_mut() {
        *slot = power;
        power *= x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hermite_basis_endpoints() {
        assert_eq!(hermite_basis(0.0), [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(hermite_basis(1.0), [0.0, 1.0, 0.0, 0.0]);
        assert_eq!(hermite_basis_derivative(0.0), [0.0, 0.0, 1.0, 0.0]);
        assert_eq!(hermite_basis_derivative(1.0), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn hermite_value_basis_is_partition_of_unity() {
        for &t in &[-1.5, 0.0, 0.25, 0.5, 0.9, 2.0] {
            let h = hermite_basis(t);
            assert!((h[0] + h[1] - 1.0).abs() < 1e-12, "h0 + h1 != 1 at t={t}");
        }
    }

    #[test]
    fn hermite_basis_midpoint() {
        let h = hermite_basis(0.5);
        assert!((h[0] - 0.5).abs() < 1e-15);
        assert!((h[1] - 0.5).abs() < 1e-15);
        assert!((h[2] - 0.125).abs() < 1e-15);
        assert!((h[3] + 0.125).abs() < 1e-15);
    }

    #[test]
    fn monomial_row_powers() {
        let mut row = [0.0; 4];
        fill_monomial_row(2.0, &mut row);
        assert_eq!(row, [1.0, 2.0, 4.0, 8.0]);

        let mut empty: [f64; 0] = [];
        fill_monomial_row(3.0, &mut empty);
    }
}
