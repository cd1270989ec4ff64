//! Scalar helpers and the crate-wide default tolerance.

/// Default absolute tolerance for coordinate, distance, and area comparisons.
///
/// Predicates that accept a custom slack carry an `_eps` suffix; everything
/// else compares against this constant.
pub const EPS: f64 = 1e-9;

/// `|a - b| < EPS`.
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    approx_eq_eps(a, b, EPS)
}

/// `|a - b| < eps`.
#[inline]
pub fn approx_eq_eps(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

/// `|x| < EPS`.
#[inline]
pub fn approx_zero(x: f64) -> bool {
    x.abs() < EPS
}

/// `|x| < eps`.
#[inline]
pub fn approx_zero_eps(x: f64, eps: f64) -> bool {
    x.abs() < eps
}

/// `x * x`.
#[inline]
pub fn sq(x: f64) -> f64 {
    x * x
}

/// Wrap an angle into the canonical range `[-π, π)`.
#[inline]
pub fn normalize_angle(a: f64) -> f64 {
    (a + std::f64::consts::PI).rem_euclid(std::f64::consts::TAU) - std::f64::consts::PI
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, TAU};

    #[test]
    fn wrap_into_half_open_range() {
        assert!(approx_eq(normalize_angle(PI), -PI));
        assert!(approx_eq(normalize_angle(-PI), -PI));
        assert!(approx_eq(normalize_angle(3.0 * PI), -PI));
        assert!(approx_zero(normalize_angle(TAU)));
        assert!(approx_eq(normalize_angle(0.5), 0.5));
        assert!(approx_eq(normalize_angle(-TAU - 0.25), -0.25));
    }

    #[test]
    fn tolerant_comparisons() {
        assert!(approx_eq(1.0, 1.0 + 1e-12));
        assert!(!approx_eq(1.0, 1.0 + 1e-6));
        assert!(approx_zero(-1e-10));
        assert!(approx_zero_eps(0.5, 0.6));
        assert!(approx_eq_eps(3.0, 3.4, 0.5));
    }

    #[test]
    fn square_helper() {
        assert_eq!(sq(-3.0), 9.0);
    }
}
