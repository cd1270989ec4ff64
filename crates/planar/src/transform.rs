//! Affine maps of the plane.
//!
//! - `Transform`: `x ↦ M x + t` with named constructors, composition, and
//!   inversion. Displacement vectors transform by the linear part only.

use nalgebra::{Matrix2, Matrix3, Vector2};

use crate::error::GeomError;
use crate::kernel::{Point, Vector};
use crate::scalar::{approx_eq_eps, approx_zero, EPS};

/// 2D affine map `x ↦ M x + t`.
#[derive(Clone, Copy, Debug)]
pub struct Transform {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Transform {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }

    #[inline]
    pub fn translation(v: Vector) -> Self {
        Self {
            m: Matrix2::identity(),
            t: v.coords(),
        }
    }

    /// Rotation about the origin by `angle` radians, counterclockwise.
    pub fn rotation(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            m: Matrix2::new(c, -s, s, c),
            t: Vector2::zeros(),
        }
    }

    pub fn rotation_about(center: Point, angle: f64) -> Self {
        let r = Self::rotation(angle);
        let c = center.coords();
        Self {
            m: r.m,
            t: c - r.m * c,
        }
    }

    /// Uniform scaling about the origin.
    pub fn scaling(k: f64) -> Self {
        Self {
            m: Matrix2::identity() * k,
            t: Vector2::zeros(),
        }
    }

    pub fn scaling_about(center: Point, k: f64) -> Self {
        let c = center.coords();
        Self {
            m: Matrix2::identity() * k,
            t: c - c * k,
        }
    }

    #[inline]
    pub fn from_matrix2(m: Matrix2<f64>) -> Self {
        Self {
            m,
            t: Vector2::zeros(),
        }
    }

    /// Affine part of a homogeneous 3×3 matrix. The bottom row must be
    /// `(0, 0, 1)`; anything projective is rejected.
    pub fn from_matrix3(h: &Matrix3<f64>) -> Result<Self, GeomError> {
        let affine = approx_zero(h[(2, 0)])
            && approx_zero(h[(2, 1)])
            && approx_eq_eps(h[(2, 2)], 1.0, EPS);
        if !affine {
            return Err(GeomError::InvalidArgument {
                reason: "matrix is not affine (bottom row != (0, 0, 1))",
            });
        }
        Ok(Self {
            m: Matrix2::new(h[(0, 0)], h[(0, 1)], h[(1, 0)], h[(1, 1)]),
            t: Vector2::new(h[(0, 2)], h[(1, 2)]),
        })
    }

    pub fn to_matrix3(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.m[(0, 0)],
            self.m[(0, 1)],
            self.t.x,
            self.m[(1, 0)],
            self.m[(1, 1)],
            self.t.y,
            0.0,
            0.0,
            1.0,
        )
    }

    /// Apply `self` first, then `next`.
    pub fn then(&self, next: &Transform) -> Transform {
        Transform {
            m: next.m * self.m,
            t: next.m * self.t + next.t,
        }
    }

    pub fn inverse(&self) -> Option<Transform> {
        self.m.try_inverse().map(|minv| Transform {
            m: minv,
            t: -minv * self.t,
        })
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        self.m.determinant()
    }

    pub fn is_identity(&self) -> bool {
        approx_eq_eps(self.m[(0, 0)], 1.0, EPS)
            && approx_zero(self.m[(0, 1)])
            && approx_zero(self.m[(1, 0)])
            && approx_eq_eps(self.m[(1, 1)], 1.0, EPS)
            && approx_zero(self.t.x)
            && approx_zero(self.t.y)
    }

    /// Uniform scale factor when the linear part is a similarity
    /// (rotation plus uniform scaling), else `None`.
    pub fn similarity_scale(&self) -> Option<f64> {
        let g = self.m.transpose() * self.m;
        let lambda = g[(0, 0)];
        let similar = approx_eq_eps(g[(1, 1)], lambda, EPS)
            && approx_zero(g[(0, 1)])
            && approx_zero(g[(1, 0)])
            && lambda > 0.0;
        if similar {
            Some(lambda.sqrt())
        } else {
            None
        }
    }

    #[inline]
    pub fn apply_point(&self, p: Point) -> Point {
        let c = self.m * p.coords() + self.t;
        Point::new(c.x, c.y)
    }

    /// Displacements ignore the translation part.
    #[inline]
    pub fn apply_vector(&self, v: Vector) -> Vector {
        Vector::from_coords(self.m * v.coords())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn rotation_about_center_fixes_center() {
        let c = Point::new(2.0, -1.0);
        let t = Transform::rotation_about(c, 1.234);
        assert_abs_diff_eq!(t.apply_point(c), c, epsilon = 1e-12);
    }

    #[test]
    fn compose_applies_left_to_right() {
        let t = Transform::rotation(FRAC_PI_2).then(&Transform::translation(Vector::new(1.0, 0.0)));
        let p = t.apply_point(Point::new(1.0, 0.0));
        assert_abs_diff_eq!(p, Point::new(1.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn inverse_round_trips() {
        let t = Transform::rotation_about(Point::new(0.5, 0.5), 0.7)
            .then(&Transform::scaling(3.0));
        let inv = t.inverse().unwrap();
        let p = Point::new(-2.0, 4.0);
        assert_abs_diff_eq!(inv.apply_point(t.apply_point(p)), p, epsilon = 1e-9);
        assert!(t.then(&inv).is_identity());
    }

    #[test]
    fn vectors_ignore_translation() {
        let t = Transform::translation(Vector::new(5.0, 5.0));
        assert_eq!(t.apply_vector(Vector::new(1.0, 2.0)), Vector::new(1.0, 2.0));
    }

    #[test]
    fn from_matrix3_rejects_projective_rows() {
        let mut h = Transform::rotation(0.3).to_matrix3();
        assert!(Transform::from_matrix3(&h).is_ok());
        h[(2, 0)] = 0.1;
        assert!(matches!(
            Transform::from_matrix3(&h),
            Err(GeomError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn similarity_scale_detects_uniform_maps() {
        let sim = Transform::rotation(0.4).then(&Transform::scaling(2.0));
        let s = sim.similarity_scale().unwrap();
        assert!((s - 2.0).abs() < 1e-12);
        let shear = Transform::from_matrix2(Matrix2::new(1.0, 1.0, 0.0, 1.0));
        assert!(shear.similarity_scale().is_none());
    }
}
