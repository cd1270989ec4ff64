//! Points with homogeneous coordinates.
//!
//! Purpose
//! - Store `(hx, hy, hz)` with `hz != 0` and expose the cartesian view
//!   `(hx/hz, hy/hz)`. Projective images that land on the line at infinity
//!   are rejected instead of dividing by ~0.

use approx::{AbsDiffEq, RelativeEq};
use nalgebra::{Matrix3, Vector2, Vector3};

use super::vector::Vector;
use crate::error::GeomError;
use crate::scalar::{approx_zero, EPS};
use crate::transform::Transform;

/// Location in the plane, stored as a homogeneous triple.
///
/// Equality compares cartesian coordinates within `EPS`, so it is reflexive
/// and symmetric but not transitive; exact bookkeeping belongs on `Vector`.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    h: Vector3<f64>,
}

impl Point {
    /// Cartesian constructor (`hz = 1`).
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            h: Vector3::new(x, y, 1.0),
        }
    }

    /// Build from a homogeneous triple. `hz` must stay clear of zero.
    pub fn from_homogeneous(hx: f64, hy: f64, hz: f64) -> Result<Self, GeomError> {
        if approx_zero(hz) {
            return Err(GeomError::DegenerateInput {
                reason: "homogeneous point with hz = 0",
            });
        }
        Ok(Self {
            h: Vector3::new(hx, hy, hz),
        })
    }

    #[inline]
    pub fn origin() -> Self {
        Point::new(0.0, 0.0)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.h.x / self.h.z
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.h.y / self.h.z
    }

    #[inline]
    pub fn hx(&self) -> f64 {
        self.h.x
    }

    #[inline]
    pub fn hy(&self) -> f64 {
        self.h.y
    }

    #[inline]
    pub fn hz(&self) -> f64 {
        self.h.z
    }

    /// Cartesian coordinates.
    #[inline]
    pub fn coords(&self) -> Vector2<f64> {
        Vector2::new(self.x(), self.y())
    }

    /// The stored homogeneous triple, as given.
    #[inline]
    pub fn to_homogeneous(&self) -> Vector3<f64> {
        self.h
    }

    /// Displacement from `self` to `other`.
    #[inline]
    pub fn vector_to(&self, other: Point) -> Vector {
        Vector::new(other.x() - self.x(), other.y() - self.y())
    }

    #[inline]
    pub fn distance_to(&self, other: Point) -> f64 {
        self.vector_to(other).magnitude()
    }

    pub fn midpoint(&self, other: Point) -> Point {
        Point::new(0.5 * (self.x() + other.x()), 0.5 * (self.y() + other.y()))
    }

    pub fn translated(&self, v: Vector) -> Point {
        Point::new(self.x() + v.dx, self.y() + v.dy)
    }

    /// Rotate about the origin by `angle` radians, counterclockwise.
    pub fn rotated(&self, angle: f64) -> Point {
        let r = Vector::new(self.x(), self.y()).rotated(angle);
        Point::new(r.dx, r.dy)
    }

    /// Scale about the origin.
    pub fn scaled(&self, k: f64) -> Point {
        Point::new(self.x() * k, self.y() * k)
    }

    pub fn transformed(&self, t: &Transform) -> Point {
        t.apply_point(*self)
    }

    /// Image under a full projective 3×3 map acting on the homogeneous triple.
    pub fn transformed_homogeneous(&self, h: &Matrix3<f64>) -> Result<Point, GeomError> {
        let w = h * self.h;
        if approx_zero(w.z) {
            return Err(GeomError::DegenerateInput {
                reason: "projective image lies on the line at infinity",
            });
        }
        Ok(Point { h: w })
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.distance_to(*other) < EPS
    }
}

impl std::ops::Add<Vector> for Point {
    type Output = Point;
    #[inline]
    fn add(self, v: Vector) -> Point {
        self.translated(v)
    }
}

impl std::ops::Sub<Vector> for Point {
    type Output = Point;
    #[inline]
    fn sub(self, v: Vector) -> Point {
        self.translated(-v)
    }
}

impl std::ops::Sub for Point {
    type Output = Vector;
    #[inline]
    fn sub(self, other: Point) -> Vector {
        other.vector_to(self)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Point({}, {})", self.x(), self.y())
    }
}

impl AbsDiffEq for Point {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        EPS
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.x(), &other.x(), epsilon)
            && f64::abs_diff_eq(&self.y(), &other.y(), epsilon)
    }
}

impl RelativeEq for Point {
    fn default_max_relative() -> f64 {
        EPS
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.x(), &other.x(), epsilon, max_relative)
            && f64::relative_eq(&self.y(), &other.y(), epsilon, max_relative)
    }
}
