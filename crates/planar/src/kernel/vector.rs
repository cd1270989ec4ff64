//! Displacement vectors in the plane.

use approx::{AbsDiffEq, RelativeEq};
use nalgebra::Vector2;

use crate::error::GeomError;
use crate::scalar::{approx_zero, sq, EPS};

/// Displacement between two points.
///
/// Equality is exact per component: a vector is bookkeeping data, not a
/// measured position. Tolerant comparisons live on the derived quantities
/// (magnitudes, angles) and on `approx` impls for tests.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    pub dx: f64,
    pub dy: f64,
}

impl Vector {
    #[inline]
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    #[inline]
    pub fn zero() -> Self {
        Self { dx: 0.0, dy: 0.0 }
    }

    #[inline]
    pub fn from_coords(c: Vector2<f64>) -> Self {
        Self { dx: c.x, dy: c.y }
    }

    #[inline]
    pub fn coords(&self) -> Vector2<f64> {
        Vector2::new(self.dx, self.dy)
    }

    #[inline]
    pub fn dot(&self, other: Vector) -> f64 {
        self.dx * other.dx + self.dy * other.dy
    }

    /// Perp-dot product `self.dx * other.dy - self.dy * other.dx`.
    /// Positive when `other` lies counterclockwise of `self`.
    #[inline]
    pub fn cross(&self, other: Vector) -> f64 {
        self.dx * other.dy - self.dy * other.dx
    }

    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        sq(self.dx) + sq(self.dy)
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Magnitude below `EPS`.
    #[inline]
    pub fn is_zero(&self) -> bool {
        approx_zero(self.magnitude())
    }

    /// Counterclockwise perpendicular (rotation by +90°).
    #[inline]
    pub fn perpendicular(&self) -> Vector {
        Vector::new(-self.dy, self.dx)
    }

    /// Unit vector with the same direction.
    pub fn unit(&self) -> Result<Vector, GeomError> {
        let m = self.magnitude();
        if approx_zero(m) {
            return Err(GeomError::DegenerateInput {
                reason: "cannot normalize a zero-length vector",
            });
        }
        Ok(Vector::new(self.dx / m, self.dy / m))
    }

    #[inline]
    pub fn scaled(&self, k: f64) -> Vector {
        Vector::new(self.dx * k, self.dy * k)
    }

    /// Rotate by `angle` radians, counterclockwise.
    pub fn rotated(&self, angle: f64) -> Vector {
        let (s, c) = angle.sin_cos();
        Vector::new(c * self.dx - s * self.dy, s * self.dx + c * self.dy)
    }
}

impl std::ops::Add for Vector {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl std::ops::Sub for Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.dx - rhs.dx, self.dy - rhs.dy)
    }
}

impl std::ops::Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        Vector::new(-self.dx, -self.dy)
    }
}

impl std::ops::Mul<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, k: f64) -> Vector {
        self.scaled(k)
    }
}

impl std::fmt::Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vector({}, {})", self.dx, self.dy)
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        EPS
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.dx, &other.dx, epsilon)
            && f64::abs_diff_eq(&self.dy, &other.dy, epsilon)
    }
}

impl RelativeEq for Vector {
    fn default_max_relative() -> f64 {
        EPS
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.dx, &other.dx, epsilon, max_relative)
            && f64::relative_eq(&self.dy, &other.dy, epsilon, max_relative)
    }
}
