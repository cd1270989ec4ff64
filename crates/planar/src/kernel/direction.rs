//! Angle-identity directions.
//!
//! A `Direction` keeps the vector it was built from; its identity is the
//! angle alone, canonically in `[-π, π)` with wraparound-aware comparison.

use super::vector::Vector;
use crate::error::GeomError;
use crate::scalar::{approx_zero_eps, normalize_angle, EPS};

/// Direction in the plane, independent of magnitude.
///
/// Equality and ordering go by canonical angle: `==` tolerates an `EPS` band
/// with wraparound, and `partial_cmp` reports `Equal` on that same band.
/// Sorting wants the strict total order of [`Direction::cmp_angle`].
#[derive(Clone, Copy, Debug)]
pub struct Direction {
    v: Vector,
}

impl Direction {
    /// Direction of a non-zero vector.
    pub fn new(v: Vector) -> Result<Self, GeomError> {
        if v.is_zero() {
            return Err(GeomError::DegenerateInput {
                reason: "direction from a zero vector",
            });
        }
        Ok(Self { v })
    }

    pub fn from_angle(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            v: Vector::new(c, s),
        }
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_angle(degrees.to_radians())
    }

    /// Angle measured counterclockwise from the x-axis, in `[-π, π)`.
    #[inline]
    pub fn angle(&self) -> f64 {
        normalize_angle(self.v.dy.atan2(self.v.dx))
    }

    #[inline]
    pub fn angle_degrees(&self) -> f64 {
        self.angle().to_degrees()
    }

    /// The defining vector, as given (not normalized).
    #[inline]
    pub fn vector(&self) -> Vector {
        self.v
    }

    /// Unit vector along this direction.
    pub fn unit_vector(&self) -> Vector {
        let m = self.v.magnitude();
        Vector::new(self.v.dx / m, self.v.dy / m)
    }

    pub fn opposite(&self) -> Direction {
        Direction { v: -self.v }
    }

    /// Counterclockwise perpendicular.
    pub fn perpendicular(&self) -> Direction {
        Direction {
            v: self.v.perpendicular(),
        }
    }

    /// Three-way comparison by canonical angle; total over all directions.
    pub fn cmp_angle(&self, other: &Direction) -> std::cmp::Ordering {
        self.angle()
            .partial_cmp(&other.angle())
            .unwrap_or(std::cmp::Ordering::Equal)
    }

    /// Strictly inside the counterclockwise arc swept from `from` to `to`.
    /// An empty arc (`from == to`) contains nothing.
    pub fn ccw_between(&self, from: &Direction, to: &Direction) -> bool {
        let span = (to.angle() - from.angle()).rem_euclid(std::f64::consts::TAU);
        let offset = (self.angle() - from.angle()).rem_euclid(std::f64::consts::TAU);
        offset > EPS && offset < span - EPS
    }

    /// Strictly inside the clockwise arc swept from `from` to `to`.
    pub fn cw_between(&self, from: &Direction, to: &Direction) -> bool {
        self.ccw_between(to, from)
    }
}

impl PartialEq for Direction {
    fn eq(&self, other: &Self) -> bool {
        approx_zero_eps(normalize_angle(self.angle() - other.angle()), EPS)
    }
}

impl PartialOrd for Direction {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if self == other {
            return Some(std::cmp::Ordering::Equal);
        }
        self.angle().partial_cmp(&other.angle())
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Direction({}, {})", self.v.dx, self.v.dy)
    }
}
