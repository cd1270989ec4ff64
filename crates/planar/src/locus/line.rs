//! Infinite lines through a base point.

use super::intersect::{closest_on_carrier, Carrier, Domain};
use crate::error::GeomError;
use crate::kernel::{strict_side, Direction, Orientation, Point, Vector};
use crate::scalar::EPS;
use crate::transform::Transform;

/// Unbounded locus `base + t·director`, `t ∈ (-∞, ∞)`.
///
/// A zero director is representable (`is_degenerate`); operations that need
/// a direction reject it instead of failing at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub base: Point,
    pub director: Vector,
}

impl Line {
    #[inline]
    pub fn new(base: Point, director: Vector) -> Self {
        Self { base, director }
    }

    /// Line through `a` and `b`; degenerate when they coincide.
    #[inline]
    pub fn through(a: Point, b: Point) -> Self {
        Self {
            base: a,
            director: a.vector_to(b),
        }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.director.is_zero()
    }

    pub fn direction(&self) -> Result<Direction, GeomError> {
        Direction::new(self.director)
    }

    #[inline]
    pub fn point_at(&self, t: f64) -> Point {
        self.base.translated(self.director.scaled(t))
    }

    pub(crate) fn carrier(&self) -> Carrier {
        Carrier {
            base: self.base,
            dir: self.director,
            domain: Domain::Full,
        }
    }

    pub fn contains_point(&self, p: Point) -> bool {
        self.contains_point_eps(p, EPS)
    }

    /// Carrier membership with custom slack; a degenerate line holds only
    /// its base point.
    pub fn contains_point_eps(&self, p: Point, eps: f64) -> bool {
        if self.is_degenerate() {
            return self.base.distance_to(p) < eps;
        }
        let w = self.base.vector_to(p);
        self.director.cross(w).abs() < eps * self.director.magnitude()
    }

    /// Strictly left of the directed carrier. `false` for degenerate lines
    /// and for query points coinciding with a defining point.
    pub fn is_left_of(&self, p: Point) -> bool {
        matches!(self.side_of(p), Some(Orientation::Left))
    }

    pub fn is_right_of(&self, p: Point) -> bool {
        matches!(self.side_of(p), Some(Orientation::Right))
    }

    fn side_of(&self, p: Point) -> Option<Orientation> {
        strict_side(p, self.base, self.base.translated(self.director))
    }

    /// Foot of the perpendicular from `p`.
    pub fn closest_point_to(&self, p: Point) -> Result<Point, GeomError> {
        if self.is_degenerate() {
            return Err(GeomError::DegenerateInput {
                reason: "closest point on a degenerate line",
            });
        }
        Ok(closest_on_carrier(&self.carrier(), p))
    }

    pub fn distance_to_point(&self, p: Point) -> Result<f64, GeomError> {
        Ok(self.closest_point_to(p)?.distance_to(p))
    }

    /// Line through `p` perpendicular to this one.
    pub fn perpendicular_at(&self, p: Point) -> Result<Line, GeomError> {
        if self.is_degenerate() {
            return Err(GeomError::DegenerateInput {
                reason: "perpendicular to a degenerate line",
            });
        }
        Ok(Line::new(p, self.director.perpendicular()))
    }

    pub fn translated(&self, v: Vector) -> Line {
        Line::new(self.base.translated(v), self.director)
    }

    pub fn rotated(&self, angle: f64) -> Line {
        Line::new(self.base.rotated(angle), self.director.rotated(angle))
    }

    pub fn scaled(&self, k: f64) -> Line {
        Line::new(self.base.scaled(k), self.director.scaled(k))
    }

    pub fn transformed(&self, t: &Transform) -> Line {
        Line::new(t.apply_point(self.base), t.apply_vector(self.director))
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Line(({}, {}) + t({}, {}))",
            self.base.x(),
            self.base.y(),
            self.director.dx,
            self.director.dy
        )
    }
}
