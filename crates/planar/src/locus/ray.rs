//! Half-bounded loci anchored at an origin.

use super::intersect::{closest_on_carrier, Carrier, Domain};
use super::line::Line;
use crate::error::GeomError;
use crate::kernel::{strict_side, Direction, Orientation, Point, Vector};
use crate::scalar::EPS;
use crate::transform::Transform;

/// Half-bounded locus `origin + t·director`, `t ∈ [0, ∞)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point,
    pub director: Vector,
}

impl Ray {
    #[inline]
    pub fn new(origin: Point, director: Vector) -> Self {
        Self { origin, director }
    }

    /// Ray from `origin` toward `target`; degenerate when they coincide.
    #[inline]
    pub fn through(origin: Point, target: Point) -> Self {
        Self {
            origin,
            director: origin.vector_to(target),
        }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.director.is_zero()
    }

    pub fn direction(&self) -> Result<Direction, GeomError> {
        Direction::new(self.director)
    }

    /// Point on the carrier at parameter `t`; membership in the ray itself
    /// requires `t >= 0`.
    #[inline]
    pub fn point_at(&self, t: f64) -> Point {
        self.origin.translated(self.director.scaled(t))
    }

    pub(crate) fn carrier(&self) -> Carrier {
        Carrier {
            base: self.origin,
            dir: self.director,
            domain: Domain::Half,
        }
    }

    pub fn contains_point(&self, p: Point) -> bool {
        self.contains_point_eps(p, EPS)
    }

    /// Membership with custom slack; a degenerate ray holds only its origin.
    pub fn contains_point_eps(&self, p: Point, eps: f64) -> bool {
        if self.is_degenerate() {
            return self.origin.distance_to(p) < eps;
        }
        let w = self.origin.vector_to(p);
        let mag = self.director.magnitude();
        // On the carrier, and not behind the origin (arclength slack).
        self.director.cross(w).abs() < eps * mag && self.director.dot(w) >= -eps * mag
    }

    pub fn is_left_of(&self, p: Point) -> bool {
        matches!(self.side_of(p), Some(Orientation::Left))
    }

    pub fn is_right_of(&self, p: Point) -> bool {
        matches!(self.side_of(p), Some(Orientation::Right))
    }

    fn side_of(&self, p: Point) -> Option<Orientation> {
        strict_side(p, self.origin, self.origin.translated(self.director))
    }

    /// Perpendicular foot when it lies on the ray, else the origin.
    pub fn closest_point_to(&self, p: Point) -> Result<Point, GeomError> {
        if self.is_degenerate() {
            return Err(GeomError::DegenerateInput {
                reason: "closest point on a degenerate ray",
            });
        }
        Ok(closest_on_carrier(&self.carrier(), p))
    }

    pub fn distance_to_point(&self, p: Point) -> Result<f64, GeomError> {
        Ok(self.closest_point_to(p)?.distance_to(p))
    }

    /// Line through `p` perpendicular to this ray's carrier.
    pub fn perpendicular_at(&self, p: Point) -> Result<Line, GeomError> {
        if self.is_degenerate() {
            return Err(GeomError::DegenerateInput {
                reason: "perpendicular to a degenerate ray",
            });
        }
        Ok(Line::new(p, self.director.perpendicular()))
    }

    /// Forget the origin bound.
    pub fn to_line(&self) -> Line {
        Line::new(self.origin, self.director)
    }

    pub fn translated(&self, v: Vector) -> Ray {
        Ray::new(self.origin.translated(v), self.director)
    }

    pub fn rotated(&self, angle: f64) -> Ray {
        Ray::new(self.origin.rotated(angle), self.director.rotated(angle))
    }

    pub fn scaled(&self, k: f64) -> Ray {
        Ray::new(self.origin.scaled(k), self.director.scaled(k))
    }

    pub fn transformed(&self, t: &Transform) -> Ray {
        Ray::new(t.apply_point(self.origin), t.apply_vector(self.director))
    }
}

impl std::fmt::Display for Ray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Ray(({}, {}) + t({}, {}))",
            self.origin.x(),
            self.origin.y(),
            self.director.dx,
            self.director.dy
        )
    }
}
