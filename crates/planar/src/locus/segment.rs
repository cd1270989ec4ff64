//! Bounded loci between two endpoints.

use super::intersect::{closest_on_carrier, Carrier, Domain};
use super::line::Line;
use super::ray::Ray;
use crate::circulator::Circular;
use crate::error::GeomError;
use crate::kernel::{strict_side, Direction, Orientation, Point, Vector};
use crate::scalar::EPS;
use crate::shapes::Aabb;
use crate::transform::Transform;

/// Bounded locus from `start` to `end`, parameterized over `t ∈ [0, 1]`.
///
/// `start == end` is a representable degenerate value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Displacement from start to end.
    #[inline]
    pub fn director(&self) -> Vector {
        self.start.vector_to(self.end)
    }

    pub fn direction(&self) -> Result<Direction, GeomError> {
        Direction::new(self.director())
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }

    pub fn midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }

    pub fn reversed(&self) -> Segment {
        Segment::new(self.end, self.start)
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Linear interpolation; membership in the segment requires `t ∈ [0, 1]`.
    #[inline]
    pub fn point_at(&self, t: f64) -> Point {
        self.start.translated(self.director().scaled(t))
    }

    pub(crate) fn carrier(&self) -> Carrier {
        Carrier {
            base: self.start,
            dir: self.director(),
            domain: Domain::Unit,
        }
    }

    pub fn contains_point(&self, p: Point) -> bool {
        self.contains_point_eps(p, EPS)
    }

    /// Membership with custom slack; a degenerate segment holds only its
    /// coincident endpoints.
    pub fn contains_point_eps(&self, p: Point, eps: f64) -> bool {
        if self.is_degenerate() {
            return self.start.distance_to(p) < eps;
        }
        let dir = self.director();
        let w = self.start.vector_to(p);
        let mag = dir.magnitude();
        if dir.cross(w).abs() >= eps * mag {
            return false;
        }
        // Arclength along the carrier, with slack at both endpoints.
        let s = dir.dot(w) / mag;
        s >= -eps && s <= mag + eps
    }

    pub fn is_left_of(&self, p: Point) -> bool {
        matches!(self.side_of(p), Some(Orientation::Left))
    }

    pub fn is_right_of(&self, p: Point) -> bool {
        matches!(self.side_of(p), Some(Orientation::Right))
    }

    fn side_of(&self, p: Point) -> Option<Orientation> {
        strict_side(p, self.start, self.end)
    }

    /// Perpendicular foot clamped to the segment: an endpoint when the foot
    /// falls outside `[0, 1]`.
    pub fn closest_point_to(&self, p: Point) -> Result<Point, GeomError> {
        if self.is_degenerate() {
            return Err(GeomError::DegenerateInput {
                reason: "closest point on a degenerate segment",
            });
        }
        Ok(closest_on_carrier(&self.carrier(), p))
    }

    pub fn distance_to_point(&self, p: Point) -> Result<f64, GeomError> {
        Ok(self.closest_point_to(p)?.distance_to(p))
    }

    /// Line through `p` perpendicular to this segment's carrier.
    pub fn perpendicular_at(&self, p: Point) -> Result<Line, GeomError> {
        if self.is_degenerate() {
            return Err(GeomError::DegenerateInput {
                reason: "perpendicular to a degenerate segment",
            });
        }
        Ok(Line::new(p, self.director().perpendicular()))
    }

    /// Forget the end bound.
    pub fn to_ray(&self) -> Ray {
        Ray::new(self.start, self.director())
    }

    /// Forget both bounds.
    pub fn to_line(&self) -> Line {
        Line::new(self.start, self.director())
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::new(self.start, self.end)
    }

    pub fn translated(&self, v: Vector) -> Segment {
        Segment::new(self.start.translated(v), self.end.translated(v))
    }

    pub fn rotated(&self, angle: f64) -> Segment {
        Segment::new(self.start.rotated(angle), self.end.rotated(angle))
    }

    pub fn scaled(&self, k: f64) -> Segment {
        Segment::new(self.start.scaled(k), self.end.scaled(k))
    }

    pub fn transformed(&self, t: &Transform) -> Segment {
        Segment::new(t.apply_point(self.start), t.apply_point(self.end))
    }
}

impl Circular for Segment {
    fn position_count(&self) -> usize {
        2
    }

    fn next_index(&self, i: usize) -> usize {
        (i + 1) % 2
    }

    fn previous_index(&self, i: usize) -> usize {
        (i + 1) % 2
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Segment(({}, {}) -> ({}, {}))",
            self.start.x(),
            self.start.y(),
            self.end.x(),
            self.end.y()
        )
    }
}
