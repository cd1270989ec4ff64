//! Triangle on three corner points.

use crate::circulator::Circular;
use crate::error::GeomError;
use crate::kernel::{signed_parallelogram_area, strict_side, Point, Vector, Winding};
use crate::locus::Segment;
use crate::polygon::Polygon;
use crate::scalar::approx_zero;
use crate::shapes::Aabb;
use crate::transform::Transform;

/// Corner triple; no ordering or non-degeneracy is enforced, queries
/// report degeneracy through [`Winding::Collinear`] instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Triangle {
        Triangle { a, b, c }
    }

    pub fn vertex(&self, index: usize) -> Result<Point, GeomError> {
        match index {
            0 => Ok(self.a),
            1 => Ok(self.b),
            2 => Ok(self.c),
            _ => Err(GeomError::OutOfRange { index, count: 3 }),
        }
    }

    /// Edge `index` runs from vertex `index` to its successor.
    pub fn edge(&self, index: usize) -> Result<Segment, GeomError> {
        match index {
            0 => Ok(Segment::new(self.a, self.b)),
            1 => Ok(Segment::new(self.b, self.c)),
            2 => Ok(Segment::new(self.c, self.a)),
            _ => Err(GeomError::OutOfRange { index, count: 3 }),
        }
    }

    /// Positive when `a`, `b`, `c` run counterclockwise.
    pub fn signed_area(&self) -> f64 {
        0.5 * signed_parallelogram_area(self.a, self.b, self.c)
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn winding(&self) -> Winding {
        Winding::from_signed_area(self.signed_area())
    }

    pub fn is_degenerate(&self) -> bool {
        approx_zero(self.signed_area())
    }

    pub fn centroid(&self) -> Point {
        let to_b = self.a.vector_to(self.b);
        let to_c = self.a.vector_to(self.c);
        self.a + (to_b + to_c).scaled(1.0 / 3.0)
    }

    /// Boundary-inclusive containment; degenerate triangles contain only
    /// their boundary points.
    pub fn contains(&self, p: Point) -> bool {
        self.contains_impl(p, true)
    }

    pub fn contains_strict(&self, p: Point) -> bool {
        self.contains_impl(p, false)
    }

    fn contains_impl(&self, p: Point, boundary_counts: bool) -> bool {
        if p == self.a || p == self.b || p == self.c {
            return boundary_counts;
        }
        let corners = [self.a, self.b, self.c];
        for i in 0..3 {
            let e = Segment::new(corners[i], corners[(i + 1) % 3]);
            if !e.is_degenerate() && e.contains_point(p) {
                return boundary_counts;
            }
        }
        let side = match self.winding().interior_side() {
            Some(side) => side,
            None => return false,
        };
        corners.iter().enumerate().all(|(i, &v)| {
            matches!(strict_side(p, v, corners[(i + 1) % 3]), Some(s) if s == side)
        })
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::new(self.a, self.b).merged(&Aabb::new(self.c, self.c))
    }

    /// The same corners as a closed polygon ring. Coincident corners
    /// cannot close and are rejected.
    pub fn to_polygon(&self) -> Result<Polygon, GeomError> {
        Polygon::closed_from(&[self.a, self.b, self.c])
    }

    pub fn translated(&self, v: Vector) -> Triangle {
        Triangle::new(self.a + v, self.b + v, self.c + v)
    }

    pub fn rotated(&self, angle: f64) -> Triangle {
        Triangle::new(
            self.a.rotated(angle),
            self.b.rotated(angle),
            self.c.rotated(angle),
        )
    }

    pub fn scaled(&self, k: f64) -> Triangle {
        Triangle::new(self.a.scaled(k), self.b.scaled(k), self.c.scaled(k))
    }

    pub fn transformed(&self, t: &Transform) -> Triangle {
        Triangle::new(
            t.apply_point(self.a),
            t.apply_point(self.b),
            t.apply_point(self.c),
        )
    }
}

impl Circular for Triangle {
    fn position_count(&self) -> usize {
        3
    }

    fn next_index(&self, i: usize) -> usize {
        (i + 1) % 3
    }

    fn previous_index(&self, i: usize) -> usize {
        (i + 2) % 3
    }
}

impl std::fmt::Display for Triangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Triangle(({}, {}), ({}, {}), ({}, {}))",
            self.a.x(),
            self.a.y(),
            self.b.x(),
            self.b.y(),
            self.c.x(),
            self.c.y()
        )
    }
}
