//! Oriented rectangle from an origin corner and two perpendicular sides.

use crate::circulator::Circular;
use crate::error::GeomError;
use crate::kernel::{Point, Vector};
use crate::polygon::Polygon;
use crate::scalar::{approx_zero, EPS};
use crate::shapes::Aabb;
use crate::transform::Transform;

/// Rectangle spanned by `origin + s*u + t*v` for `s, t` in `[0, 1]`.
///
/// Construction validates that the sides are non-zero and perpendicular,
/// and swaps them if needed so the corner walk `origin`, `origin + u`,
/// `origin + u + v`, `origin + v` runs counterclockwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    origin: Point,
    u: Vector,
    v: Vector,
}

impl Rect {
    pub fn new(origin: Point, u: Vector, v: Vector) -> Result<Rect, GeomError> {
        if u.is_zero() || v.is_zero() {
            return Err(GeomError::DegenerateInput {
                reason: "rectangle with a zero-length side",
            });
        }
        if u.dot(v).abs() > EPS * u.magnitude() * v.magnitude() {
            return Err(GeomError::InvalidArgument {
                reason: "rectangle sides must be perpendicular",
            });
        }
        if u.cross(v) < 0.0 {
            Ok(Rect {
                origin,
                u: v,
                v: u,
            })
        } else {
            Ok(Rect { origin, u, v })
        }
    }

    /// Axis-aligned rectangle between two opposite corners.
    pub fn axis_aligned(a: Point, b: Point) -> Result<Rect, GeomError> {
        let w = (b.x() - a.x()).abs();
        let h = (b.y() - a.y()).abs();
        if approx_zero(w) || approx_zero(h) {
            return Err(GeomError::DegenerateInput {
                reason: "axis-aligned rectangle with zero extent",
            });
        }
        Ok(Rect {
            origin: Point::new(a.x().min(b.x()), a.y().min(b.y())),
            u: Vector::new(w, 0.0),
            v: Vector::new(0.0, h),
        })
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[inline]
    pub fn side_u(&self) -> Vector {
        self.u
    }

    #[inline]
    pub fn side_v(&self) -> Vector {
        self.v
    }

    pub fn width(&self) -> f64 {
        self.u.magnitude()
    }

    pub fn height(&self) -> f64 {
        self.v.magnitude()
    }

    pub fn area(&self) -> f64 {
        self.u.cross(self.v).abs()
    }

    pub fn center(&self) -> Point {
        self.origin + (self.u + self.v).scaled(0.5)
    }

    /// Counterclockwise corner, starting from the origin corner.
    pub fn corner(&self, index: usize) -> Result<Point, GeomError> {
        match index {
            0 => Ok(self.origin),
            1 => Ok(self.origin + self.u),
            2 => Ok(self.origin + self.u + self.v),
            3 => Ok(self.origin + self.v),
            _ => Err(GeomError::OutOfRange { index, count: 4 }),
        }
    }

    /// Boundary-inclusive containment via projection onto both sides.
    pub fn contains(&self, p: Point) -> bool {
        self.contains_impl(p, EPS)
    }

    pub fn contains_strict(&self, p: Point) -> bool {
        self.contains_impl(p, -EPS)
    }

    fn contains_impl(&self, p: Point, slack: f64) -> bool {
        let w = self.origin.vector_to(p);
        let along_u = w.dot(self.u) / self.u.magnitude();
        let along_v = w.dot(self.v) / self.v.magnitude();
        along_u >= -slack
            && along_u <= self.width() + slack
            && along_v >= -slack
            && along_v <= self.height() + slack
    }

    /// The four corners as a closed, simple ring.
    pub fn to_polygon(&self) -> Polygon {
        let corners = [
            self.origin,
            self.origin + self.u,
            self.origin + self.u + self.v,
            self.origin + self.v,
        ];
        let mut poly = Polygon::new();
        for c in corners {
            poly.insert(c);
        }
        poly.insert(corners[0]);
        poly
    }

    pub fn bounding_box(&self) -> Aabb {
        let far = self.origin + self.u + self.v;
        Aabb::new(self.origin, far)
            .merged(&Aabb::new(self.origin + self.u, self.origin + self.v))
    }

    pub fn translated(&self, v: Vector) -> Rect {
        Rect {
            origin: self.origin + v,
            ..*self
        }
    }

    /// Rotation preserves side lengths and the right angle, so the result
    /// needs no re-validation.
    pub fn rotated(&self, angle: f64) -> Rect {
        Rect {
            origin: self.origin.rotated(angle),
            u: self.u.rotated(angle),
            v: self.v.rotated(angle),
        }
    }

    pub fn scaled(&self, k: f64) -> Result<Rect, GeomError> {
        if approx_zero(k) {
            return Err(GeomError::DegenerateInput {
                reason: "scaling a rectangle by zero",
            });
        }
        Ok(Rect {
            origin: self.origin.scaled(k),
            u: self.u.scaled(k),
            v: self.v.scaled(k),
        })
    }

    /// Image under an affine map. The map must keep the sides
    /// perpendicular and non-zero, otherwise the image is no rectangle
    /// and the constructor's error passes through.
    pub fn transformed(&self, t: &Transform) -> Result<Rect, GeomError> {
        Rect::new(
            t.apply_point(self.origin),
            t.apply_vector(self.u),
            t.apply_vector(self.v),
        )
    }
}

impl Circular for Rect {
    fn position_count(&self) -> usize {
        4
    }

    fn next_index(&self, i: usize) -> usize {
        (i + 1) % 4
    }

    fn previous_index(&self, i: usize) -> usize {
        (i + 3) % 4
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rect(({}, {}) + s({}, {}) + t({}, {}))",
            self.origin.x(),
            self.origin.y(),
            self.u.dx,
            self.u.dy,
            self.v.dx,
            self.v.dy
        )
    }
}
