//! Axis-aligned bounding box.

use crate::circulator::Circular;
use crate::error::GeomError;
use crate::kernel::{Point, Vector};
use crate::scalar::EPS;
use crate::transform::Transform;

/// Axis-aligned box kept normalized: `min` is the lower-left corner,
/// `max` the upper-right, componentwise `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    min: Point,
    max: Point,
}

impl Aabb {
    /// Box spanning two corner points, given in any order.
    pub fn new(a: Point, b: Point) -> Aabb {
        Aabb {
            min: Point::new(a.x().min(b.x()), a.y().min(b.y())),
            max: Point::new(a.x().max(b.x()), a.y().max(b.y())),
        }
    }

    /// Tight box around a point set, `None` when the set is empty.
    pub fn from_points(points: &[Point]) -> Option<Aabb> {
        let (first, rest) = points.split_first()?;
        let mut lo = (first.x(), first.y());
        let mut hi = lo;
        for p in rest {
            lo = (lo.0.min(p.x()), lo.1.min(p.y()));
            hi = (hi.0.max(p.x()), hi.1.max(p.y()));
        }
        Some(Aabb {
            min: Point::new(lo.0, lo.1),
            max: Point::new(hi.0, hi.1),
        })
    }

    #[inline]
    pub fn min(&self) -> Point {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Point {
        self.max
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x() - self.min.x()
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y() - self.min.y()
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn center(&self) -> Point {
        self.min.midpoint(self.max)
    }

    /// Counterclockwise corner, starting from `min`.
    pub fn corner(&self, index: usize) -> Result<Point, GeomError> {
        match index {
            0 => Ok(self.min),
            1 => Ok(Point::new(self.max.x(), self.min.y())),
            2 => Ok(self.max),
            3 => Ok(Point::new(self.min.x(), self.max.y())),
            _ => Err(GeomError::OutOfRange { index, count: 4 }),
        }
    }

    pub fn contains_point(&self, p: Point) -> bool {
        p.x() >= self.min.x() - EPS
            && p.x() <= self.max.x() + EPS
            && p.y() >= self.min.y() - EPS
            && p.y() <= self.max.y() + EPS
    }

    pub fn contains(&self, other: &Aabb) -> bool {
        self.contains_point(other.min) && self.contains_point(other.max)
    }

    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x() <= other.max.x() + EPS
            && other.min.x() <= self.max.x() + EPS
            && self.min.y() <= other.max.y() + EPS
            && other.min.y() <= self.max.y() + EPS
    }

    /// Smallest box covering both operands.
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: Point::new(
                self.min.x().min(other.min.x()),
                self.min.y().min(other.min.y()),
            ),
            max: Point::new(
                self.max.x().max(other.max.x()),
                self.max.y().max(other.max.y()),
            ),
        }
    }

    /// Grow (or, for negative margins, shrink) on all four sides. A margin
    /// that swallows the box renormalizes the corners.
    pub fn expanded(&self, margin: f64) -> Aabb {
        let d = Vector::new(margin, margin);
        Aabb::new(self.min - d, self.max + d)
    }

    pub fn translated(&self, v: Vector) -> Aabb {
        Aabb {
            min: self.min + v,
            max: self.max + v,
        }
    }

    pub fn scaled(&self, k: f64) -> Aabb {
        Aabb::new(self.min.scaled(k), self.max.scaled(k))
    }

    /// Box of the rotated corners. Axis alignment does not survive the
    /// rotation itself, so the result is the cover of the rotated shape.
    pub fn rotated(&self, angle: f64) -> Aabb {
        self.covered_under(|p| p.rotated(angle))
    }

    /// Box of the transformed corners.
    pub fn transformed(&self, t: &Transform) -> Aabb {
        self.covered_under(|p| t.apply_point(p))
    }

    fn covered_under(&self, f: impl Fn(Point) -> Point) -> Aabb {
        let c0 = f(self.min);
        let mut lo = (c0.x(), c0.y());
        let mut hi = lo;
        let rest = [
            f(Point::new(self.max.x(), self.min.y())),
            f(self.max),
            f(Point::new(self.min.x(), self.max.y())),
        ];
        for p in rest {
            lo = (lo.0.min(p.x()), lo.1.min(p.y()));
            hi = (hi.0.max(p.x()), hi.1.max(p.y()));
        }
        Aabb {
            min: Point::new(lo.0, lo.1),
            max: Point::new(hi.0, hi.1),
        }
    }
}

impl Circular for Aabb {
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

impl std::fmt::Display for Aabb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Aabb(({}, {}) .. ({}, {}))",
            self.min.x(),
            self.min.y(),
            self.max.x(),
            self.max.y()
        )
    }
}
