//! Circle with a validated radius.

use crate::error::GeomError;
use crate::kernel::{Point, Vector};
use crate::scalar::EPS;
use crate::shapes::Aabb;
use crate::transform::Transform;

/// Center plus non-negative finite radius. A zero radius is legal and
/// behaves as a single point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Result<Circle, GeomError> {
        if !radius.is_finite() {
            return Err(GeomError::InvalidArgument {
                reason: "circle radius must be finite",
            });
        }
        if radius < 0.0 {
            return Err(GeomError::InvalidArgument {
                reason: "circle radius must be non-negative",
            });
        }
        Ok(Circle { center, radius })
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    pub fn circumference(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.radius
    }

    /// Boundary-inclusive containment.
    pub fn contains(&self, p: Point) -> bool {
        self.center.distance_to(p) <= self.radius + EPS
    }

    pub fn contains_strict(&self, p: Point) -> bool {
        self.center.distance_to(p) < self.radius - EPS
    }

    pub fn on_boundary(&self, p: Point) -> bool {
        (self.center.distance_to(p) - self.radius).abs() <= EPS
    }

    /// Nearest boundary point. The center itself has no unique nearest
    /// point; it maps to the boundary point on the positive x axis.
    pub fn closest_point_to(&self, p: Point) -> Point {
        match self.center.vector_to(p).unit() {
            Ok(u) => self.center + u.scaled(self.radius),
            Err(_) => self.center + Vector::new(self.radius, 0.0),
        }
    }

    pub fn distance_to_point(&self, p: Point) -> f64 {
        (self.center.distance_to(p) - self.radius).abs()
    }

    pub fn bounding_box(&self) -> Aabb {
        let r = Vector::new(self.radius, self.radius);
        Aabb::new(self.center - r, self.center + r)
    }

    pub fn translated(&self, v: Vector) -> Circle {
        Circle {
            center: self.center + v,
            radius: self.radius,
        }
    }

    pub fn rotated(&self, angle: f64) -> Circle {
        Circle {
            center: self.center.rotated(angle),
            radius: self.radius,
        }
    }

    pub fn scaled(&self, k: f64) -> Circle {
        Circle {
            center: self.center.scaled(k),
            radius: self.radius * k.abs(),
        }
    }

    /// Image under an affine map, defined only when the map is a
    /// similarity; shears and anisotropic scales turn circles into
    /// ellipses and are rejected.
    pub fn transformed(&self, t: &Transform) -> Result<Circle, GeomError> {
        match t.similarity_scale() {
            Some(s) => Ok(Circle {
                center: t.apply_point(self.center),
                radius: self.radius * s,
            }),
            None => Err(GeomError::InvalidArgument {
                reason: "transform does not preserve circles",
            }),
        }
    }
}

impl std::fmt::Display for Circle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Circle(({}, {}), r = {})",
            self.center.x(),
            self.center.y(),
            self.radius
        )
    }
}
