//! Shared parametric intersection for lines, rays, and segments.
//!
//! Purpose
//! - One solver for two loci `base + t·director`: classify the pair as no
//!   contact, a unique point, or a collinear overlap, and hand back the
//!   most constrained locus for the overlap case.
//!
//! Numerics
//! - The parallel test compares the director cross product against `EPS`
//!   scaled by both magnitudes (a sine, not a raw determinant).
//! - Parameter slack is `EPS` divided by the director magnitude, so domain
//!   boundaries get a geometric tolerance rather than a parameter one.
//! - Collinear projections pivot on the larger director component.

use super::line::Line;
use super::ray::Ray;
use super::segment::Segment;
use crate::error::GeomError;
use crate::kernel::{Point, Vector};
use crate::scalar::EPS;

/// Intersection of two loci, reported as the most constrained description.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intersection {
    /// Single transversal point, or collinear domains touching in one point.
    Point(Point),
    /// Bounded collinear overlap.
    Segment(Segment),
    /// Half-bounded collinear overlap.
    Ray(Ray),
    /// Both operands share the whole carrier.
    Line(Line),
}

/// Pairwise intersection, uniform across all locus pairings.
pub trait Intersect<Rhs = Self> {
    /// `Ok(None)` when the loci stay apart; errors only for degenerate
    /// operands.
    fn intersect(&self, other: &Rhs) -> Result<Option<Intersection>, GeomError>;
}

/// A locus reduced to base, director, and parameter domain.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Carrier {
    pub base: Point,
    pub dir: Vector,
    pub domain: Domain,
}

/// Parameter domain of a carrier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Domain {
    /// `t ∈ (-∞, ∞)`: line.
    Full,
    /// `t ∈ [0, ∞)`: ray.
    Half,
    /// `t ∈ [0, 1]`: segment.
    Unit,
}

impl Domain {
    fn contains(self, t: f64, slack: f64) -> bool {
        match self {
            Domain::Full => true,
            Domain::Half => t >= -slack,
            Domain::Unit => t >= -slack && t <= 1.0 + slack,
        }
    }

    /// Interval bounds; `None` is unbounded on that side.
    fn bounds(self) -> (Option<f64>, Option<f64>) {
        match self {
            Domain::Full => (None, None),
            Domain::Half => (Some(0.0), None),
            Domain::Unit => (Some(0.0), Some(1.0)),
        }
    }
}

impl Carrier {
    #[inline]
    pub fn point_at(&self, t: f64) -> Point {
        self.base.translated(self.dir.scaled(t))
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.dir.is_zero()
    }

    /// Parameter of `p` along the director, pivoting on the larger
    /// component. Only meaningful when `p` lies on the carrier.
    fn project(&self, p: Point) -> f64 {
        let w = self.base.vector_to(p);
        if self.dir.dx.abs() >= self.dir.dy.abs() {
            w.dx / self.dir.dx
        } else {
            w.dy / self.dir.dy
        }
    }
}

/// Degeneracy gate shared by every [`Intersect`] impl.
pub(crate) fn intersect_checked(
    a: Carrier,
    b: Carrier,
) -> Result<Option<Intersection>, GeomError> {
    if a.is_degenerate() || b.is_degenerate() {
        return Err(GeomError::DegenerateInput {
            reason: "intersection with a degenerate locus",
        });
    }
    Ok(intersect_carriers(&a, &b))
}

/// Closest point of a carrier to `p`: the intersection with the carrier's
/// own perpendicular through `p` when that lands inside the domain, else the
/// nearer domain boundary.
pub(crate) fn closest_on_carrier(c: &Carrier, p: Point) -> Point {
    let perpendicular = Carrier {
        base: p,
        dir: c.dir.perpendicular(),
        domain: Domain::Full,
    };
    if let Some(Intersection::Point(q)) = intersect_carriers(c, &perpendicular) {
        return q;
    }
    match c.domain {
        Domain::Full | Domain::Half => c.base,
        Domain::Unit => {
            let end = c.point_at(1.0);
            if p.distance_to(c.base) <= p.distance_to(end) {
                c.base
            } else {
                end
            }
        }
    }
}

fn intersect_carriers(a: &Carrier, b: &Carrier) -> Option<Intersection> {
    let d = a.base.vector_to(b.base);
    let mag_a = a.dir.magnitude();
    let mag_b = b.dir.magnitude();
    let denom = a.dir.cross(b.dir);

    if denom.abs() > EPS * mag_a * mag_b {
        // Unique solution on the carriers; keep it only inside both domains.
        let t = d.cross(b.dir) / denom;
        let s = d.cross(a.dir) / denom;
        if a.domain.contains(t, EPS / mag_a) && b.domain.contains(s, EPS / mag_b) {
            return Some(Intersection::Point(a.point_at(t)));
        }
        return None;
    }

    // Parallel carriers at an offset never touch.
    if d.cross(a.dir).abs() > EPS * mag_a {
        return None;
    }

    // Collinear: clip both parameter domains on a's axis.
    let slack = EPS / mag_a;
    let t0 = a.project(b.base);
    let rate = if a.dir.dx.abs() >= a.dir.dy.abs() {
        b.dir.dx / a.dir.dx
    } else {
        b.dir.dy / a.dir.dy
    };
    let (b_lo, b_hi) = b.domain.bounds();
    let (b_lo, b_hi) = if rate > 0.0 {
        (b_lo.map(|s| t0 + s * rate), b_hi.map(|s| t0 + s * rate))
    } else {
        (b_hi.map(|s| t0 + s * rate), b_lo.map(|s| t0 + s * rate))
    };
    let (a_lo, a_hi) = a.domain.bounds();
    let lo = match (a_lo, b_lo) {
        (None, v) | (v, None) => v,
        (Some(x), Some(y)) => Some(x.max(y)),
    };
    let hi = match (a_hi, b_hi) {
        (None, v) | (v, None) => v,
        (Some(x), Some(y)) => Some(x.min(y)),
    };

    match (lo, hi) {
        (Some(lo), Some(hi)) if lo > hi + slack => None,
        (Some(lo), Some(hi)) if hi - lo <= slack => {
            Some(Intersection::Point(a.point_at(0.5 * (lo + hi))))
        }
        (Some(lo), Some(hi)) => Some(Intersection::Segment(Segment::new(
            a.point_at(lo),
            a.point_at(hi),
        ))),
        (Some(lo), None) => Some(Intersection::Ray(Ray::new(a.point_at(lo), a.dir))),
        (None, Some(hi)) => Some(Intersection::Ray(Ray::new(a.point_at(hi), -a.dir))),
        (None, None) => Some(Intersection::Line(Line::new(a.base, a.dir))),
    }
}

impl Intersect for Line {
    fn intersect(&self, other: &Line) -> Result<Option<Intersection>, GeomError> {
        intersect_checked(self.carrier(), other.carrier())
    }
}

impl Intersect<Ray> for Line {
    fn intersect(&self, other: &Ray) -> Result<Option<Intersection>, GeomError> {
        intersect_checked(self.carrier(), other.carrier())
    }
}

impl Intersect<Segment> for Line {
    fn intersect(&self, other: &Segment) -> Result<Option<Intersection>, GeomError> {
        intersect_checked(self.carrier(), other.carrier())
    }
}

impl Intersect<Line> for Ray {
    fn intersect(&self, other: &Line) -> Result<Option<Intersection>, GeomError> {
        intersect_checked(self.carrier(), other.carrier())
    }
}

impl Intersect for Ray {
    fn intersect(&self, other: &Ray) -> Result<Option<Intersection>, GeomError> {
        intersect_checked(self.carrier(), other.carrier())
    }
}

impl Intersect<Segment> for Ray {
    fn intersect(&self, other: &Segment) -> Result<Option<Intersection>, GeomError> {
        intersect_checked(self.carrier(), other.carrier())
    }
}

impl Intersect<Line> for Segment {
    fn intersect(&self, other: &Line) -> Result<Option<Intersection>, GeomError> {
        intersect_checked(self.carrier(), other.carrier())
    }
}

impl Intersect<Ray> for Segment {
    fn intersect(&self, other: &Ray) -> Result<Option<Intersection>, GeomError> {
        intersect_checked(self.carrier(), other.carrier())
    }
}

impl Intersect for Segment {
    fn intersect(&self, other: &Segment) -> Result<Option<Intersection>, GeomError> {
        intersect_checked(self.carrier(), other.carrier())
    }
}
