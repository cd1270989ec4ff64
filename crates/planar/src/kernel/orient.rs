//! Orientation and winding predicates.
//!
//! Purpose
//! - Classify a point against a directed reference pair via the signed
//!   parallelogram area, with an explicit collinear band instead of a hard
//!   sign flip. Every sidedness and winding decision in the crate reduces
//!   to this predicate.

use super::point::Point;
use crate::error::GeomError;
use crate::scalar::{approx_zero_eps, EPS};

/// Side of a directed carrier `a → b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Left,
    Right,
    Collinear,
}

impl Orientation {
    /// Orientation seen from the reversed carrier `b → a`.
    pub fn reversed(&self) -> Orientation {
        match self {
            Orientation::Left => Orientation::Right,
            Orientation::Right => Orientation::Left,
            Orientation::Collinear => Orientation::Collinear,
        }
    }

    #[inline]
    pub fn is_collinear(&self) -> bool {
        matches!(self, Orientation::Collinear)
    }
}

/// Traversal sense of a closed ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    Ccw,
    Cw,
    /// Zero-area ring; the sense is defined, not guessed.
    Collinear,
}

impl Winding {
    /// Winding of a ring with the given signed area.
    pub fn from_signed_area(area: f64) -> Winding {
        if approx_zero_eps(area, EPS) {
            Winding::Collinear
        } else if area > 0.0 {
            Winding::Ccw
        } else {
            Winding::Cw
        }
    }

    pub fn reversed(&self) -> Winding {
        match self {
            Winding::Ccw => Winding::Cw,
            Winding::Cw => Winding::Ccw,
            Winding::Collinear => Winding::Collinear,
        }
    }

    /// Side on which the interior lies for ring edges traversed in this
    /// sense; `None` for zero-area rings.
    pub fn interior_side(&self) -> Option<Orientation> {
        match self {
            Winding::Ccw => Some(Orientation::Left),
            Winding::Cw => Some(Orientation::Right),
            Winding::Collinear => None,
        }
    }
}

/// Twice the signed area of the triangle `(a, b, p)`.
/// Positive when `p` lies left of the directed carrier `a → b`.
#[inline]
pub fn signed_parallelogram_area(a: Point, b: Point, p: Point) -> f64 {
    a.vector_to(b).cross(a.vector_to(p))
}

/// Classify `p` against the directed pair `a → b`, treating parallelogram
/// areas within `eps` of zero as collinear.
pub fn orientation_eps(p: Point, a: Point, b: Point, eps: f64) -> Result<Orientation, GeomError> {
    if a == b {
        return Err(GeomError::DegenerateInput {
            reason: "orientation against two coincident reference points",
        });
    }
    let area = signed_parallelogram_area(a, b, p);
    Ok(if approx_zero_eps(area, eps) {
        Orientation::Collinear
    } else if area > 0.0 {
        Orientation::Left
    } else {
        Orientation::Right
    })
}

/// [`orientation_eps`] with the default tolerance.
#[inline]
pub fn orientation(p: Point, a: Point, b: Point) -> Result<Orientation, GeomError> {
    orientation_eps(p, a, b, EPS)
}

/// Sidedness for point-vs-locus queries: `None` when the carrier is
/// degenerate or `p` coincides with one of its defining points, so callers
/// can report "not strictly positioned" without an error path.
pub fn strict_side(p: Point, a: Point, b: Point) -> Option<Orientation> {
    if a == b || p == a || p == b {
        return None;
    }
    orientation(p, a, b).ok()
}
