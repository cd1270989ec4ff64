//! Mutable polygon with incrementally maintained validity.
//!
//! Purpose
//! - Keep the two derived flags (`complete`, `simple`) correct through
//!   single-vertex edits without re-scanning the whole ring: each edit
//!   re-checks only the edges it created or moved.
//!
//! Why incremental
//! - Insert and replace touch at most two edges, so a local check against
//!   the other edges is O(n) per edit. Only a polygon that is already
//!   not simple needs the full O(n²) rebuild after an edit, because a
//!   local check cannot prove that the edit cured the offense.
//!
//! Code cross-refs: `query` (closed-ring queries), `rand` (sampler),
//! `locus::Segment` (edge tests), `kernel::Point`

use crate::circulator::Circular;
use crate::error::GeomError;
use crate::kernel::{Point, Vector};
use crate::locus::{Intersect, Intersection, Segment};
use crate::scalar::approx_zero;
use crate::transform::Transform;

pub mod rand;

mod query;

pub use crate::kernel::Winding;


/// What a call to [`Polygon::insert`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertOutcome {
    /// Vertex appended to the open chain.
    Appended,
    /// Chain transitioned to a closed ring; no vertex was appended.
    Closed,
    /// No-op: polygon already closed, or a consecutive duplicate.
    Ignored,
}

/// Ordered vertex chain, open until an insert closes it into a ring.
///
/// `simple` tracks whether the edges meet only at shared adjacent vertices
/// and no vertex repeats; empty and single-vertex chains are vacuously
/// simple. The flag is maintained across edits, never recomputed on read.
#[derive(Clone, Debug)]
pub struct Polygon {
    verts: Vec<Point>,
    complete: bool,
    simple: bool,
}

impl Polygon {
    pub fn new() -> Self {
        Self {
            verts: Vec::new(),
            complete: false,
            simple: true,
        }
    }

    /// Closed ring from a vertex run, replaying [`Polygon::insert`] and a
    /// closing insert. Fewer than 3 distinct vertices cannot close.
    pub fn closed_from(points: &[Point]) -> Result<Polygon, GeomError> {
        if points.len() < 3 {
            return Err(GeomError::InvalidArgument {
                reason: "a closed polygon needs at least 3 vertices",
            });
        }
        let mut poly = Polygon::new();
        for &p in points {
            poly.insert(p);
        }
        if !poly.complete {
            poly.insert(points[0]);
        }
        if !poly.complete {
            return Err(GeomError::InvalidArgument {
                reason: "fewer than 3 distinct vertices",
            });
        }
        Ok(poly)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.verts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    #[inline]
    pub fn is_simple(&self) -> bool {
        self.simple
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.verts
    }

    pub fn vertex(&self, index: usize) -> Result<Point, GeomError> {
        self.verts
            .get(index)
            .copied()
            .ok_or(GeomError::OutOfRange {
                index,
                count: self.verts.len(),
            })
    }

    /// Number of edges: `n - 1` while open, `n` once the closing edge exists.
    pub fn edge_count(&self) -> usize {
        if self.complete {
            self.verts.len()
        } else {
            self.verts.len().saturating_sub(1)
        }
    }

    pub fn edge(&self, index: usize) -> Result<Segment, GeomError> {
        let count = self.edge_count();
        if index >= count {
            return Err(GeomError::OutOfRange { index, count });
        }
        Ok(self.edge_at(index))
    }

    /// Append a vertex, or close the chain when the vertex re-states a
    /// terminal one.
    ///
    /// Rules, in order:
    /// - a closed polygon ignores inserts;
    /// - with at least 3 vertices, a point equal to the first or the last
    ///   vertex closes the ring without appending;
    /// - a consecutive duplicate below 3 vertices is ignored;
    /// - anything else appends, and the new edge plus a duplicate-vertex
    ///   scan decide whether `simple` survives.
    pub fn insert(&mut self, p: Point) -> InsertOutcome {
        if self.complete {
            return InsertOutcome::Ignored;
        }
        let n = self.verts.len();
        if n >= 3 && (p == self.verts[0] || p == self.verts[n - 1]) {
            self.complete = true;
            if self.simple && self.ring_edge_conflicts(n - 1) {
                self.simple = false;
            }
            return InsertOutcome::Closed;
        }
        if n >= 1 && p == self.verts[n - 1] {
            return InsertOutcome::Ignored;
        }
        self.verts.push(p);
        if self.simple {
            let duplicate = self.verts[..n].iter().any(|q| *q == p);
            if duplicate || (n >= 2 && self.ring_edge_conflicts(n - 1)) {
                self.simple = false;
            }
        }
        InsertOutcome::Appended
    }

    /// Remove the vertex at `index` and return it.
    ///
    /// Removing from a closed ring re-opens it: the remaining chain runs
    /// from the removed vertex's successor around to its predecessor, so
    /// the surviving edge set is the old ring minus the two edges at the
    /// removed vertex and a simple polygon stays simple. Removing an
    /// interior vertex of an open chain joins its neighbors with one new
    /// edge, which is re-checked.
    pub fn delete(&mut self, index: usize) -> Result<Point, GeomError> {
        let n = self.verts.len();
        if index >= n {
            return Err(GeomError::OutOfRange { index, count: n });
        }
        let removed = self.verts[index];
        if self.complete {
            self.verts.rotate_left((index + 1) % n);
            self.verts.truncate(n - 1);
            self.complete = false;
            if !self.simple {
                self.simple = self.recompute_simple();
            }
        } else {
            self.verts.remove(index);
            if self.simple {
                if index > 0
                    && index < self.verts.len()
                    && self.ring_edge_conflicts(index - 1)
                {
                    self.simple = false;
                }
            } else {
                self.simple = self.recompute_simple();
            }
        }
        Ok(removed)
    }

    /// Swap the vertex at `index` for `p` and return the old vertex.
    /// Only the (at most two) edges touching the vertex are re-checked
    /// while the polygon is simple.
    pub fn replace(&mut self, index: usize, p: Point) -> Result<Point, GeomError> {
        let n = self.verts.len();
        if index >= n {
            return Err(GeomError::OutOfRange { index, count: n });
        }
        let old = self.verts[index];
        self.verts[index] = p;
        if self.simple {
            let duplicate = self
                .verts
                .iter()
                .enumerate()
                .any(|(k, q)| k != index && *q == p);
            if duplicate || self.touched_edge_conflicts(index) {
                self.simple = false;
            }
        } else {
            self.simple = self.recompute_simple();
        }
        Ok(old)
    }

    /// Back to the empty state.
    pub fn clear(&mut self) {
        self.verts.clear();
        self.complete = false;
        self.simple = true;
    }

    pub fn translated(&self, v: Vector) -> Polygon {
        self.mapped(|p| p.translated(v), true)
    }

    pub fn rotated(&self, angle: f64) -> Polygon {
        self.mapped(|p| p.rotated(angle), true)
    }

    pub fn scaled(&self, k: f64) -> Polygon {
        self.mapped(|p| p.scaled(k), !approx_zero(k))
    }

    pub fn transformed(&self, t: &Transform) -> Polygon {
        self.mapped(|p| t.apply_point(p), !approx_zero(t.determinant()))
    }

    /// Invertible maps preserve both flags; a collapsing map forces a
    /// simplicity rebuild.
    fn mapped(&self, f: impl Fn(Point) -> Point, invertible: bool) -> Polygon {
        let mut out = Polygon {
            verts: self.verts.iter().map(|&p| f(p)).collect(),
            complete: self.complete,
            simple: self.simple,
        };
        if !invertible {
            out.simple = out.recompute_simple();
        }
        out
    }

    /// Ring edge `(v_i, v_{i+1 mod n})`; open-chain callers stay below
    /// `n - 1`.
    fn edge_at(&self, i: usize) -> Segment {
        let n = self.verts.len();
        Segment::new(self.verts[i], self.verts[(i + 1) % n])
    }

    fn ring_edge_count(&self) -> usize {
        self.edge_count()
    }

    fn next_in_ring(&self, i: usize) -> usize {
        let n = self.verts.len();
        if i + 1 == n {
            0
        } else {
            i + 1
        }
    }

    fn prev_in_ring(&self, i: usize) -> usize {
        let n = self.verts.len();
        if i == 0 {
            n - 1
        } else {
            i - 1
        }
    }

    /// Whether edge `a` conflicts with any other current edge: any contact
    /// with a non-adjacent edge, or a collinear overlap beyond the shared
    /// vertex with an adjacent one.
    fn ring_edge_conflicts(&self, a: usize) -> bool {
        let m = self.ring_edge_count();
        let cand = self.edge_at(a);
        for j in 0..m {
            if j == a {
                continue;
            }
            let adjacent = if self.complete {
                (a + 1) % m == j || (j + 1) % m == a
            } else {
                a + 1 == j || j + 1 == a
            };
            let e = self.edge_at(j);
            if adjacent {
                if overlaps(&cand, &e) {
                    return true;
                }
            } else if touches(&cand, &e) {
                return true;
            }
        }
        false
    }

    /// Conflicts of the (at most two) edges incident to vertex `index`.
    fn touched_edge_conflicts(&self, index: usize) -> bool {
        let m = self.ring_edge_count();
        if m == 0 {
            return false;
        }
        if self.complete {
            let n = self.verts.len();
            let before = (index + n - 1) % n;
            self.ring_edge_conflicts(before) || self.ring_edge_conflicts(index)
        } else {
            (index > 0 && self.ring_edge_conflicts(index - 1))
                || (index < m && self.ring_edge_conflicts(index))
        }
    }

    /// Full O(n²) pass: duplicate vertices, then pairwise edge checks.
    fn recompute_simple(&self) -> bool {
        let n = self.verts.len();
        for i in 0..n {
            for j in (i + 1)..n {
                if self.verts[i] == self.verts[j] {
                    return false;
                }
            }
        }
        let m = self.ring_edge_count();
        for i in 0..m {
            for j in (i + 1)..m {
                let adjacent = if self.complete {
                    (i + 1) % m == j || (j + 1) % m == i
                } else {
                    i + 1 == j
                };
                let a = self.edge_at(i);
                let b = self.edge_at(j);
                if adjacent {
                    if overlaps(&a, &b) {
                        return false;
                    }
                } else if touches(&a, &b) {
                    return false;
                }
            }
        }
        true
    }
}

impl Default for Polygon {
    fn default() -> Self {
        Polygon::new()
    }
}

impl Circular for Polygon {
    fn position_count(&self) -> usize {
        self.verts.len()
    }

    fn next_index(&self, i: usize) -> usize {
        let n = self.verts.len();
        if n == 0 {
            0
        } else {
            (i + 1) % n
        }
    }

    fn previous_index(&self, i: usize) -> usize {
        let n = self.verts.len();
        if n == 0 {
            0
        } else if i == 0 {
            n - 1
        } else {
            i - 1
        }
    }
}

impl std::fmt::Display for Polygon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Polygon(")?;
        if !self.complete {
            write!(f, "open: ")?;
        }
        for (i, v) in self.verts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {})", v.x(), v.y())?;
        }
        write!(f, ")")
    }
}

/// Any contact between two chain edges. Degenerate edges cannot be tested
/// and report no contact; the duplicate-vertex scan covers them.
fn touches(a: &Segment, b: &Segment) -> bool {
    matches!(a.intersect(b), Ok(Some(_)))
}

/// Collinear overlap beyond a shared vertex. A point contact between
/// adjacent edges is the shared vertex itself and stays legal.
fn overlaps(a: &Segment, b: &Segment) -> bool {
    matches!(a.intersect(b), Ok(Some(Intersection::Segment(_))))
}
