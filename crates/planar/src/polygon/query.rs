//! Closed-ring queries: area, winding, centroid, containment, convexity,
//! diagonals. Every query here reads the ring without mutating it; the
//! open-chain cases return `None` or `false` rather than guessing.

use crate::error::GeomError;
use crate::kernel::{orientation, strict_side, Direction, Orientation, Point, Vector, Winding};
use crate::locus::{Intersect, Intersection, Segment};
use crate::polygon::Polygon;
use crate::scalar::approx_zero;
use crate::shapes::Aabb;

impl Polygon {
    /// Shoelace area over a triangle fan from the first vertex. Positive
    /// for counterclockwise rings, `None` while the chain is open.
    pub fn signed_area(&self) -> Option<f64> {
        if !self.complete || self.verts.len() < 3 {
            return None;
        }
        let o = self.verts[0];
        let mut acc = 0.0;
        for i in 1..self.verts.len() - 1 {
            acc += o.vector_to(self.verts[i]).cross(o.vector_to(self.verts[i + 1]));
        }
        Some(0.5 * acc)
    }

    pub fn area(&self) -> Option<f64> {
        self.signed_area().map(f64::abs)
    }

    /// Traversal sense of the closed ring; zero-area rings report
    /// [`Winding::Collinear`].
    pub fn winding(&self) -> Option<Winding> {
        self.signed_area().map(Winding::from_signed_area)
    }

    /// Area-weighted centroid of the ring. A zero-area ring falls back to
    /// the vertex mean so the result stays on the figure.
    pub fn centroid(&self) -> Option<Point> {
        if !self.complete || self.verts.is_empty() {
            return None;
        }
        let o = self.verts[0];
        let n = self.verts.len();
        let mut acc_area = 0.0;
        let mut acc = Vector::zero();
        for i in 1..n.saturating_sub(1) {
            let u = o.vector_to(self.verts[i]);
            let w = o.vector_to(self.verts[i + 1]);
            let cross = u.cross(w);
            acc_area += cross;
            acc = acc + (u + w).scaled(cross / 3.0);
        }
        if approx_zero(acc_area) {
            let mut sum = Vector::zero();
            for v in &self.verts {
                sum = sum + o.vector_to(*v);
            }
            return Some(o + sum.scaled(1.0 / n as f64));
        }
        Some(o + acc.scaled(1.0 / acc_area))
    }

    /// Boundary-inclusive containment. Exact for convex rings; for a
    /// reflex ring the all-edges side test can reject interior points,
    /// never accept exterior ones.
    pub fn contains(&self, p: Point) -> bool {
        self.contains_impl(p, true)
    }

    /// Containment with the boundary excluded.
    pub fn contains_strict(&self, p: Point) -> bool {
        self.contains_impl(p, false)
    }

    fn contains_impl(&self, p: Point, boundary_counts: bool) -> bool {
        if !self.complete {
            return false;
        }
        if self.verts.iter().any(|v| *v == p) {
            return boundary_counts;
        }
        for i in 0..self.verts.len() {
            let e = self.edge_at(i);
            if !e.is_degenerate() && e.contains_point(p) {
                return boundary_counts;
            }
        }
        let side = match self.winding().and_then(|w| w.interior_side()) {
            Some(side) => side,
            None => return false,
        };
        for i in 0..self.verts.len() {
            let e = self.edge_at(i);
            if e.is_degenerate() {
                continue;
            }
            match strict_side(p, e.start, e.end) {
                Some(s) if s == side => {}
                _ => return false,
            }
        }
        true
    }

    /// Whether the ring turns with its own winding sense at vertex
    /// `index` (straight vertices count as convex). Open chains and
    /// zero-area rings report `false`.
    pub fn is_convex_at(&self, index: usize) -> Result<bool, GeomError> {
        let n = self.verts.len();
        if index >= n {
            return Err(GeomError::OutOfRange { index, count: n });
        }
        if !self.complete {
            return Ok(false);
        }
        let w = match self.winding() {
            Some(w) => w,
            None => return Ok(false),
        };
        let prev = self.verts[self.prev_in_ring(index)];
        let next = self.verts[self.next_in_ring(index)];
        let turn = match orientation(next, prev, self.verts[index]) {
            Ok(t) => t,
            Err(_) => return Ok(false),
        };
        Ok(match w {
            Winding::Ccw => turn != Orientation::Right,
            Winding::Cw => turn != Orientation::Left,
            Winding::Collinear => turn == Orientation::Collinear,
        })
    }

    pub fn is_convex(&self) -> bool {
        self.complete && (0..self.verts.len()).all(|i| matches!(self.is_convex_at(i), Ok(true)))
    }

    /// Whether the chord `i`-`j` is a diagonal: it must meet the boundary
    /// only at its two endpoints and leave both endpoints into the
    /// interior wedge. Ring neighbors and coincident endpoints never
    /// qualify.
    pub fn is_diagonal(&self, i: usize, j: usize) -> Result<bool, GeomError> {
        let n = self.verts.len();
        if i >= n {
            return Err(GeomError::OutOfRange { index: i, count: n });
        }
        if j >= n {
            return Err(GeomError::OutOfRange { index: j, count: n });
        }
        if !self.complete {
            return Ok(false);
        }
        if i == j || self.next_in_ring(i) == j || self.next_in_ring(j) == i {
            return Ok(false);
        }
        let chord = Segment::new(self.verts[i], self.verts[j]);
        if chord.is_degenerate() {
            return Ok(false);
        }
        for k in 0..n {
            let e = self.edge_at(k);
            if e.is_degenerate() {
                continue;
            }
            let incident =
                k == i || k == j || self.next_in_ring(k) == i || self.next_in_ring(k) == j;
            match chord.intersect(&e) {
                Ok(Some(Intersection::Point(p))) => {
                    if !incident || (p != self.verts[i] && p != self.verts[j]) {
                        return Ok(false);
                    }
                }
                Ok(Some(_)) => return Ok(false),
                Ok(None) | Err(_) => {}
            }
        }
        Ok(self.chord_enters_interior(i, j) && self.chord_enters_interior(j, i))
    }

    /// Axis-aligned box of the vertex set, open or closed.
    pub fn bounding_box(&self) -> Option<Aabb> {
        Aabb::from_points(&self.verts)
    }

    /// Whether the chord from vertex `at` toward vertex `to` starts out
    /// inside the interior angle at `at`. The wedge opens from the
    /// outgoing edge around to the incoming edge, against the winding.
    fn chord_enters_interior(&self, at: usize, to: usize) -> bool {
        let w = match self.winding() {
            Some(w) => w,
            None => return false,
        };
        let v = self.verts[at];
        let to_prev = match Direction::new(v.vector_to(self.verts[self.prev_in_ring(at)])) {
            Ok(d) => d,
            Err(_) => return false,
        };
        let to_next = match Direction::new(v.vector_to(self.verts[self.next_in_ring(at)])) {
            Ok(d) => d,
            Err(_) => return false,
        };
        let dir = match Direction::new(v.vector_to(self.verts[to])) {
            Ok(d) => d,
            Err(_) => return false,
        };
        match w {
            Winding::Ccw => dir.ccw_between(&to_next, &to_prev),
            Winding::Cw => dir.cw_between(&to_next, &to_prev),
            Winding::Collinear => false,
        }
    }
}
