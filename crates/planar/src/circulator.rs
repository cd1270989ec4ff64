//! Cyclic traversal cursors over shape positions.
//!
//! Purpose
//! - Walk the vertex ring of any shape through the `Circular` capability
//!   trait. A cursor is an immutable snapshot: moving yields a new cursor,
//!   and the traversal mode decides which movements exist at all.

use crate::error::GeomError;

/// Cyclic position access a shape grants to circulators.
pub trait Circular {
    fn position_count(&self) -> usize;
    /// Successor index in ring order.
    fn next_index(&self, i: usize) -> usize;
    /// Predecessor index in ring order.
    fn previous_index(&self, i: usize) -> usize;
}

/// Movements a circulator may perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraversalMode {
    /// Successor steps only.
    ForwardOnly,
    /// Successor and predecessor steps.
    Bidirectional,
    /// Both step directions plus multi-step jumps.
    RandomAccess,
}

/// Snapshot cursor over a shape's cyclic positions.
///
/// The shape is only read; two cursors can compare positions exactly when
/// they traverse the same shape instance.
#[derive(Debug)]
pub struct Circulator<'a, S: Circular> {
    shape: &'a S,
    mode: TraversalMode,
    index: usize,
}

impl<S: Circular> Clone for Circulator<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Circular> Copy for Circulator<'_, S> {}

impl<'a, S: Circular> Circulator<'a, S> {
    /// Cursor at position `start`. An empty shape admits no circulator.
    pub fn new(shape: &'a S, mode: TraversalMode, start: usize) -> Result<Self, GeomError> {
        let count = shape.position_count();
        if start >= count {
            return Err(GeomError::OutOfRange {
                index: start,
                count,
            });
        }
        Ok(Self {
            shape,
            mode,
            index: start,
        })
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn mode(&self) -> TraversalMode {
        self.mode
    }

    #[inline]
    pub fn position_count(&self) -> usize {
        self.shape.position_count()
    }

    /// Step to the successor position; granted in every mode.
    pub fn advance(&self) -> Self {
        Self {
            index: self.shape.next_index(self.index),
            ..*self
        }
    }

    /// Step to the predecessor position.
    pub fn retreat(&self) -> Result<Self, GeomError> {
        if self.mode == TraversalMode::ForwardOnly {
            return Err(GeomError::UnsupportedOperation {
                mode: self.mode,
                op: "retreat",
            });
        }
        Ok(Self {
            index: self.shape.previous_index(self.index),
            ..*self
        })
    }

    /// Jump `n` successor steps at once; random access only.
    pub fn advance_by(&self, n: usize) -> Result<Self, GeomError> {
        if self.mode != TraversalMode::RandomAccess {
            return Err(GeomError::UnsupportedOperation {
                mode: self.mode,
                op: "advance_by",
            });
        }
        let mut i = self.index;
        for _ in 0..n {
            i = self.shape.next_index(i);
        }
        Ok(Self { index: i, ..*self })
    }

    /// Steps needed to reach `other`.
    ///
    /// Both cursors must traverse the same shape instance (pointer identity),
    /// otherwise `other` is unreachable. Forward-only cursors count successor
    /// steps; the other modes take the cheaper ring direction.
    pub fn distance_to(&self, other: &Circulator<'a, S>) -> Result<usize, GeomError> {
        if !std::ptr::eq(self.shape, other.shape) {
            return Err(GeomError::Unreachable);
        }
        let forward = self.steps_to(other.index, true)?;
        if self.mode == TraversalMode::ForwardOnly {
            return Ok(forward);
        }
        let backward = self.steps_to(other.index, false)?;
        Ok(forward.min(backward))
    }

    fn steps_to(&self, target: usize, forward: bool) -> Result<usize, GeomError> {
        let count = self.shape.position_count();
        let mut i = self.index;
        let mut n = 0usize;
        while i != target {
            i = if forward {
                self.shape.next_index(i)
            } else {
                self.shape.previous_index(i)
            };
            n += 1;
            if n > count {
                // A ring walk that never meets the target index.
                return Err(GeomError::Unreachable);
            }
        }
        Ok(n)
    }
}
