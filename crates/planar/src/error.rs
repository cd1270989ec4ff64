//! Error taxonomy shared across the crate.
//!
//! Every fallible operation reports one of these variants. Expected-empty
//! outcomes (no intersection, queries on an open polygon) are `Option`s or
//! enum values, never errors.

use crate::circulator::TraversalMode;

/// Failure modes of geometric construction, queries, and traversal.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeomError {
    /// Input collapses the dimensionality an operation needs.
    #[error("degenerate input: {reason}")]
    DegenerateInput { reason: &'static str },
    /// Index outside a shape's position range.
    #[error("index {index} out of range ({count} positions)")]
    OutOfRange { index: usize, count: usize },
    /// Movement not granted by a circulator's traversal mode.
    #[error("{op} is not available in {mode:?} mode")]
    UnsupportedOperation {
        mode: TraversalMode,
        op: &'static str,
    },
    /// Circulators bound to different shape instances.
    #[error("positions lie on different shapes")]
    Unreachable,
    /// Argument outside an operation's documented domain.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },
}
