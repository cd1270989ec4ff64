//! Bounded shape primitives.
//!
//! Purpose
//! - Triangle, circle, rectangle, and axis-aligned box with the queries
//!   they share: containment, area, bounding boxes, and rigid or affine
//!   images. Shapes with an invariant validate it at construction and
//!   keep their fields private; [`Triangle`] has none and stays plain.
//!
//! Code cross-refs: `kernel` (predicates), `polygon` (ring conversion),
//! `circulator` (corner traversal)

pub mod bbox;
pub mod circle;
pub mod rect;
pub mod triangle;

pub use bbox::Aabb;
pub use circle::Circle;
pub use rect::Rect;
pub use triangle::Triangle;
