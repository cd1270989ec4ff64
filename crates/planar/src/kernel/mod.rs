//! Geometric kernel: points, vectors, directions, orientation.
//!
//! Purpose
//! - Small value types everything else builds on, with one equality policy
//!   per type: cartesian-eps for points, exact components for vectors,
//!   angular for directions.
//!
//! Code cross-refs: `locus` (carriers), `polygon` (winding), `transform`.

pub mod direction;
pub mod orient;
pub mod point;
pub mod vector;

pub use direction::Direction;
pub use orient::{
    orientation, orientation_eps, signed_parallelogram_area, strict_side, Orientation, Winding,
};
pub use point::Point;
pub use vector::Vector;
