//! Parametric loci: lines, rays, segments, and their intersections.
//!
//! Purpose
//! - One parameterization `base + t·director` with three domains, one
//!   shared solver behind every pairing, and closest-point queries riding
//!   on the same solver.
//!
//! Code cross-refs: `kernel::{Point, Vector, strict_side}`, `intersect::Carrier`

pub mod intersect;
pub mod line;
pub mod ray;
pub mod segment;

pub use intersect::{Intersect, Intersection};
pub use line::Line;
pub use ray::Ray;
pub use segment::Segment;

#[cfg(test)]
mod tests;
