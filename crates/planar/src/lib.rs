//! Planar geometry kernel.
//!
//! Points, vectors, and directions with exact-ish predicates on top; lines,
//! rays, and segments sharing one parametric intersection solver; polygons
//! that keep their completeness and simplicity flags current through edits;
//! and bounded shapes with containment and transform queries.
//!
//! Tolerances follow one convention crate-wide: comparisons use the default
//! band from [`scalar::EPS`], and every predicate that admits a custom band
//! has an `_eps` variant next to it.

pub mod circulator;
pub mod error;
pub mod kernel;
pub mod locus;
pub mod polygon;
pub mod scalar;
pub mod shapes;
pub mod transform;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::GeomError;
pub use kernel::{orientation, Direction, Orientation, Point, Vector, Winding};
pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::circulator::{Circular, Circulator, TraversalMode};
    pub use crate::error::GeomError;
    pub use crate::kernel::{
        orientation, signed_parallelogram_area, strict_side, Direction, Orientation, Point,
        Vector, Winding,
    };
    pub use crate::locus::{Intersect, Intersection, Line, Ray, Segment};
    pub use crate::polygon::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::polygon::{InsertOutcome, Polygon};
    pub use crate::shapes::{Aabb, Circle, Rect, Triangle};
    pub use crate::transform::Transform;
    pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};
}
