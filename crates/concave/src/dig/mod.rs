//! Digging engine: shrink a convex boundary inward, triangle by triangle.
//!
//! Purpose
//! - Start from the boundary of a triangulation and repeatedly remove the
//!   triangle behind the longest boundary edge while a `RemovalCriterion`
//!   allows it. The result is one or more tight rings around the points.
//!
//! Per edge, the apex `o` of the triangle behind `start → end` decides the move:
//! - `o` off the ring: dig, the ring becomes `start → o → end`.
//! - `o == next(end)`: tri-corner, `end` is cut off.
//! - `o == prev(start)`: tri-corner, `start` is cut off.
//! - `o` elsewhere on the ring: the dig would pinch the ring; either split it
//!   in two (multi-part) or keep the edge and go on with the others.
//!
//! Rings of three vertices with a removable edge left are dropped.
//!
//! References
//! - Duckham et al., "Efficient generation of simple polygons for
//!   characterizing the shape of a set of points in the plane" (chi shapes).
//! - Edelsbrunner, Kirkpatrick, Seidel, "On the shape of a set of points in
//!   the plane" (alpha shapes).

mod boundary;
mod engine;
mod types;

pub use boundary::{Boundary, PoppedEdge};
pub use engine::dig_hull;
pub use types::{DigCfg, DigStats, HullParts, RingOutcome, DEFAULT_TIME_BUDGET};
