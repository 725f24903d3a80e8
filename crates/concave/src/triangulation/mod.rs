//! Triangulation service consumed by the digging engine.
//!
//! The engine never looks inside the triangulation. It needs four things:
//! the initial boundary, the triangle behind a boundary edge, that
//! triangle's apex, and whether a vertex is an artificial frame vertex.
//!
//! `DelaunayTriangulation` backs the trait with the `delaunator` crate; tests
//! plug in hand-built tables.

mod delaunay;

pub use delaunay::{DelaunayTriangulation, HalfEdge};

use geo_types::Coord;

/// Opaque triangulation of a planar point set.
pub trait Triangulation {
    /// Handle to a triangle located through one of its edges.
    type Handle: Copy;

    /// Boundary vertices in counter-clockwise order, open (first != last),
    /// frame vertices excluded. Empty when the input is degenerate.
    fn boundary(&self) -> Vec<Coord<f64>>;

    /// Triangle lying to the left of the directed edge `start → end`.
    fn locate_edge(&self, start: Coord<f64>, end: Coord<f64>) -> Option<Self::Handle>;

    /// Vertex of `handle`'s triangle opposite to the edge it was located by.
    fn apex_of(&self, handle: Self::Handle) -> Coord<f64>;

    /// Artificial vertex added by the triangulator to bound its construction.
    fn is_frame_vertex(&self, _coord: Coord<f64>) -> bool {
        false
    }
}
