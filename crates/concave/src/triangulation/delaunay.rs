//! Delaunay triangulation backed by `delaunator`.
//!
//! Halfedge `h` runs from `triangles[h]` to `triangles[next_halfedge(h)]`;
//! boundary halfedges have no twin (`EMPTY`). The winding of delaunator's
//! triangles is detected once, so lookups always return the triangle on the
//! interior side of a counter-clockwise boundary.

use std::collections::HashMap;

use delaunator::{next_halfedge, prev_halfedge, triangulate, Point as DPoint, EMPTY};
use geo_types::Coord;

use super::Triangulation;
use crate::point::OrdCoord;

/// Halfedge index into the delaunator arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HalfEdge(pub usize);

#[derive(Clone, Debug)]
pub struct DelaunayTriangulation {
    points: Vec<Coord<f64>>,
    vertex: HashMap<OrdCoord, usize>,
    triangles: Vec<usize>,
    halfedges: Vec<usize>,
    /// Directed `(from, to)` vertex pair → halfedge.
    directed: HashMap<(usize, usize), usize>,
    /// Triangles come out counter-clockwise.
    ccw: bool,
}

impl DelaunayTriangulation {
    /// Triangulate a deduplicated point set.
    pub fn triangulate(points: &[Coord<f64>]) -> Self {
        let d_points: Vec<DPoint> = points.iter().map(|c| DPoint { x: c.x, y: c.y }).collect();
        let t = triangulate(&d_points);
        let vertex = points
            .iter()
            .enumerate()
            .map(|(i, c)| (OrdCoord::from(*c), i))
            .collect();
        let directed = (0..t.triangles.len())
            .map(|h| ((t.triangles[h], t.triangles[next_halfedge(h)]), h))
            .collect();
        let ccw = match t.triangles.get(0..3) {
            Some(&[a, b, c]) => orient(points[a], points[b], points[c]) > 0.0,
            _ => true,
        };
        tracing::trace!(
            points = points.len(),
            triangles = t.triangles.len() / 3,
            ccw,
            "triangulated"
        );
        Self {
            points: points.to_vec(),
            vertex,
            triangles: t.triangles,
            halfedges: t.halfedges,
            directed,
            ccw,
        }
    }

    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.triangles.len() / 3
    }

    #[inline]
    pub fn points(&self) -> &[Coord<f64>] {
        &self.points
    }

    /// Walk the halfedges without a twin into one cycle, starting from the
    /// smallest vertex so the seed is reproducible.
    fn boundary_cycle(&self) -> Vec<usize> {
        let mut succ: HashMap<usize, usize> = HashMap::new();
        for (h, &twin) in self.halfedges.iter().enumerate() {
            if twin == EMPTY {
                let from = self.triangles[h];
                let to = self.triangles[next_halfedge(h)];
                if succ.insert(from, to).is_some() {
                    tracing::warn!(vertex = from, "boundary vertex with two outgoing edges");
                    return Vec::new();
                }
            }
        }
        let Some(&start) = succ
            .keys()
            .min_by_key(|&&v| OrdCoord::from(self.points[v]))
        else {
            return Vec::new();
        };
        let mut cycle = Vec::with_capacity(succ.len());
        let mut cur = start;
        loop {
            cycle.push(cur);
            match succ.get(&cur) {
                Some(&nxt) if nxt == start => break,
                Some(&nxt) if cycle.len() <= succ.len() => cur = nxt,
                _ => {
                    tracing::warn!(vertex = cur, "boundary does not close");
                    return Vec::new();
                }
            }
        }
        cycle
    }
}

impl Triangulation for DelaunayTriangulation {
    type Handle = HalfEdge;

    fn boundary(&self) -> Vec<Coord<f64>> {
        let mut cycle = self.boundary_cycle();
        if !self.ccw && cycle.len() > 1 {
            // keep the smallest vertex first after reversing
            cycle[1..].reverse();
        }
        cycle.into_iter().map(|v| self.points[v]).collect()
    }

    fn locate_edge(&self, start: Coord<f64>, end: Coord<f64>) -> Option<HalfEdge> {
        let s = *self.vertex.get(&OrdCoord::from(start))?;
        let e = *self.vertex.get(&OrdCoord::from(end))?;
        // a clockwise triangle keeps its interior on the right of its halfedges
        let key = if self.ccw { (s, e) } else { (e, s) };
        self.directed.get(&key).map(|&h| HalfEdge(h))
    }

    fn apex_of(&self, handle: HalfEdge) -> Coord<f64> {
        self.points[self.triangles[prev_halfedge(handle.0)]]
    }
}

#[inline]
fn orient(a: Coord<f64>, b: Coord<f64>, c: Coord<f64>) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}
