//! Working set of the ring being dug: topology, edge index and coordinate lookup.
//!
//! All mutations go through this type so the edge index never holds a key
//! whose endpoints are no longer adjacent. `pop_longest` hands out a
//! `PoppedEdge` token that the mutating methods consume; a dig therefore
//! always starts from an edge that has already left the index.

use std::collections::HashMap;

use geo_types::Coord;

use crate::edges::{EdgeIndex, EdgeKey};
use crate::point::OrdCoord;
use crate::topology::{NodeId, Ring, RingArena};

/// Edge taken out of the index; `end` was `next(start)` when it was popped.
#[derive(Debug)]
pub struct PoppedEdge {
    start: NodeId,
    end: NodeId,
    length: f64,
}

impl PoppedEdge {
    #[inline]
    pub fn start(&self) -> NodeId {
        self.start
    }
    #[inline]
    pub fn end(&self) -> NodeId {
        self.end
    }
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }
}

pub struct Boundary<'a> {
    arena: &'a mut RingArena,
    ring: Ring,
    nodes: HashMap<OrdCoord, NodeId>,
    edges: EdgeIndex,
}

impl<'a> Boundary<'a> {
    /// Index every node and every edge of `ring`.
    pub fn index(arena: &'a mut RingArena, ring: Ring) -> Self {
        let mut nodes = HashMap::with_capacity(ring.len());
        let mut edges = EdgeIndex::new();
        for id in arena.iter(ring) {
            nodes.insert(OrdCoord::from(arena.coord(id)), id);
            edges.insert(EdgeKey::leaving(arena, id));
        }
        Self {
            arena,
            ring,
            nodes,
            edges,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ring.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }
    #[inline]
    pub fn ring(&self) -> Ring {
        self.ring
    }
    #[inline]
    pub fn indexed_edges(&self) -> usize {
        self.edges.len()
    }
    #[inline]
    pub fn next(&self, node: NodeId) -> NodeId {
        self.arena.next(node)
    }
    #[inline]
    pub fn prev(&self, node: NodeId) -> NodeId {
        self.arena.prev(node)
    }
    #[inline]
    pub fn coord(&self, node: NodeId) -> Coord<f64> {
        self.arena.coord(node)
    }

    /// Ring node at `coord`, if the coordinate is on this ring.
    #[inline]
    pub fn node_at(&self, coord: Coord<f64>) -> Option<NodeId> {
        self.nodes.get(&OrdCoord::from(coord)).copied()
    }

    pub fn pop_longest(&mut self) -> Option<PoppedEdge> {
        let key = self.edges.pop_longest()?;
        Some(PoppedEdge {
            start: key.node,
            end: self.arena.next(key.node),
            length: key.length(),
        })
    }

    fn reindex(&mut self, node: NodeId) {
        self.edges.remove_from(node);
        let fresh = EdgeKey::leaving(self.arena, node);
        self.edges.insert(fresh);
    }

    /// Normal dig: insert `apex` between the edge's endpoints and index the
    /// two new edges.
    pub fn dig(&mut self, edge: PoppedEdge, apex: Coord<f64>) -> NodeId {
        let on = self.arena.insert_after(&mut self.ring, edge.start, apex);
        self.nodes.insert(OrdCoord::from(apex), on);
        self.reindex(edge.start);
        self.reindex(on);
        on
    }

    /// Tri-corner on the end side (`apex == next(end)`): drop `end`, leaving
    /// `start → apex`.
    pub fn trim_end(&mut self, edge: PoppedEdge) {
        let end = edge.end;
        self.edges.remove_from(end);
        self.nodes.remove(&OrdCoord::from(self.arena.coord(end)));
        self.arena.remove(&mut self.ring, end);
        self.reindex(edge.start);
    }

    /// Tri-corner on the start side (`apex == prev(start)`): drop `start`,
    /// leaving `apex → end`.
    pub fn trim_start(&mut self, edge: PoppedEdge, apex: NodeId) {
        let start = edge.start;
        self.edges.remove_from(apex);
        self.nodes.remove(&OrdCoord::from(self.arena.coord(start)));
        self.arena.remove(&mut self.ring, start);
        self.reindex(apex);
    }

    /// Pinch: cut the ring at `apex` (a non-adjacent ring node). On success
    /// both rings are returned for re-queuing; on failure the untouched ring.
    pub fn split(self, edge: PoppedEdge, apex: NodeId) -> Result<(Ring, Ring), Ring> {
        let mut ring = self.ring;
        match self.arena.split(&mut ring, edge.start, edge.end, apex) {
            Some(other) => Ok((ring, other)),
            None => Err(ring),
        }
    }

    pub fn into_ring(self) -> Ring {
        self.ring
    }
}
