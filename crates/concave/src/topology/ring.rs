//! Arena of boundary nodes and circular ring handles.

use geo_types::{Coord, LineString, Polygon};

/// Stable index of a node in a `RingArena`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

#[derive(Clone, Copy, Debug)]
struct Node {
    coord: Coord<f64>,
    prev: NodeId,
    next: NodeId,
    live: bool,
}

/// Handle to one closed ring in the arena.
///
/// `anchor` is any live member; it is re-seated when the anchor itself is removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ring {
    anchor: NodeId,
    len: usize,
}

impl Ring {
    #[inline]
    pub fn anchor(&self) -> NodeId {
        self.anchor
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Owner of all boundary nodes of one hull computation.
///
/// Invariants:
/// - Every live node belongs to exactly one ring; following `next` from it
///   returns to it.
/// - Removed nodes are tombstoned, never reused, so `NodeId`s stay stable.
#[derive(Clone, Debug, Default)]
pub struct RingArena {
    nodes: Vec<Node>,
}

impl RingArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(n),
        }
    }

    fn push_node(&mut self, coord: Coord<f64>, prev: NodeId, next: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            coord,
            prev,
            next,
            live: true,
        });
        id
    }

    /// Single-node ring (self loop).
    pub fn singleton(&mut self, coord: Coord<f64>) -> Ring {
        let id = NodeId(self.nodes.len());
        self.push_node(coord, id, id);
        Ring { anchor: id, len: 1 }
    }

    /// Build a ring from an open coordinate sequence (first != last).
    pub fn ring_from_coords<I>(&mut self, coords: I) -> Option<Ring>
    where
        I: IntoIterator<Item = Coord<f64>>,
    {
        let mut iter = coords.into_iter();
        let mut ring = self.singleton(iter.next()?);
        let first = ring.anchor;
        for c in iter {
            self.append(&mut ring, c);
        }
        ring.anchor = first;
        Some(ring)
    }

    /// Insert after the anchor and move the anchor onto the new node.
    pub fn append(&mut self, ring: &mut Ring, coord: Coord<f64>) -> NodeId {
        let id = self.insert_after(ring, ring.anchor, coord);
        ring.anchor = id;
        id
    }

    /// Insert a new node holding `coord` directly after `node`.
    pub fn insert_after(&mut self, ring: &mut Ring, node: NodeId, coord: Coord<f64>) -> NodeId {
        debug_assert!(self.is_live(node));
        let next = self.next(node);
        let id = self.push_node(coord, node, next);
        self.nodes[node.0].next = id;
        self.nodes[next.0].prev = id;
        ring.len += 1;
        id
    }

    /// Unlink `node`. Returns a surviving neighbour (its predecessor), or
    /// `None` when the ring became empty.
    pub fn remove(&mut self, ring: &mut Ring, node: NodeId) -> Option<NodeId> {
        debug_assert!(self.is_live(node));
        let prev = self.prev(node);
        let next = self.next(node);
        let n = &mut self.nodes[node.0];
        n.live = false;
        n.prev = node;
        n.next = node;
        ring.len = ring.len.saturating_sub(1);
        if prev == node {
            ring.len = 0;
            return None;
        }
        self.nodes[prev.0].next = next;
        self.nodes[next.0].prev = prev;
        if ring.anchor == node {
            ring.anchor = prev;
        }
        Some(prev)
    }

    /// Cut edge `a → b` (with `b == next(a)`) against the boundary node `o`.
    ///
    /// Afterwards `ring` holds `a → o → …` and the returned ring holds
    /// `o' → b → …`, where `o'` is a fresh copy of `o` taking over `o`'s old
    /// predecessor. Returns `None` when `b` does not follow `a`, when `o` is one
    /// of the cut endpoints, or when the ring has fewer than 3 nodes.
    pub fn split(&mut self, ring: &mut Ring, a: NodeId, b: NodeId, o: NodeId) -> Option<Ring> {
        if self.next(a) != b || o == a || o == b {
            return None;
        }
        if ring.len < 3 {
            ring.len = self.count(*ring);
            if ring.len < 3 {
                return None;
            }
        }
        let o_prev = self.prev(o);
        let o2 = self.push_node(self.coord(o), o_prev, b);
        self.nodes[o_prev.0].next = o2;
        self.nodes[b.0].prev = o2;
        self.nodes[a.0].next = o;
        self.nodes[o.0].prev = a;
        ring.anchor = a;
        ring.len = self.count(*ring);
        let mut other = Ring { anchor: b, len: 0 };
        other.len = self.count(other);
        Some(other)
    }

    #[inline]
    pub fn next(&self, node: NodeId) -> NodeId {
        self.nodes[node.0].next
    }
    #[inline]
    pub fn prev(&self, node: NodeId) -> NodeId {
        self.nodes[node.0].prev
    }
    #[inline]
    pub fn coord(&self, node: NodeId) -> Coord<f64> {
        self.nodes[node.0].coord
    }
    #[inline]
    pub fn is_live(&self, node: NodeId) -> bool {
        self.nodes.get(node.0).is_some_and(|n| n.live)
    }

    /// Recount a ring by forward traversal.
    pub fn count(&self, ring: Ring) -> usize {
        if !self.is_live(ring.anchor) {
            return 0;
        }
        let mut n = 1;
        let mut cur = self.next(ring.anchor);
        while cur != ring.anchor {
            n += 1;
            cur = self.next(cur);
            if n > self.nodes.len() {
                // broken chain; never closes
                break;
            }
        }
        n
    }

    /// Forward traversal starting at the anchor.
    pub fn iter(&self, ring: Ring) -> RingIter<'_> {
        RingIter {
            arena: self,
            start: ring.anchor,
            cur: if ring.is_empty() { None } else { Some(ring.anchor) },
        }
    }

    /// Open coordinate sequence of a ring, anchor first.
    pub fn coords(&self, ring: Ring) -> Vec<Coord<f64>> {
        self.iter(ring).map(|id| self.coord(id)).collect()
    }

    /// Closed ring (first == last) as a polygon without holes.
    pub fn polygon(&self, ring: Ring) -> Polygon<f64> {
        let mut coords = self.coords(ring);
        if let Some(&first) = coords.first() {
            coords.push(first);
        }
        Polygon::new(LineString::new(coords), vec![])
    }
}

/// Iterator over the node ids of one ring.
pub struct RingIter<'a> {
    arena: &'a RingArena,
    start: NodeId,
    cur: Option<NodeId>,
}

impl Iterator for RingIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let cur = self.cur?;
        let nxt = self.arena.next(cur);
        self.cur = if nxt == self.start { None } else { Some(nxt) };
        Some(cur)
    }
}
