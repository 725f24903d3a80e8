//! Edge priority index: boundary edges ordered by length.
//!
//! Keys are `(length, start, end, node)`; equal lengths fall back to the
//! coordinate order so the pop order is reproducible across runs. Keys are
//! immutable once inserted: a topology change removes the stale key and
//! inserts a fresh one (see `crate::dig::Boundary`).

use std::collections::{BTreeSet, HashMap};

use ordered_float::OrderedFloat;

use crate::point::{distance, OrdCoord};
use crate::topology::{NodeId, RingArena};

/// Boundary edge `node → next(node)` frozen at insertion time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey {
    pub length: OrderedFloat<f64>,
    pub start: OrdCoord,
    pub end: OrdCoord,
    pub node: NodeId,
}

impl EdgeKey {
    /// Key for the edge leaving `node` in its current ring.
    pub fn leaving(arena: &RingArena, node: NodeId) -> Self {
        let s = arena.coord(node);
        let e = arena.coord(arena.next(node));
        Self {
            length: OrderedFloat(distance(s, e)),
            start: s.into(),
            end: e.into(),
            node,
        }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length.0
    }
}

/// Ordered set of boundary edges plus a start-node lookup for O(log n) removal.
///
/// Invariant: at most one key per start node (a node has one outgoing edge).
#[derive(Clone, Debug, Default)]
pub struct EdgeIndex {
    ordered: BTreeSet<EdgeKey>,
    by_start: HashMap<NodeId, EdgeKey>,
}

impl EdgeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert; refuses (returns false) when `key.node` already has an indexed edge.
    pub fn insert(&mut self, key: EdgeKey) -> bool {
        if self.by_start.contains_key(&key.node) {
            return false;
        }
        self.by_start.insert(key.node, key);
        self.ordered.insert(key);
        true
    }

    /// Remove the edge leaving `node`, if indexed.
    pub fn remove_from(&mut self, node: NodeId) -> Option<EdgeKey> {
        let key = self.by_start.remove(&node)?;
        self.ordered.remove(&key);
        Some(key)
    }

    /// Remove and return the longest edge.
    pub fn pop_longest(&mut self) -> Option<EdgeKey> {
        let key = self.ordered.pop_last()?;
        self.by_start.remove(&key.node);
        Some(key)
    }

    #[inline]
    pub fn contains_from(&self, node: NodeId) -> bool {
        self.by_start.contains_key(&node)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}
