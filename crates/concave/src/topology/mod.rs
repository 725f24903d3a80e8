//! Boundary topology: circular doubly-linked rings over a node arena.
//!
//! Purpose
//! - Hold the working hull while it is dug: insertion of apices, trimming of
//!   tri-corners, and splitting one ring into two when a dig pinches it.
//!
//! Layout
//! - Nodes live in a `RingArena` and are addressed by stable `NodeId`s; a
//!   `Ring` is a small `Copy` handle (any member + size). Splitting allocates
//!   one copied node and never invalidates existing ids.
//!
//! Code cross-refs: `crate::dig::Boundary` (keeps the edge index in sync),
//! `crate::edges::EdgeIndex`.

mod ring;

pub use ring::{NodeId, Ring, RingArena, RingIter};

#[cfg(test)]
mod tests;
