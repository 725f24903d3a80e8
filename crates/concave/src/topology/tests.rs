use super::*;
use geo_types::{coord, Coord};

fn square(arena: &mut RingArena) -> Ring {
    arena
        .ring_from_coords([
            coord! { x: 0.0, y: 0.0 },
            coord! { x: 1.0, y: 0.0 },
            coord! { x: 1.0, y: 1.0 },
            coord! { x: 0.0, y: 1.0 },
        ])
        .unwrap()
}

fn walk(arena: &RingArena, ring: Ring) -> Vec<Coord<f64>> {
    arena.coords(ring)
}

#[test]
fn build_keeps_input_order_and_closes() {
    let mut arena = RingArena::new();
    let ring = square(&mut arena);
    assert_eq!(ring.len(), 4);
    assert_eq!(arena.count(ring), 4);
    let pts = walk(&arena, ring);
    assert_eq!(pts[0], coord! { x: 0.0, y: 0.0 });
    assert_eq!(pts[3], coord! { x: 0.0, y: 1.0 });
    // successor chain returns to the anchor, predecessor chain too
    let a = ring.anchor();
    let mut cur = a;
    for _ in 0..4 {
        cur = arena.next(cur);
    }
    assert_eq!(cur, a);
    for _ in 0..4 {
        cur = arena.prev(cur);
    }
    assert_eq!(cur, a);
}

#[test]
fn insert_after_and_remove_keep_links() {
    let mut arena = RingArena::new();
    let mut ring = square(&mut arena);
    let a = ring.anchor();
    let mid = arena.insert_after(&mut ring, a, coord! { x: 0.5, y: 0.2 });
    assert_eq!(ring.len(), 5);
    assert_eq!(arena.next(a), mid);
    assert_eq!(arena.prev(arena.next(mid)), mid);

    // removing the anchor re-seats it on the predecessor
    let back = arena.remove(&mut ring, a).unwrap();
    assert_eq!(ring.len(), 4);
    assert_eq!(ring.anchor(), back);
    assert!(!arena.is_live(a));
    assert_eq!(arena.next(back), mid);
    assert_eq!(arena.count(ring), 4);
}

#[test]
fn remove_last_node_empties_ring() {
    let mut arena = RingArena::new();
    let mut ring = arena.singleton(coord! { x: 2.0, y: 3.0 });
    let anchor = ring.anchor();
    assert_eq!(arena.remove(&mut ring, anchor), None);
    assert!(ring.is_empty());
    assert_eq!(arena.iter(ring).count(), 0);
}

#[test]
fn split_produces_two_closed_rings() {
    // a(0,0) b(4,0) c(4,2) o(2,1) d(0,2); cut a→b against o
    let mut arena = RingArena::new();
    let mut ring = arena
        .ring_from_coords([
            coord! { x: 0.0, y: 0.0 },
            coord! { x: 4.0, y: 0.0 },
            coord! { x: 4.0, y: 2.0 },
            coord! { x: 2.0, y: 1.0 },
            coord! { x: 0.0, y: 2.0 },
        ])
        .unwrap();
    let ids: Vec<NodeId> = arena.iter(ring).collect();
    let (a, b, o) = (ids[0], ids[1], ids[3]);
    let other = arena.split(&mut ring, a, b, o).unwrap();

    assert_eq!(ring.len(), 3);
    assert_eq!(other.len(), 3);
    assert_eq!(
        walk(&arena, ring),
        vec![
            coord! { x: 0.0, y: 0.0 },
            coord! { x: 2.0, y: 1.0 },
            coord! { x: 0.0, y: 2.0 },
        ]
    );
    assert_eq!(
        walk(&arena, other),
        vec![
            coord! { x: 4.0, y: 0.0 },
            coord! { x: 4.0, y: 2.0 },
            coord! { x: 2.0, y: 1.0 },
        ]
    );
    // the copy is a different node than the original apex
    let copy = arena.prev(other.anchor());
    assert_ne!(copy, o);
    assert_eq!(arena.coord(copy), arena.coord(o));
}

#[test]
fn split_rejects_non_adjacent_cut() {
    let mut arena = RingArena::new();
    let mut ring = square(&mut arena);
    let ids: Vec<NodeId> = arena.iter(ring).collect();
    assert!(arena.split(&mut ring, ids[0], ids[2], ids[3]).is_none());
    assert!(arena.split(&mut ring, ids[0], ids[1], ids[1]).is_none());
    assert_eq!(arena.count(ring), 4);
}

#[test]
fn polygon_is_closed() {
    let mut arena = RingArena::new();
    let ring = square(&mut arena);
    let poly = arena.polygon(ring);
    assert!(poly.exterior().is_closed());
    assert_eq!(poly.exterior().0.len(), 5);
}
