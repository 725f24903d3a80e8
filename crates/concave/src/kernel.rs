//! Planar polygon helpers shared by the merge step: union and corridors.

use std::f64::consts::{FRAC_PI_2, PI};

use geo::{Area, BooleanOps};
use geo_types::{Coord, LineString, MultiPolygon, Polygon};

use crate::point::distance;

/// Union of all polygons; empty input gives an empty multipolygon.
///
/// Polygons with no area are skipped; the union of a single polygon still
/// goes through the boolean op so the result is normalised the same way.
pub fn union_all<'p, I>(polygons: I) -> MultiPolygon<f64>
where
    I: IntoIterator<Item = &'p Polygon<f64>>,
{
    let mut acc = MultiPolygon::new(Vec::new());
    for p in polygons {
        if p.unsigned_area() <= 0.0 {
            continue;
        }
        acc = acc.union(&MultiPolygon::new(vec![p.clone()]));
    }
    acc
}

/// First exterior coordinate of a polygon.
#[inline]
pub fn representative_coord(p: &Polygon<f64>) -> Option<Coord<f64>> {
    p.exterior().0.first().copied()
}

/// Buffer of the segment `a`–`b` with round caps: a stadium of half-width
/// `radius`, counter-clockwise. Each quarter circle uses `quadrant_segments`
/// pieces. Coincident endpoints give a circle.
pub fn round_capped_corridor(
    a: Coord<f64>,
    b: Coord<f64>,
    radius: f64,
    quadrant_segments: usize,
) -> Polygon<f64> {
    let q = quadrant_segments.max(1);
    let step = FRAC_PI_2 / q as f64;
    let len = distance(a, b);
    let mut ring = Vec::with_capacity(4 * q + 3);
    if len <= f64::EPSILON * (a.x.abs() + a.y.abs() + 1.0) {
        for i in 0..4 * q {
            ring.push(on_circle(a, radius, i as f64 * step));
        }
    } else {
        // right-hand normal of a → b
        let theta = (b.y - a.y).atan2(b.x - a.x) - FRAC_PI_2;
        for i in 0..=2 * q {
            ring.push(on_circle(b, radius, theta + i as f64 * step));
        }
        for i in 0..=2 * q {
            ring.push(on_circle(a, radius, theta + PI + i as f64 * step));
        }
    }
    if let Some(&first) = ring.first() {
        ring.push(first);
    }
    Polygon::new(LineString::new(ring), vec![])
}

#[inline]
fn on_circle(centre: Coord<f64>, r: f64, angle: f64) -> Coord<f64> {
    Coord {
        x: centre.x + r * angle.cos(),
        y: centre.y + r * angle.sin(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Contains;
    use geo_types::{coord, point, polygon};

    #[test]
    fn corridor_is_ccw_stadium() {
        let a = coord! { x: 0.0, y: 0.0 };
        let b = coord! { x: 10.0, y: 0.0 };
        let c = round_capped_corridor(a, b, 1.0, 8);
        assert_eq!(c.exterior().0.len(), 2 * 17 + 1);
        assert!(c.signed_area() > 0.0);
        // rectangle 10 × 2 plus a unit disc (polygonised, slightly smaller)
        let want = 20.0 + PI;
        assert!((c.unsigned_area() - want).abs() < 0.05);
        assert!(c.contains(&point!(x: 5.0, y: 0.9)));
        assert!(c.contains(&point!(x: -0.9, y: 0.0)));
        assert!(!c.contains(&point!(x: 5.0, y: 1.1)));
    }

    #[test]
    fn coincident_endpoints_give_circle() {
        let a = coord! { x: 3.0, y: 3.0 };
        let c = round_capped_corridor(a, a, 2.0, 4);
        assert_eq!(c.exterior().0.len(), 17);
        assert!((c.unsigned_area() - 4.0 * PI).abs() < 0.4);
    }

    #[test]
    fn union_merges_overlaps_and_keeps_disjoint() {
        let p = polygon![(x: 0.0, y: 0.0), (x: 2.0, y: 0.0), (x: 2.0, y: 2.0), (x: 0.0, y: 2.0)];
        let q = polygon![(x: 1.0, y: 1.0), (x: 3.0, y: 1.0), (x: 3.0, y: 3.0), (x: 1.0, y: 3.0)];
        let r = polygon![(x: 10.0, y: 10.0), (x: 11.0, y: 10.0), (x: 11.0, y: 11.0), (x: 10.0, y: 11.0)];
        let u = union_all([&p, &q, &r]);
        assert_eq!(u.0.len(), 2);
        assert!((u.unsigned_area() - 8.0).abs() < 1e-9);
        assert!(union_all(std::iter::empty()).0.is_empty());
        assert_eq!(representative_coord(&p), Some(coord! { x: 0.0, y: 0.0 }));
    }
}
