//! Removability criteria for boundary triangles.
//!
//! A criterion looks at a boundary edge `start → end` (counter-clockwise) and
//! the apex of the triangle behind it, and decides whether that triangle may
//! be dug out.
//!
//! - `Circumradius(R)`: alpha-shape rule. Removable iff the circumcircle radius
//!   exceeds `R`. `R = ∞` keeps the convex hull; `R → 0` digs everything
//!   reachable.
//! - `EdgeLength(L)`: chi rule. Removable iff the boundary edge is longer than
//!   `L`. Scale dependent.

use geo_types::Coord;
use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};

use crate::point::distance;

/// Decide whether triangle `(start, end, apex)` may be removed from the hull.
pub trait RemovalCriterion {
    fn removable(&self, start: Coord<f64>, end: Coord<f64>, apex: Coord<f64>) -> bool;
}

impl<C: RemovalCriterion + ?Sized> RemovalCriterion for &C {
    #[inline]
    fn removable(&self, start: Coord<f64>, end: Coord<f64>, apex: Coord<f64>) -> bool {
        (**self).removable(start, end, apex)
    }
}

/// Alpha-shape criterion with disc radius `radius`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circumradius {
    pub radius: f64,
}

impl Circumradius {
    #[inline]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl RemovalCriterion for Circumradius {
    #[inline]
    fn removable(&self, start: Coord<f64>, end: Coord<f64>, apex: Coord<f64>) -> bool {
        circumradius(start, end, apex) > self.radius
    }
}

/// Chi criterion with edge length threshold `length`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeLength {
    pub length: f64,
}

impl EdgeLength {
    #[inline]
    pub fn new(length: f64) -> Self {
        Self { length }
    }
}

impl RemovalCriterion for EdgeLength {
    #[inline]
    fn removable(&self, start: Coord<f64>, end: Coord<f64>, _apex: Coord<f64>) -> bool {
        distance(start, end) > self.length
    }
}

/// Either criterion, selectable at runtime (CLI, configs).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "threshold", rename_all = "snake_case")]
pub enum Criterion {
    Circumradius(f64),
    EdgeLength(f64),
}

impl RemovalCriterion for Criterion {
    fn removable(&self, start: Coord<f64>, end: Coord<f64>, apex: Coord<f64>) -> bool {
        match *self {
            Criterion::Circumradius(r) => Circumradius::new(r).removable(start, end, apex),
            Criterion::EdgeLength(l) => EdgeLength::new(l).removable(start, end, apex),
        }
    }
}

/// Circumcentre of a triangle; `None` for (near-)collinear input.
///
/// Solves `2 [ (b-a)ᵀ ; (c-a)ᵀ ] u = [ |b-a|² ; |c-a|² ]` for `u = centre - a`.
pub fn circumcenter(a: Coord<f64>, b: Coord<f64>, c: Coord<f64>) -> Option<Coord<f64>> {
    let ab = Vector2::new(b.x - a.x, b.y - a.y);
    let ac = Vector2::new(c.x - a.x, c.y - a.y);
    let m = Matrix2::new(ab.x, ab.y, ac.x, ac.y) * 2.0;
    let det = m.determinant();
    // relative to the edge scale so degrees and metres behave the same
    if !det.is_finite() || det.abs() <= 1e-12 * ab.norm() * ac.norm() {
        return None;
    }
    let rhs = Vector2::new(ab.norm_squared(), ac.norm_squared());
    let u = m.try_inverse()? * rhs;
    Some(Coord {
        x: a.x + u.x,
        y: a.y + u.y,
    })
}

/// Circumradius; `f64::INFINITY` for collinear triangles.
pub fn circumradius(a: Coord<f64>, b: Coord<f64>, c: Coord<f64>) -> f64 {
    match circumcenter(a, b, c) {
        Some(cen) => distance(cen, a),
        None => f64::INFINITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::coord;

    #[test]
    fn right_triangle_circumcentre_is_hypotenuse_midpoint() {
        let a = coord! { x: 0.0, y: 0.0 };
        let b = coord! { x: 4.0, y: 0.0 };
        let c = coord! { x: 0.0, y: 3.0 };
        let cen = circumcenter(a, b, c).unwrap();
        assert!((cen.x - 2.0).abs() < 1e-12 && (cen.y - 1.5).abs() < 1e-12);
        assert!((circumradius(a, b, c) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn collinear_has_infinite_radius() {
        let r = circumradius(
            coord! { x: 0.0, y: 0.0 },
            coord! { x: 1.0, y: 1.0 },
            coord! { x: 2.0, y: 2.0 },
        );
        assert!(r.is_infinite());
    }

    #[test]
    fn tiny_scale_triangles_are_not_collinear() {
        // ~1 m triangle in degrees
        let a = coord! { x: 116.40000, y: 39.90000 };
        let b = coord! { x: 116.40001, y: 39.90000 };
        let c = coord! { x: 116.40000, y: 39.90001 };
        let r = circumradius(a, b, c);
        assert!((r - (2e-10f64).sqrt() / 2.0).abs() < 1e-9);
    }

    #[test]
    fn circumradius_threshold_semantics() {
        let (s, e, o) = (
            coord! { x: 0.0, y: 0.0 },
            coord! { x: 2.0, y: 0.0 },
            coord! { x: 1.0, y: 1.0 },
        );
        // unit circumradius
        assert!(Circumradius::new(0.5).removable(s, e, o));
        assert!(!Circumradius::new(2.0).removable(s, e, o));
        assert!(!Circumradius::new(f64::INFINITY).removable(s, e, o));
    }

    #[test]
    fn edge_length_ignores_apex() {
        let (s, e) = (coord! { x: 0.0, y: 0.0 }, coord! { x: 3.0, y: 4.0 });
        let c = EdgeLength::new(4.9);
        assert!(c.removable(s, e, coord! { x: 100.0, y: 100.0 }));
        assert!(!EdgeLength::new(5.0).removable(s, e, coord! { x: 1.0, y: 1.0 }));
        assert!(Criterion::EdgeLength(4.9).removable(s, e, s));
    }
}
