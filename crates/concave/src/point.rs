//! Totally ordered coordinates.
//!
//! `geo_types::Coord<f64>` has no `Ord`/`Hash`; digging needs both (dedup,
//! node lookup by coordinate, deterministic edge tie-breaks). `OrdCoord`
//! orders by x, then y.

use geo_types::Coord;
use ordered_float::OrderedFloat;

/// Coordinate with value equality and a total order (x first, then y).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrdCoord {
    pub x: OrderedFloat<f64>,
    pub y: OrderedFloat<f64>,
}

impl OrdCoord {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: OrderedFloat(x),
            y: OrderedFloat(y),
        }
    }
    #[inline]
    pub fn coord(self) -> Coord<f64> {
        Coord {
            x: self.x.0,
            y: self.y.0,
        }
    }
}

impl From<Coord<f64>> for OrdCoord {
    #[inline]
    fn from(c: Coord<f64>) -> Self {
        Self::new(c.x, c.y)
    }
}

impl From<OrdCoord> for Coord<f64> {
    #[inline]
    fn from(c: OrdCoord) -> Self {
        c.coord()
    }
}

/// Euclidean distance between two coordinates.
#[inline]
pub fn distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Sort and drop exact duplicates.
pub fn dedup_sorted(coords: &mut Vec<Coord<f64>>) {
    coords.sort_by_key(|c| OrdCoord::from(*c));
    coords.dedup_by_key(|c| OrdCoord::from(*c));
}
