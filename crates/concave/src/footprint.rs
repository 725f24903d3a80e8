//! Field footprint: the production path for GPS traces in WGS84 degrees.
//!
//! The digging radius is picked from the reported worked area: small plots
//! (under one mu, 666 m²) are dug with a finer radius than larger fields.
//! Outputs are returned as geometry plus `[lat, lon]` outline pairs, the
//! shape map front ends consume.

use std::time::Duration;

use geo_types::{Coord, Polygon};

use crate::criteria::Circumradius;
use crate::dig::DigCfg;
use crate::error::HullError;
use crate::hull::ConcaveHull;
use crate::merge::{Footprint, MergeCfg};

/// One mu in square metres.
pub const ONE_MU_M2: f64 = 666.0;
/// Digging radius (degrees) for plots under one mu.
pub const SMALL_FIELD_RADIUS: f64 = 1e-5;
/// Digging radius (degrees) for everything else, including unknown areas.
pub const FIELD_RADIUS: f64 = 1e-4;

/// Circumradius threshold for a field of `area_m2` square metres.
#[inline]
pub fn radius_for_area(area_m2: f64) -> f64 {
    if area_m2 > 0.0 && area_m2 < ONE_MU_M2 {
        SMALL_FIELD_RADIUS
    } else {
        FIELD_RADIUS
    }
}

/// Single concave polygon around `points` (`(lon, lat)` degrees).
///
/// Multi-part digging is off, so a pinching edge is kept rather than split.
/// `None` unless exactly one part survives.
pub fn concave_polygon(points: &[Coord<f64>], area_m2: f64) -> Result<Option<Polygon<f64>>, HullError> {
    let hull = ConcaveHull::from_points(points.iter().copied());
    hull.polygon(&Circumradius::new(radius_for_area(area_m2)), DigCfg::default())
}

/// Multi-part footprint of a worked field, stitched into one geometry.
///
/// `budget` overrides the default 5 s wall-clock limit.
pub fn field_footprint(
    points: &[Coord<f64>],
    area_m2: f64,
    budget: Option<Duration>,
) -> Result<Option<Footprint>, HullError> {
    let mut dig = DigCfg::multi_part();
    if let Some(b) = budget {
        dig = dig.with_time_budget(b);
    }
    let radius = radius_for_area(area_m2);
    tracing::debug!(points = points.len(), area_m2, radius, "field footprint");
    let hull = ConcaveHull::from_points(points.iter().copied());
    hull.footprint(&Circumradius::new(radius), dig, MergeCfg::default())
}

/// `[lat, lon]` pairs of an outline given as `(lon, lat)` coordinates.
pub fn lat_lon_pairs(outline: &[Coord<f64>]) -> Vec<[f64; 2]> {
    outline.iter().map(|c| [c.y, c.x]).collect()
}

/// Inverse of `lat_lon_pairs`; `None` for fewer than four pairs (no closed ring).
pub fn outline_from_lat_lon(pairs: &[[f64; 2]]) -> Option<Polygon<f64>> {
    if pairs.len() < 4 {
        return None;
    }
    let ring: Vec<Coord<f64>> = pairs.iter().map(|&[lat, lon]| Coord { x: lon, y: lat }).collect();
    Some(Polygon::new(ring.into(), vec![]))
}
