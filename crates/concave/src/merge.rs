//! Post-processing of dug parts into one footprint.
//!
//! Steps: drop parts below a fraction of the aggregate area, union what
//! remains, and when the union is still disconnected, stitch consecutive
//! retained parts together with thin round-capped corridors.

use geo::Area;
use geo_types::{Coord, MultiPolygon, Polygon};
use serde::{Deserialize, Serialize};

use crate::kernel::{representative_coord, round_capped_corridor, union_all};

/// Merge configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MergeCfg {
    /// Parts smaller than this share of the summed part area are dropped.
    pub min_area_fraction: f64,
    /// Half-width of the stitching corridors (input units).
    pub corridor_width: f64,
    /// Segments per quarter circle of a corridor cap.
    pub quadrant_segments: usize,
}

impl Default for MergeCfg {
    fn default() -> Self {
        Self {
            min_area_fraction: 0.05,
            corridor_width: 1e-7,
            quadrant_segments: 8,
        }
    }
}

/// Merged hull geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct Footprint {
    /// Retained parts, in discovery order.
    pub parts: Vec<Polygon<f64>>,
    /// Union of parts (and corridors, if any were needed).
    pub geometry: MultiPolygon<f64>,
    /// Number of corridors added.
    pub corridors: usize,
}

impl Footprint {
    /// The merged polygon when the result is connected.
    pub fn polygon(&self) -> Option<&Polygon<f64>> {
        match self.geometry.0.as_slice() {
            [p] => Some(p),
            _ => None,
        }
    }

    /// Ordered, closed exterior outline of a connected result.
    pub fn outline(&self) -> Option<Vec<Coord<f64>>> {
        self.polygon().map(|p| p.exterior().0.clone())
    }

    pub fn area(&self) -> f64 {
        self.geometry.unsigned_area()
    }

    #[inline]
    pub fn is_connected(&self) -> bool {
        self.geometry.0.len() == 1
    }
}

/// Parts whose area reaches `fraction` of the summed area, order kept.
///
/// A single part is always kept.
pub fn filter_small_parts(parts: &[Polygon<f64>], fraction: f64) -> Vec<Polygon<f64>> {
    if parts.len() <= 1 {
        return parts.to_vec();
    }
    let areas: Vec<f64> = parts.iter().map(|p| p.unsigned_area()).collect();
    let floor = areas.iter().sum::<f64>() * fraction;
    parts
        .iter()
        .zip(&areas)
        .filter(|(_, a)| **a >= floor)
        .map(|(p, _)| p.clone())
        .collect()
}

/// Filter, union and stitch. `None` when nothing with area survives.
pub fn merge_parts(parts: &[Polygon<f64>], cfg: MergeCfg) -> Option<Footprint> {
    let kept = filter_small_parts(parts, cfg.min_area_fraction);
    let union = union_all(&kept);
    if union.0.is_empty() {
        tracing::debug!(parts = parts.len(), "no area left after merge");
        return None;
    }
    if union.0.len() == 1 {
        return Some(Footprint {
            parts: kept,
            geometry: union,
            corridors: 0,
        });
    }

    let anchors: Vec<Coord<f64>> = kept.iter().filter_map(representative_coord).collect();
    let corridors: Vec<Polygon<f64>> = anchors
        .windows(2)
        .map(|w| round_capped_corridor(w[1], w[0], cfg.corridor_width, cfg.quadrant_segments))
        .collect();
    let geometry = union_all(kept.iter().chain(&corridors));
    tracing::debug!(
        parts = parts.len(),
        kept = kept.len(),
        corridors = corridors.len(),
        pieces = geometry.0.len(),
        "parts stitched"
    );
    Some(Footprint {
        parts: kept,
        geometry,
        corridors: corridors.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::polygon;

    fn square(x: f64, y: f64, side: f64) -> Polygon<f64> {
        polygon![
            (x: x, y: y),
            (x: x + side, y: y),
            (x: x + side, y: y + side),
            (x: x, y: y + side)
        ]
    }

    #[test]
    fn tiny_parts_are_filtered() {
        let parts = [square(0.0, 0.0, 1.0), square(5.0, 5.0, 0.1), square(3.0, 2.0, 1.0)];
        let kept = filter_small_parts(&parts, 0.05);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0], parts[0]);
        assert_eq!(kept[1], parts[2]);
        // a lone part survives whatever its size
        assert_eq!(filter_small_parts(&parts[1..2], 0.05).len(), 1);
    }

    #[test]
    fn disjoint_parts_are_stitched_into_one() {
        let parts = [square(0.0, 0.0, 1.0), square(3.0, 2.0, 1.0), square(5.0, 5.0, 0.1)];
        let cfg = MergeCfg {
            corridor_width: 0.05,
            ..MergeCfg::default()
        };
        let fp = merge_parts(&parts, cfg).unwrap();
        assert_eq!(fp.parts.len(), 2);
        assert_eq!(fp.corridors, 1);
        assert!(fp.is_connected());
        let outline = fp.outline().unwrap();
        assert_eq!(outline.first(), outline.last());
        // two unit squares plus a thin corridor
        assert!(fp.area() > 2.0 && fp.area() < 2.5);
    }

    #[test]
    fn overlapping_parts_need_no_corridor() {
        let parts = [square(0.0, 0.0, 2.0), square(1.0, 1.0, 2.0)];
        let fp = merge_parts(&parts, MergeCfg::default()).unwrap();
        assert_eq!(fp.corridors, 0);
        assert!((fp.area() - 7.0).abs() < 1e-9);
        assert!(fp.polygon().is_some());
    }

    #[test]
    fn nothing_to_merge() {
        assert!(merge_parts(&[], MergeCfg::default()).is_none());
    }
}
