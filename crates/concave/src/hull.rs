//! One-stop entry point: prepared points + triangulation, dug on request.
//!
//! `ConcaveHull` triangulates once; every `dig`/`polygon`/`footprint` call
//! runs a fresh, independent computation over the shared triangulation, so
//! several criteria can be tried against the same input.

use geo_types::{Coord, Polygon};
use serde::{Deserialize, Serialize};

use crate::criteria::{Criterion, RemovalCriterion};
use crate::dig::{dig_hull, DigCfg, HullParts};
use crate::error::HullError;
use crate::input::{HullInput, InputCfg};
use crate::merge::{merge_parts, Footprint, MergeCfg};
use crate::topology::RingArena;
use crate::triangulation::{DelaunayTriangulation, Triangulation};

/// Full configuration of one hull computation, as recorded by callers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HullCfg {
    pub criterion: Criterion,
    pub input: InputCfg,
    pub dig: DigCfg,
    pub merge: MergeCfg,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            criterion: Criterion::Circumradius(crate::footprint::FIELD_RADIUS),
            input: InputCfg::default(),
            dig: DigCfg::default(),
            merge: MergeCfg::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ConcaveHull {
    tri: DelaunayTriangulation,
}

impl ConcaveHull {
    pub fn new(input: &HullInput) -> Self {
        let points = input.prepare();
        Self {
            tri: DelaunayTriangulation::triangulate(&points),
        }
    }

    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Coord<f64>>,
    {
        Self::new(&HullInput::from_points(points))
    }

    /// Prepared (sorted, deduplicated) points.
    #[inline]
    pub fn points(&self) -> &[Coord<f64>] {
        self.tri.points()
    }

    #[inline]
    pub fn triangulation(&self) -> &DelaunayTriangulation {
        &self.tri
    }

    /// Boundary before digging (the convex hull), if the input spans an area.
    pub fn initial_hull(&self) -> Option<Polygon<f64>> {
        let mut arena = RingArena::new();
        let ring = arena.ring_from_coords(self.tri.boundary())?;
        (ring.len() >= 3).then(|| arena.polygon(ring))
    }

    pub fn dig<C>(&self, criterion: &C, cfg: DigCfg) -> Result<HullParts, HullError>
    where
        C: RemovalCriterion + ?Sized,
    {
        dig_hull(&self.tri, criterion, cfg)
    }

    /// Single-polygon path: `Some` only when digging leaves exactly one part.
    pub fn polygon<C>(&self, criterion: &C, cfg: DigCfg) -> Result<Option<Polygon<f64>>, HullError>
    where
        C: RemovalCriterion + ?Sized,
    {
        let parts = self.dig(criterion, cfg)?;
        if parts.polygons.len() != 1 {
            tracing::debug!(parts = parts.polygons.len(), "no single polygon");
        }
        Ok(parts.single().cloned())
    }

    /// Dig, then filter, union and stitch the parts.
    pub fn footprint<C>(
        &self,
        criterion: &C,
        dig: DigCfg,
        merge: MergeCfg,
    ) -> Result<Option<Footprint>, HullError>
    where
        C: RemovalCriterion + ?Sized,
    {
        let parts = self.dig(criterion, dig)?;
        Ok(merge_parts(&parts.polygons, merge))
    }

    /// Prepare `input` under `cfg.input`, then dig and merge as `cfg` says.
    pub fn run(input: HullInput, cfg: &HullCfg) -> Result<Option<Footprint>, HullError> {
        Self::new(&input.with_cfg(cfg.input)).footprint(&cfg.criterion, cfg.dig, cfg.merge)
    }
}
