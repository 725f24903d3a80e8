//! Breadth-first digging over a queue of rings.

use std::collections::VecDeque;

use geo_types::Line;

use crate::criteria::RemovalCriterion;
use crate::error::HullError;
use crate::topology::{Ring, RingArena};
use crate::triangulation::Triangulation;

use super::boundary::Boundary;
use super::types::{Deadline, DigCfg, DigStats, HullParts, RingOutcome};

/// Dig the triangulation's boundary inward until no removable edge is left.
///
/// Rings are processed breadth-first: a split enqueues both halves behind
/// every ring already waiting. Any locate failure or budget overrun aborts
/// the whole computation without partial output.
pub fn dig_hull<T, C>(tri: &T, criterion: &C, cfg: DigCfg) -> Result<HullParts, HullError>
where
    T: Triangulation + ?Sized,
    C: RemovalCriterion + ?Sized,
{
    DigRunner::new(tri, criterion, cfg).run()
}

/// Runner carrying the arena, queue and accumulators of one computation.
struct DigRunner<'a, T: ?Sized, C: ?Sized> {
    tri: &'a T,
    criterion: &'a C,
    cfg: DigCfg,
    deadline: Deadline,
    arena: RingArena,
    segments: Vec<Line<f64>>,
    stats: DigStats,
}

impl<'a, T, C> DigRunner<'a, T, C>
where
    T: Triangulation + ?Sized,
    C: RemovalCriterion + ?Sized,
{
    fn new(tri: &'a T, criterion: &'a C, cfg: DigCfg) -> Self {
        Self {
            tri,
            criterion,
            cfg,
            deadline: Deadline::start(cfg.time_budget),
            arena: RingArena::new(),
            segments: Vec::new(),
            stats: DigStats::default(),
        }
    }

    fn run(mut self) -> Result<HullParts, HullError> {
        let seed = self.tri.boundary();
        if seed.len() < 3 {
            tracing::debug!(seed = seed.len(), "boundary too small to dig");
            return Ok(HullParts::default());
        }
        self.arena = RingArena::with_capacity(seed.len() * 4);
        let Some(ring) = self.arena.ring_from_coords(seed) else {
            return Ok(HullParts::default());
        };
        tracing::debug!(seed = ring.len(), cfg = ?self.cfg, "dig start");

        let mut queue = VecDeque::from([ring]);
        let mut finished: Vec<Ring> = Vec::new();
        while let Some(ring) = queue.pop_front() {
            if let Err(e) = self.deadline.check() {
                tracing::warn!(queued = queue.len() + 1, "dig aborted: {e}");
                return Err(e);
            }
            match self.dig_ring(ring)? {
                RingOutcome::Finished(r) => finished.push(r),
                RingOutcome::Split(a, b) => {
                    self.stats.splits += 1;
                    tracing::trace!(left = a.len(), right = b.len(), "ring split");
                    queue.push_back(a);
                    queue.push_back(b);
                }
                RingOutcome::Degenerated => self.stats.degenerated += 1,
            }
        }

        let polygons = finished.iter().map(|&r| self.arena.polygon(r)).collect();
        tracing::debug!(
            parts = finished.len(),
            segments = self.segments.len(),
            stats = ?self.stats,
            elapsed = ?self.deadline.elapsed(),
            "dig done"
        );
        Ok(HullParts {
            polygons,
            segments: self.segments,
            stats: self.stats,
        })
    }

    fn dig_ring(&mut self, ring: Ring) -> Result<RingOutcome, HullError> {
        let mut work = Boundary::index(&mut self.arena, ring);
        loop {
            if let Err(e) = self.deadline.check() {
                tracing::warn!(ring = work.len(), "dig aborted: {e}");
                return Err(e);
            }
            let Some(edge) = work.pop_longest() else {
                break;
            };
            let s = work.coord(edge.start());
            let e = work.coord(edge.end());
            let Some(handle) = self.tri.locate_edge(s, e) else {
                tracing::warn!(start = ?s, end = ?e, "boundary edge not in triangulation");
                return Err(HullError::EdgeNotFound {
                    start: s.x_y(),
                    end: e.x_y(),
                });
            };
            let o = self.tri.apex_of(handle);
            if self.tri.is_frame_vertex(o) || !self.criterion.removable(s, e, o) {
                self.stats.rejected += 1;
                continue;
            }
            if work.len() <= 3 {
                return Ok(RingOutcome::Degenerated);
            }
            match work.node_at(o) {
                Some(on) if on == work.next(edge.end()) => {
                    work.trim_end(edge);
                    self.stats.trims += 1;
                    if self.cfg.keep_line_segments {
                        self.segments.push(Line::new(e, o));
                    }
                }
                Some(on) if on == work.prev(edge.start()) => {
                    work.trim_start(edge, on);
                    self.stats.trims += 1;
                    if self.cfg.keep_line_segments {
                        self.segments.push(Line::new(o, s));
                    }
                }
                Some(on) => {
                    if !self.cfg.allow_multi_parts {
                        // the popped edge stays on the ring for good
                        self.stats.pinched += 1;
                        tracing::trace!(ring = work.len(), "pinch skipped");
                        continue;
                    }
                    return Ok(match work.split(edge, on) {
                        Ok((a, b)) => RingOutcome::Split(a, b),
                        Err(r) => RingOutcome::Finished(r),
                    });
                }
                None => {
                    work.dig(edge, o);
                    self.stats.digs += 1;
                }
            }
        }
        Ok(RingOutcome::Finished(work.into_ring()))
    }
}
