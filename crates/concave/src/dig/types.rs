//! Configuration, per-ring outcomes and results of the digging engine.

use std::time::{Duration, Instant};

use geo_types::{Line, Polygon};
use serde::{Deserialize, Serialize};

use crate::error::HullError;
use crate::topology::Ring;

/// Default wall-clock budget for one computation.
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(5);

/// Digging configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DigCfg {
    /// Split a ring in two when a dig would pinch it; otherwise the pinching
    /// edge is kept and digging goes on with the remaining edges.
    pub allow_multi_parts: bool,
    /// Report the edge left behind by a tri-corner trim as a line segment.
    pub keep_line_segments: bool,
    /// Budget for the whole multi-ring process.
    pub time_budget: Duration,
}

impl Default for DigCfg {
    fn default() -> Self {
        Self {
            allow_multi_parts: false,
            keep_line_segments: false,
            time_budget: DEFAULT_TIME_BUDGET,
        }
    }
}

impl DigCfg {
    pub fn multi_part() -> Self {
        Self {
            allow_multi_parts: true,
            ..Self::default()
        }
    }
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = budget;
        self
    }
}

/// How digging one ring ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RingOutcome {
    /// No removable edge left.
    Finished(Ring),
    /// Split into two rings, both to be queued.
    Split(Ring, Ring),
    /// Fell to 3 vertices with a removable edge left; dropped.
    Degenerated,
}

/// Counters for one computation, reported through `tracing`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigStats {
    pub digs: usize,
    pub trims: usize,
    pub splits: usize,
    pub pinched: usize,
    pub degenerated: usize,
    pub rejected: usize,
}

/// Finished hull parts (closed polygons, in finish order) and degenerate segments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HullParts {
    pub polygons: Vec<Polygon<f64>>,
    pub segments: Vec<Line<f64>>,
    pub stats: DigStats,
}

impl HullParts {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
    /// The single part, if exactly one was produced.
    pub fn single(&self) -> Option<&Polygon<f64>> {
        match self.polygons.as_slice() {
            [p] => Some(p),
            _ => None,
        }
    }
}

/// Wall-clock budget shared by the outer and inner loops.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Deadline {
    started: Instant,
    budget: Duration,
}

impl Deadline {
    pub(crate) fn start(budget: Duration) -> Self {
        Self {
            started: Instant::now(),
            budget,
        }
    }
    #[inline]
    pub(crate) fn check(&self) -> Result<(), HullError> {
        if self.started.elapsed() > self.budget {
            Err(HullError::Timeout {
                budget: self.budget,
            })
        } else {
            Ok(())
        }
    }
    #[inline]
    pub(crate) fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
