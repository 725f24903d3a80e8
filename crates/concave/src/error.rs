//! Failure outcomes of a hull computation.
//!
//! Only conditions that abort the whole computation are errors. A ring that
//! degenerates mid-dig, or a result with no surviving area, is folded into the
//! `Ok` value instead.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HullError {
    /// The triangulation has no triangle behind a boundary edge (numerical failure).
    #[error("triangulation cannot locate boundary edge {start:?} -> {end:?}")]
    EdgeNotFound { start: (f64, f64), end: (f64, f64) },
    /// The wall-clock budget ran out before digging finished.
    #[error("digging exceeded its time budget of {budget:?}")]
    Timeout { budget: Duration },
}

impl HullError {
    #[inline]
    pub fn is_timeout(&self) -> bool {
        matches!(self, HullError::Timeout { .. })
    }
}
