//! Concave hulls of planar point clouds by boundary digging.
//!
//! Pipeline: prepare points (`input`), triangulate (`triangulation`), dig the
//! convex boundary inward (`dig`), then filter and stitch the parts
//! (`merge`). `footprint` wires the pipeline up for GPS traces in WGS84
//! degrees; `geodesy` reports their areas in square metres.
//!
//! API Policy
//! - `api` and `prelude` are the intended import surfaces; module paths may
//!   move between versions.

pub mod api;
pub mod criteria;
pub mod dig;
pub mod edges;
pub mod error;
pub mod footprint;
pub mod geodesy;
pub mod hull;
pub mod input;
pub mod kernel;
pub mod merge;
pub mod point;
pub mod sample;
pub mod topology;
pub mod triangulation;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::HullError;
pub use hull::{ConcaveHull, HullCfg};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::criteria::{Circumradius, Criterion, EdgeLength, RemovalCriterion};
    pub use crate::dig::{dig_hull, DigCfg, HullParts};
    pub use crate::error::HullError;
    pub use crate::hull::{ConcaveHull, HullCfg};
    pub use crate::input::HullInput;
    pub use crate::merge::{Footprint, MergeCfg};
    pub use geo_types::{Coord, Polygon};
}
