//! Curated API surface.
//!
//! Prefer these re-exports over deep module paths; they are kept stable
//! across internal reshuffles.

// Digging
pub use crate::criteria::{circumradius, Circumradius, Criterion, EdgeLength, RemovalCriterion};
pub use crate::dig::{dig_hull, DigCfg, DigStats, HullParts, DEFAULT_TIME_BUDGET};
pub use crate::error::HullError;
pub use crate::hull::{ConcaveHull, HullCfg};
pub use crate::input::{HullInput, InputCfg};
pub use crate::triangulation::{DelaunayTriangulation, Triangulation};
// Post-processing
pub use crate::merge::{filter_small_parts, merge_parts, Footprint, MergeCfg};
// Field footprints (WGS84)
pub use crate::footprint::{
    concave_polygon, field_footprint, lat_lon_pairs, outline_from_lat_lon, radius_for_area,
    ONE_MU_M2,
};
pub use crate::geodesy::{geodesic_area_m2, haversine_m};
// Synthetic clouds
pub use crate::sample::{draw_cloud, jittered_disc, uniform_disc, CloudCfg, Cluster, ReplayToken};
