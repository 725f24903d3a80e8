//! Input preparation: gather, densify and deduplicate hull input coordinates.
//!
//! Points are taken as they are. Paths (line strings and polygon rings) can
//! be densified so that no segment is longer than a tolerance; the extra
//! points keep long straight sides of the input from being dug through.

use geo_types::{Coord, Geometry, LineString};
use serde::{Deserialize, Serialize};

use crate::point::{dedup_sorted, distance};

/// Preparation settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputCfg {
    /// Maximum segment length along input paths; `0` disables densification.
    pub densify_tolerance: f64,
}

impl Default for InputCfg {
    fn default() -> Self {
        Self {
            densify_tolerance: 0.0,
        }
    }
}

/// Collected hull input, prepared on demand.
#[derive(Clone, Debug, Default)]
pub struct HullInput {
    points: Vec<Coord<f64>>,
    paths: Vec<LineString<f64>>,
    cfg: InputCfg,
}

impl HullInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Coord<f64>>,
    {
        Self {
            points: points.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn from_geometries<'g, I>(geoms: I) -> Self
    where
        I: IntoIterator<Item = &'g Geometry<f64>>,
    {
        let mut input = Self::new();
        for g in geoms {
            input.add_geometry(g);
        }
        input
    }

    pub fn with_densify(mut self, tolerance: f64) -> Self {
        self.cfg.densify_tolerance = tolerance;
        self
    }

    pub fn with_cfg(mut self, cfg: InputCfg) -> Self {
        self.cfg = cfg;
        self
    }

    #[inline]
    pub fn cfg(&self) -> InputCfg {
        self.cfg
    }

    pub fn add_point(&mut self, c: Coord<f64>) {
        self.points.push(c);
    }

    /// Flatten any geometry into points and paths.
    pub fn add_geometry(&mut self, g: &Geometry<f64>) {
        match g {
            Geometry::Point(p) => self.points.push(p.0),
            Geometry::MultiPoint(mp) => self.points.extend(mp.iter().map(|p| p.0)),
            Geometry::Line(l) => self.paths.push(LineString::new(vec![l.start, l.end])),
            Geometry::LineString(ls) => self.paths.push(ls.clone()),
            Geometry::MultiLineString(mls) => self.paths.extend(mls.iter().cloned()),
            Geometry::Polygon(p) => {
                self.paths.push(p.exterior().clone());
                self.paths.extend(p.interiors().iter().cloned());
            }
            Geometry::MultiPolygon(mp) => {
                for p in mp {
                    self.add_geometry(&Geometry::Polygon(p.clone()));
                }
            }
            Geometry::Rect(r) => self.add_geometry(&Geometry::Polygon(r.to_polygon())),
            Geometry::Triangle(t) => self.add_geometry(&Geometry::Polygon(t.to_polygon())),
            Geometry::GeometryCollection(gc) => {
                for inner in gc {
                    self.add_geometry(inner);
                }
            }
        }
    }

    /// Number of raw coordinates collected so far (before densify/dedup).
    pub fn raw_len(&self) -> usize {
        self.points.len() + self.paths.iter().map(|p| p.0.len()).sum::<usize>()
    }

    /// Finite coordinates, densified, sorted and deduplicated.
    pub fn prepare(&self) -> Vec<Coord<f64>> {
        let mut out = Vec::with_capacity(self.raw_len());
        out.extend(self.points.iter().copied());
        for path in &self.paths {
            densify_into(&path.0, self.cfg.densify_tolerance, &mut out);
        }
        let raw = out.len();
        out.retain(|c| c.x.is_finite() && c.y.is_finite());
        if out.len() < raw {
            tracing::debug!(dropped = raw - out.len(), "non-finite input coordinates dropped");
        }
        dedup_sorted(&mut out);
        tracing::trace!(raw, prepared = out.len(), "input prepared");
        out
    }
}

/// Append `path`'s vertices plus evenly spaced points on every segment longer
/// than `tolerance`: a segment of length `d` is cut into `ceil(d / tolerance)`
/// equal pieces.
pub fn densify_into(path: &[Coord<f64>], tolerance: f64, out: &mut Vec<Coord<f64>>) {
    let Some(&first) = path.first() else {
        return;
    };
    out.push(first);
    for w in path.windows(2) {
        let (a, b) = (w[0], w[1]);
        let d = distance(a, b);
        if tolerance > 0.0 && d > tolerance && d.is_finite() {
            let pieces = (d / tolerance).ceil() as usize;
            for i in 1..pieces {
                let t = i as f64 / pieces as f64;
                out.push(Coord {
                    x: a.x + (b.x - a.x) * t,
                    y: a.y + (b.y - a.y) * t,
                });
            }
        }
        out.push(b);
    }
}
