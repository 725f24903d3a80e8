//! Synthetic point clouds (jittered discs, clusters with noise, replay tokens).
//!
//! Purpose
//! - Reproducible inputs for tests, benches, the example program and the
//!   CLI `sample` command. Every draw is keyed by a `ReplayToken`, so a cloud
//!   can be regenerated from `(seed, index)` alone.
//!
//! Model
//! - A cluster is a square grid clipped to a disc, each point jittered by a
//!   bounded fraction of the spacing (a dense field pass).
//! - Noise points are drawn uniformly from a box, rejected when closer than
//!   `noise_clearance` to a cluster rim or to another noise point, so every
//!   triangle touching noise is large.

use std::f64::consts::PI;

use geo_types::{Coord, Rect};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::point::distance;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    /// RNG for this token (SplitMix64-style mixing of seed and index).
    pub fn rng(self) -> StdRng {
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }

    #[inline]
    pub fn next(self) -> Self {
        Self {
            index: self.index.wrapping_add(1),
            ..self
        }
    }
}

/// `n` points uniform in the disc of `radius` around `centre`.
pub fn uniform_disc<R: Rng>(centre: Coord<f64>, radius: f64, n: usize, rng: &mut R) -> Vec<Coord<f64>> {
    (0..n)
        .map(|_| {
            let r = radius * rng.gen::<f64>().sqrt();
            let th = rng.gen::<f64>() * 2.0 * PI;
            Coord {
                x: centre.x + r * th.cos(),
                y: centre.y + r * th.sin(),
            }
        })
        .collect()
}

/// Grid of `spacing` clipped to a disc, each point moved by up to
/// `jitter_frac * spacing` per axis.
pub fn jittered_disc<R: Rng>(
    centre: Coord<f64>,
    radius: f64,
    spacing: f64,
    jitter_frac: f64,
    rng: &mut R,
) -> Vec<Coord<f64>> {
    if !(spacing > 0.0) || !(radius > 0.0) {
        return Vec::new();
    }
    let j = jitter_frac.clamp(0.0, 0.49) * spacing;
    let k = (radius / spacing).floor() as i64;
    let mut out = Vec::new();
    for i in -k..=k {
        for m in -k..=k {
            let (dx, dy) = (i as f64 * spacing, m as f64 * spacing);
            if dx.hypot(dy) > radius {
                continue;
            }
            let (jx, jy) = if j > 0.0 {
                (rng.gen_range(-j..j), rng.gen_range(-j..j))
            } else {
                (0.0, 0.0)
            };
            out.push(Coord {
                x: centre.x + dx + jx,
                y: centre.y + dy + jy,
            });
        }
    }
    out
}

/// One dense cluster.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub centre: (f64, f64),
    pub radius: f64,
    pub spacing: f64,
    pub jitter_frac: f64,
}

/// Clustered cloud configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CloudCfg {
    pub clusters: Vec<Cluster>,
    /// Number of noise points to place.
    pub noise: usize,
    /// Box the noise is drawn from, `(min_x, min_y, max_x, max_y)`.
    pub noise_box: (f64, f64, f64, f64),
    /// Minimum distance of a noise point to cluster rims and other noise.
    pub noise_clearance: f64,
}

impl CloudCfg {
    /// Two fields of radius 2 (spacing 0.2) twenty units apart, plus sparse noise.
    pub fn two_fields() -> Self {
        let field = |x: f64| Cluster {
            centre: (x, 0.0),
            radius: 2.0,
            spacing: 0.2,
            jitter_frac: 0.25,
        };
        Self {
            clusters: vec![field(0.0), field(20.0)],
            noise: 12,
            noise_box: (-8.0, -8.0, 28.0, 8.0),
            noise_clearance: 3.0,
        }
    }

    pub fn noise_rect(&self) -> Rect<f64> {
        let (x0, y0, x1, y1) = self.noise_box;
        Rect::new(Coord { x: x0, y: y0 }, Coord { x: x1, y: y1 })
    }
}

/// Draw a clustered cloud. Noise placement gives up after a bounded number
/// of rejections, so fewer than `cfg.noise` points may be placed.
pub fn draw_cloud(cfg: &CloudCfg, tok: ReplayToken) -> Vec<Coord<f64>> {
    let mut rng = tok.rng();
    let mut pts = Vec::new();
    for c in &cfg.clusters {
        let centre = Coord {
            x: c.centre.0,
            y: c.centre.1,
        };
        pts.extend(jittered_disc(centre, c.radius, c.spacing, c.jitter_frac, &mut rng));
    }
    let rect = cfg.noise_rect();
    let (min, max) = (rect.min(), rect.max());
    let mut noise: Vec<Coord<f64>> = Vec::with_capacity(cfg.noise);
    let mut tries = 0usize;
    while noise.len() < cfg.noise && tries < cfg.noise * 1000 && min.x < max.x && min.y < max.y {
        tries += 1;
        let p = Coord {
            x: rng.gen_range(min.x..max.x),
            y: rng.gen_range(min.y..max.y),
        };
        let clear_of_clusters = cfg.clusters.iter().all(|c| {
            let centre = Coord {
                x: c.centre.0,
                y: c.centre.1,
            };
            distance(p, centre) >= c.radius + cfg.noise_clearance
        });
        let clear_of_noise = noise.iter().all(|&q| distance(p, q) >= cfg.noise_clearance);
        if clear_of_clusters && clear_of_noise {
            noise.push(p);
        }
    }
    if noise.len() < cfg.noise {
        tracing::debug!(placed = noise.len(), wanted = cfg.noise, "noise placement saturated");
    }
    pts.extend(noise);
    pts
}
