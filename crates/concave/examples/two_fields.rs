//! Dig two clustered fields with noise and print what each stage produces.
//!
//! Usage:
//!   cargo run -p concave --example two_fields -- [radius] [seed]
//!
//! Prints the convex area, the dug parts with their areas, and the stitched
//! footprint (corridor count, area, outline length).

use concave::api::{
    draw_cloud, merge_parts, Circumradius, CloudCfg, ConcaveHull, DigCfg, MergeCfg, ReplayToken,
};
use geo::Area;

fn main() {
    let mut args = std::env::args().skip(1);
    let radius: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(1.0);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);

    let pts = draw_cloud(&CloudCfg::two_fields(), ReplayToken { seed, index: 0 });
    let hull = ConcaveHull::from_points(pts);
    println!("points: {}", hull.points().len());
    if let Some(p) = hull.initial_hull() {
        println!("convex area: {:.3}", p.unsigned_area());
    }

    let parts = match hull.dig(&Circumradius::new(radius), DigCfg::multi_part()) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("dig failed: {e}");
            return;
        }
    };
    println!("stats: {:?}", parts.stats);
    for (i, p) in parts.polygons.iter().enumerate() {
        println!(
            "part {i}: {} vertices, area {:.3}",
            p.exterior().0.len() - 1,
            p.unsigned_area()
        );
    }

    let merge = MergeCfg {
        corridor_width: 0.05,
        ..MergeCfg::default()
    };
    match merge_parts(&parts.polygons, merge) {
        Some(fp) => println!(
            "footprint: kept {} parts, {} corridors, area {:.3}, outline {}",
            fp.parts.len(),
            fp.corridors,
            fp.area(),
            fp.outline().map_or(0, |o| o.len())
        ),
        None => println!("footprint: none"),
    }
}
