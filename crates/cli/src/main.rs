use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use concave::api::{
    draw_cloud, geodesic_area_m2, merge_parts, radius_for_area, uniform_disc, CloudCfg, ConcaveHull,
    Criterion, DigCfg, HullCfg, InputCfg, MergeCfg, ReplayToken,
};
use geo_types::{Coord, Geometry};
use serde_json::json;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "concave")]
#[command(about = "Concave hulls of point tables")]
struct Cmd {
    /// Optional run tag; propagated to provenance and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute a concave hull and write it as GeoJSON
    Hull(HullArgs),
    /// Write a synthetic point cloud as CSV
    Sample(SampleArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CriterionKind {
    /// Circumradius of the boundary triangle (alpha shape)
    Circumradius,
    /// Length of the boundary edge (chi shape)
    EdgeLength,
}

#[derive(Args)]
struct HullArgs {
    /// CSV or Parquet table of points
    #[arg(long)]
    input: PathBuf,
    /// GeoJSON output path
    #[arg(long)]
    out: PathBuf,
    #[arg(long)]
    x_col: Option<String>,
    #[arg(long)]
    y_col: Option<String>,
    #[arg(long, value_enum, default_value_t = CriterionKind::Circumradius)]
    criterion: CriterionKind,
    /// Criterion threshold; derived from --area-m2 when omitted
    #[arg(long)]
    threshold: Option<f64>,
    /// Worked area in m² (picks the field radius for WGS84 input)
    #[arg(long)]
    area_m2: Option<f64>,
    /// Split pinched rings into separate parts
    #[arg(long)]
    multi: bool,
    /// Report trimmed tri-corners as line segments
    #[arg(long)]
    keep_segments: bool,
    /// Wall-clock budget for digging
    #[arg(long, default_value_t = 5000)]
    timeout_ms: u64,
    /// Read the rows as one ordered trace rather than loose points
    #[arg(long)]
    trace: bool,
    /// Densify the trace to this segment length (0 = off; needs --trace)
    #[arg(long, default_value_t = 0.0)]
    densify: f64,
    /// Half-width of the corridors stitching disjoint parts
    #[arg(long)]
    corridor_width: Option<f64>,
    /// Input is (lon, lat) degrees: add m² area and [lat, lon] outline
    #[arg(long)]
    wgs84: bool,
}

impl HullArgs {
    fn hull_cfg(&self) -> HullCfg {
        let threshold = self
            .threshold
            .unwrap_or_else(|| radius_for_area(self.area_m2.unwrap_or(0.0)));
        let criterion = match self.criterion {
            CriterionKind::Circumradius => Criterion::Circumradius(threshold),
            CriterionKind::EdgeLength => Criterion::EdgeLength(threshold),
        };
        let mut merge = MergeCfg::default();
        if let Some(w) = self.corridor_width {
            merge.corridor_width = w;
        }
        HullCfg {
            criterion,
            input: InputCfg {
                densify_tolerance: self.densify,
            },
            dig: DigCfg {
                allow_multi_parts: self.multi,
                keep_line_segments: self.keep_segments,
                time_budget: Duration::from_millis(self.timeout_ms),
            },
            merge,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Preset {
    /// Two dense fields with sparse noise between them
    TwoFields,
    /// Uniform disc
    Disc,
}

#[derive(Args)]
struct SampleArgs {
    /// CSV output path
    #[arg(long)]
    out: PathBuf,
    #[arg(long, value_enum, default_value_t = Preset::TwoFields)]
    preset: Preset,
    #[arg(long, default_value_t = 2025)]
    seed: u64,
    #[arg(long, default_value_t = 0)]
    index: u64,
    /// Point count for the disc preset
    #[arg(long, default_value_t = 1000)]
    n: usize,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull(args) => hull(args, cmd.tag),
        Action::Sample(args) => sample(args, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn hull(args: HullArgs, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %args.input.display(), out = %args.out.display(), tag = ?tag, "hull");
    let cfg = args.hull_cfg();
    let points = io::read_points(&args.input, args.x_col.as_deref(), args.y_col.as_deref())?;
    let input = io::hull_input(points, args.trace, cfg.input)?;
    let hull = ConcaveHull::new(&input);
    tracing::info!(prepared = hull.points().len(), criterion = ?cfg.criterion, "triangulated");

    let parts = hull
        .dig(&cfg.criterion, cfg.dig)
        .with_context(|| format!("digging {}", args.input.display()))?;
    let footprint = merge_parts(&parts.polygons, cfg.merge);
    let area_m2 = match (&footprint, args.wgs84) {
        (Some(fp), true) => Some(geodesic_area_m2(&Geometry::MultiPolygon(fp.geometry.clone()))),
        _ => None,
    };
    tracing::info!(
        parts = parts.polygons.len(),
        segments = parts.segments.len(),
        connected = footprint.as_ref().map(|f| f.is_connected()),
        area_m2,
        "hull done"
    );

    let fc = io::footprint_collection(footprint.as_ref(), &parts, args.wgs84);
    io::write_geojson(&args.out, &fc)?;
    let summary = json!({
        "points": hull.points().len(),
        "stats": parts.stats,
        "parts": parts.polygons.len(),
        "kept_parts": footprint.as_ref().map(|f| f.parts.len()),
        "corridors": footprint.as_ref().map(|f| f.corridors),
        "area": footprint.as_ref().map(|f| f.area()),
        "area_m2": area_m2,
    });
    let payload = Payload::new("hull", json!({ "input": args.input, "trace": args.trace, "cfg": cfg }))
        .with_summary(summary)
        .with_tag(tag);
    provenance::write_sidecar(&args.out, &payload)?;
    Ok(())
}

fn sample(args: SampleArgs, tag: Option<String>) -> Result<()> {
    tracing::info!(out = %args.out.display(), preset = ?args.preset, seed = args.seed, "sample");
    let tok = ReplayToken {
        seed: args.seed,
        index: args.index,
    };
    let points: Vec<Coord<f64>> = match args.preset {
        Preset::TwoFields => draw_cloud(&CloudCfg::two_fields(), tok),
        Preset::Disc => uniform_disc(Coord { x: 0.0, y: 0.0 }, 1.0, args.n, &mut tok.rng()),
    };
    io::write_points_csv(&args.out, &points)?;
    let payload = Payload::new(
        "sample",
        json!({ "preset": format!("{:?}", args.preset), "token": tok, "n": args.n }),
    )
    .with_summary(json!({ "points": points.len() }))
    .with_tag(tag);
    provenance::write_sidecar(&args.out, &payload)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "concave_version": concave::VERSION,
        "tag": tag,
        "defaults": HullCfg::default(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
