//! File glue: point tables in, GeoJSON out.
//!
//! Point tables are CSV or Parquet, read through polars. Coordinate columns
//! are taken from the caller or detected from common names (`x`/`y`,
//! `lon`/`lat`, `lng`/`lat`, `longitude`/`latitude`).

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use concave::api::{lat_lon_pairs, Footprint, HullInput, HullParts, InputCfg};
use geo_types::{Coord, LineString, MultiLineString};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use polars::prelude::*;
use serde_json::json;

const AXIS_CANDIDATES: [(&str, &str); 4] = [
    ("x", "y"),
    ("lon", "lat"),
    ("lng", "lat"),
    ("longitude", "latitude"),
];

/// Read a CSV or Parquet table into a frame (by extension).
pub fn read_table(path: &Path) -> Result<DataFrame> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let lf = match ext.as_deref() {
        Some("csv") => LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(1000))
            .finish()
            .with_context(|| format!("opening {}", path.display()))?,
        Some("parquet") | Some("pq") => LazyFrame::scan_parquet(path, ScanArgsParquet::default())
            .with_context(|| format!("opening {}", path.display()))?,
        _ => bail!("unsupported input {} (expected .csv or .parquet)", path.display()),
    };
    lf.collect()
        .with_context(|| format!("reading {}", path.display()))
}

/// Pick the coordinate columns: explicit names win, else the first candidate
/// pair present in the frame.
pub fn coordinate_columns(df: &DataFrame, x: Option<&str>, y: Option<&str>) -> Result<(String, String)> {
    if let (Some(x), Some(y)) = (x, y) {
        return Ok((x.to_string(), y.to_string()));
    }
    AXIS_CANDIDATES
        .iter()
        .find(|(cx, cy)| df.column(cx).is_ok() && df.column(cy).is_ok())
        .map(|(cx, cy)| (cx.to_string(), cy.to_string()))
        .context("no coordinate columns found; pass --x-col and --y-col")
}

/// Coordinates from two numeric columns; rows with a null in either are skipped.
pub fn points_from_frame(df: &DataFrame, x: &str, y: &str) -> Result<Vec<Coord<f64>>> {
    let xs = df
        .column(x)
        .with_context(|| format!("column {x}"))?
        .cast(&DataType::Float64)?;
    let ys = df
        .column(y)
        .with_context(|| format!("column {y}"))?
        .cast(&DataType::Float64)?;
    let pts: Vec<Coord<f64>> = xs
        .f64()?
        .into_iter()
        .zip(ys.f64()?)
        .filter_map(|(x, y)| Some(Coord { x: x?, y: y? }))
        .collect();
    let skipped = df.height() - pts.len();
    if skipped > 0 {
        tracing::warn!(skipped, "rows with missing coordinates skipped");
    }
    Ok(pts)
}

pub fn read_points(path: &Path, x: Option<&str>, y: Option<&str>) -> Result<Vec<Coord<f64>>> {
    let df = read_table(path)?;
    let (cx, cy) = coordinate_columns(&df, x, y)?;
    tracing::info!(rows = df.height(), x = cx, y = cy, "points table");
    points_from_frame(&df, &cx, &cy)
}

/// Hull input from table rows. With `as_trace` the rows are one ordered
/// path, so the densify tolerance applies between consecutive fixes.
pub fn hull_input(points: Vec<Coord<f64>>, as_trace: bool, cfg: InputCfg) -> Result<HullInput> {
    if cfg.densify_tolerance > 0.0 && !as_trace {
        bail!("--densify needs --trace: loose points have no segments to densify");
    }
    let input = if as_trace {
        let path = geo_types::Geometry::LineString(LineString::from(points));
        HullInput::from_geometries([&path])
    } else {
        HullInput::from_points(points)
    };
    Ok(input.with_cfg(cfg))
}

/// Write `x,y` rows as CSV.
pub fn write_points_csv(path: &Path, points: &[Coord<f64>]) -> Result<()> {
    let xs: Vec<f64> = points.iter().map(|c| c.x).collect();
    let ys: Vec<f64> = points.iter().map(|c| c.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    create_parent(path)?;
    let mut file = fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Feature collection holding the footprint (if any), optionally the
/// degenerate segments, and per-part summaries in the properties.
pub fn footprint_collection(footprint: Option<&Footprint>, parts: &HullParts, lat_lon: bool) -> FeatureCollection {
    let mut features = Vec::new();
    if let Some(fp) = footprint {
        let mut props = JsonObject::new();
        props.insert("kind".into(), json!("footprint"));
        props.insert("parts".into(), json!(fp.parts.len()));
        props.insert("corridors".into(), json!(fp.corridors));
        props.insert("area".into(), json!(fp.area()));
        if lat_lon {
            if let Some(outline) = fp.outline() {
                props.insert("outline_lat_lon".into(), json!(lat_lon_pairs(&outline)));
            }
        }
        features.push(feature(Value::from(&fp.geometry), props));
    }
    if !parts.segments.is_empty() {
        let lines: MultiLineString<f64> = parts
            .segments
            .iter()
            .map(|l| LineString::new(vec![l.start, l.end]))
            .collect();
        let mut props = JsonObject::new();
        props.insert("kind".into(), json!("segments"));
        props.insert("count".into(), json!(parts.segments.len()));
        features.push(feature(Value::from(&lines), props));
    }
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

fn feature(value: Value, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

pub fn write_geojson(path: &Path, fc: &FeatureCollection) -> Result<()> {
    create_parent(path)?;
    fs::write(path, fc.to_string()).with_context(|| format!("writing {}", path.display()))
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use concave::api::{merge_parts, DigStats, MergeCfg};
    use geo_types::{coord, polygon, Line};
    use geojson::GeoJson;
    use tempfile::tempdir;

    #[test]
    fn csv_points_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/pts.csv");
        let pts = vec![coord! { x: 1.5, y: -2.0 }, coord! { x: 3.0, y: 4.25 }];
        write_points_csv(&path, &pts).unwrap();
        let back = read_points(&path, None, None).unwrap();
        assert_eq!(back, pts);
    }

    #[test]
    fn lon_lat_columns_are_detected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("trace.csv");
        fs::write(&path, "id,lat,lon\n1,40.0,116.3\n2,40.1,\n3,40.2,116.5\n").unwrap();
        let df = read_table(&path).unwrap();
        let (x, y) = coordinate_columns(&df, None, None).unwrap();
        assert_eq!((x.as_str(), y.as_str()), ("lon", "lat"));
        let pts = points_from_frame(&df, &x, &y).unwrap();
        assert_eq!(pts, vec![coord! { x: 116.3, y: 40.0 }, coord! { x: 116.5, y: 40.2 }]);
    }

    #[test]
    fn trace_rows_are_densified() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("trace.csv");
        fs::write(&path, "x,y\n0,0\n10,0\n10,10\n").unwrap();
        let pts = read_points(&path, None, None).unwrap();
        let cfg = InputCfg {
            densify_tolerance: 2.5,
        };
        let plain = hull_input(pts.clone(), false, InputCfg::default()).unwrap();
        assert_eq!(plain.prepare().len(), 3);
        // two 10-unit legs, four pieces each
        let dense = hull_input(pts.clone(), true, cfg).unwrap();
        assert_eq!(dense.prepare().len(), 9);
        assert!(hull_input(pts, false, cfg).is_err());
    }

    #[test]
    fn unknown_columns_and_extensions_fail() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("t.csv");
        fs::write(&path, "a,b\n1,2\n").unwrap();
        let df = read_table(&path).unwrap();
        assert!(coordinate_columns(&df, None, None).is_err());
        assert!(read_table(&dir.path().join("t.txt")).is_err());
    }

    #[test]
    fn geojson_holds_footprint_and_segments() {
        let sq = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 1.0)];
        let parts = HullParts {
            polygons: vec![sq],
            segments: vec![Line::new(coord! { x: 2.0, y: 2.0 }, coord! { x: 3.0, y: 2.0 })],
            stats: DigStats::default(),
        };
        let fp = merge_parts(&parts.polygons, MergeCfg::default()).unwrap();
        let fc = footprint_collection(Some(&fp), &parts, true);
        assert_eq!(fc.features.len(), 2);

        let dir = tempdir().unwrap();
        let path = dir.path().join("hull.geojson");
        write_geojson(&path, &fc).unwrap();
        let parsed: GeoJson = fs::read_to_string(&path).unwrap().parse().unwrap();
        let GeoJson::FeatureCollection(back) = parsed else {
            panic!("expected a feature collection");
        };
        let props = back.features[0].properties.as_ref().unwrap();
        assert_eq!(props["kind"], "footprint");
        let outline = props["outline_lat_lon"].as_array().unwrap();
        assert_eq!(outline.first(), outline.last());
        assert!(outline.len() >= 5);
        assert_eq!(back.features[1].properties.as_ref().unwrap()["count"], 1);
    }
}
