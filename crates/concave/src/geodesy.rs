//! Metric reporting for hulls computed in WGS84 degrees.
//!
//! Areas are measured after a Gauss–Krüger projection in 6° zones (scale 1
//! on the central meridian, 500 km false easting prefixed with the zone
//! number). One zone is picked per polygon, from its first exterior vertex,
//! so a polygon straddling a zone border is not torn apart.

use geo::{Area, Distance, Haversine, MapCoords};
use geo_types::{Coord, Geometry, Point, Polygon};

const WGS84_A: f64 = 6_378_137.0;
const WGS84_F: f64 = 1.0 / 298.257_223_563;
const ZONE_WIDTH_DEG: f64 = 6.0;

/// 6° zone index of a longitude (`floor(lon / 6)`).
#[inline]
pub fn gauss_zone(lon: f64) -> i32 {
    (lon / ZONE_WIDTH_DEG).floor() as i32
}

/// Project `(lon, lat)` degrees to Gauss–Krüger metres in `zone`.
pub fn wgs84_to_gauss(c: Coord<f64>, zone: i32) -> Coord<f64> {
    let e2 = 2.0 * WGS84_F - WGS84_F * WGS84_F;
    let ep2 = e2 / (1.0 - e2);
    let lon0 = (zone as f64 * ZONE_WIDTH_DEG + ZONE_WIDTH_DEG / 2.0).to_radians();
    let (lon, lat) = (c.x.to_radians(), c.y.to_radians());
    let (sin, cos, tan) = (lat.sin(), lat.cos(), lat.tan());

    let n = WGS84_A / (1.0 - e2 * sin * sin).sqrt();
    let t = tan * tan;
    let cc = ep2 * cos * cos;
    let a = (lon - lon0) * cos;
    let m = WGS84_A
        * ((1.0 - e2 / 4.0 - 3.0 * e2 * e2 / 64.0 - 5.0 * e2.powi(3) / 256.0) * lat
            - (3.0 * e2 / 8.0 + 3.0 * e2 * e2 / 32.0 + 45.0 * e2.powi(3) / 1024.0)
                * (2.0 * lat).sin()
            + (15.0 * e2 * e2 / 256.0 + 45.0 * e2.powi(3) / 1024.0) * (4.0 * lat).sin()
            - (35.0 * e2.powi(3) / 3072.0) * (6.0 * lat).sin());

    let x = n
        * (a + (1.0 - t + cc) * a.powi(3) / 6.0
            + (5.0 - 18.0 * t + t * t + 72.0 * cc - 58.0 * ep2) * a.powi(5) / 120.0);
    let y = m
        + n * tan
            * (a * a / 2.0
                + (5.0 - t + 9.0 * cc + 4.0 * cc * cc) * a.powi(4) / 24.0
                + (61.0 - 58.0 * t + t * t + 600.0 * cc - 330.0 * ep2) * a.powi(6) / 720.0);
    Coord {
        x: x + 1_000_000.0 * (zone as f64 + 1.0) + 500_000.0,
        y,
    }
}

/// Area in m² of one WGS84 polygon, holes subtracted.
pub fn polygon_area_m2(p: &Polygon<f64>) -> f64 {
    let Some(first) = p.exterior().0.first() else {
        return 0.0;
    };
    let zone = gauss_zone(first.x);
    p.map_coords(|c| wgs84_to_gauss(c, zone)).unsigned_area()
}

/// Area in m² of the polygonal content of a WGS84 geometry; points and lines
/// count as zero.
pub fn geodesic_area_m2(g: &Geometry<f64>) -> f64 {
    match g {
        Geometry::Polygon(p) => polygon_area_m2(p),
        Geometry::MultiPolygon(mp) => mp.iter().map(polygon_area_m2).sum(),
        Geometry::Rect(r) => polygon_area_m2(&r.to_polygon()),
        Geometry::Triangle(t) => polygon_area_m2(&t.to_polygon()),
        Geometry::GeometryCollection(gc) => gc.iter().map(geodesic_area_m2).sum(),
        _ => 0.0,
    }
}

/// Great-circle distance in metres between two `(lon, lat)` coordinates.
#[inline]
pub fn haversine_m(a: Coord<f64>, b: Coord<f64>) -> f64 {
    Haversine.distance(Point::from(a), Point::from(b))
}
