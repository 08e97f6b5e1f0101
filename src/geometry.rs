use std::str::FromStr;

use geo::{CoordsIter, Geometry, Polygon};
use wkt::Wkt;

/// Axis-aligned degree-space bounds from a linear scan of raw vertex
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

/// Parse a WKT string into a geometry. Malformed text and geometries with
/// no coordinates both come back as `None`: absent or degenerate WKT is
/// expected in real data and maps to the empty result, not an error.
pub(crate) fn parse_wkt(text: &str) -> Option<Geometry<f64>> {
    let parsed = Wkt::<f64>::from_str(text).ok()?;
    let geometry = Geometry::try_from(parsed).ok()?;
    (geometry.coords_count() > 0).then_some(geometry)
}

/// Number of top-level parts, matching the parsed geometry's own count
/// (1 for a simple polygon, N for a multi-part geometry).
pub(crate) fn geometry_count(geometry: &Geometry<f64>) -> usize {
    match geometry {
        Geometry::MultiPoint(parts) => parts.0.len(),
        Geometry::MultiLineString(parts) => parts.0.len(),
        Geometry::MultiPolygon(parts) => parts.0.len(),
        Geometry::GeometryCollection(parts) => parts.0.len(),
        _ => 1,
    }
}

/// Recursively decompose a geometry into its constituent simple polygons,
/// walking multi-part nesting of arbitrary depth. Non-areal leaves
/// (points, lines) have no surface and are skipped.
pub(crate) fn collect_leaves<'a>(geometry: &'a Geometry<f64>, leaves: &mut Vec<&'a Polygon<f64>>) {
    match geometry {
        Geometry::Polygon(polygon) => {
            if polygon.coords_count() > 0 {
                leaves.push(polygon);
            }
        }
        Geometry::MultiPolygon(parts) => {
            leaves.extend(parts.0.iter().filter(|polygon| polygon.coords_count() > 0));
        }
        Geometry::GeometryCollection(parts) => {
            for child in &parts.0 {
                collect_leaves(child, leaves);
            }
        }
        _ => {}
    }
}

/// Scan raw coordinates for min/max bounds. `None` for empty geometries.
pub(crate) fn coord_bounds<G: CoordsIter<Scalar = f64>>(geometry: &G) -> Option<CoordBounds> {
    let mut coords = geometry.coords_iter();
    let first = coords.next()?;
    let seed = CoordBounds { min_x: first.x, min_y: first.y, max_x: first.x, max_y: first.y };
    Some(coords.fold(seed, |bounds, coord| CoordBounds {
        min_x: bounds.min_x.min(coord.x),
        min_y: bounds.min_y.min(coord.y),
        max_x: bounds.max_x.max(coord.x),
        max_y: bounds.max_y.max(coord.y),
    }))
}
