use std::sync::Arc;

use geo::{Area, Contains, Intersects, Point, Polygon};
use serde::{Deserialize, Serialize};

use crate::clip::{self, ClipOutcome};
use crate::error::{AreaError, Result};
use crate::geometry;
use crate::grid::WorldGrid;

const SQUARE_METERS_PER_KM2: f64 = 1.0e6;

/// Computes the true surface area of WKT polygon geometries by tiling
/// them against the world grid, reprojecting each grid-clipped fragment
/// into its cell's UTM zone, and summing projected planar areas. Also
/// answers point-in-polygon containment.
///
/// Pure, synchronous, and re-entrant: one engine may serve any number of
/// threads concurrently over the shared immutable grid.
pub struct AreaEngine {
    grid: Arc<WorldGrid>,
}

/// A query point in decimal degrees, WGS84.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl QueryPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Result of one area/containment query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaResult {
    /// Total area, rounded to the nearest km².
    pub square_kilometers: u64,
    /// Number of top-level parts in the input geometry.
    pub geometry_count: usize,
    /// Whether the query point fell inside the (untransformed) geometry.
    pub contains_point: bool,
}

impl AreaResult {
    /// The defined result for malformed or empty WKT.
    pub const EMPTY: AreaResult = AreaResult {
        square_kilometers: 0,
        geometry_count: 0,
        contains_point: false,
    };
}

impl AreaEngine {
    /// Build an engine over an explicit grid instance.
    pub fn new(grid: Arc<WorldGrid>) -> Self {
        Self { grid }
    }

    /// Build an engine over the process-wide shared grid.
    pub fn with_shared_grid() -> Self {
        Self::new(WorldGrid::shared())
    }

    /// Compute the geodetic area of a WKT geometry, and optionally test
    /// whether a point lies inside it.
    ///
    /// Malformed or empty WKT yields [`AreaResult::EMPTY`], not an error.
    /// A reprojection failure is fatal for the query and carries the
    /// source WKT as context.
    pub fn compute(&self, wkt: &str, query: Option<QueryPoint>) -> Result<AreaResult> {
        let Some(parsed) = geometry::parse_wkt(wkt) else {
            return Ok(AreaResult::EMPTY);
        };

        // Containment is answered on the original geometry, before any
        // area work touches it.
        let contains_point = query
            .is_some_and(|point| parsed.contains(&Point::new(point.longitude, point.latitude)));

        let mut leaves = Vec::new();
        geometry::collect_leaves(&parsed, &mut leaves);

        let mut total_m2 = 0.0;
        for leaf in leaves {
            total_m2 += self.leaf_area_m2(leaf, wkt)?;
        }

        Ok(AreaResult {
            square_kilometers: (total_m2 / SQUARE_METERS_PER_KM2).round() as u64,
            geometry_count: geometry::geometry_count(&parsed),
            contains_point,
        })
    }

    /// Sum one leaf polygon's projected area over its overlapping cells.
    fn leaf_area_m2(&self, leaf: &Polygon<f64>, wkt: &str) -> Result<f64> {
        let Some(bounds) = geometry::coord_bounds(leaf) else {
            return Ok(0.0);
        };

        let mut area_m2 = 0.0;
        for cell in self.grid.cells_overlapping(&bounds) {
            if !leaf.intersects(cell.bounds()) {
                continue;
            }
            match clip::clip_to_cell(leaf, cell.bounds()) {
                ClipOutcome::Fragments(fragments) => {
                    // Multi-part clips keep the one transform of the cell
                    // that produced them.
                    for fragment in &fragments.0 {
                        if fragment.unsigned_area() <= 0.0 {
                            continue;
                        }
                        let projected = cell
                            .transform()
                            .project_polygon(fragment)
                            .map_err(|failure| AreaError::reprojection(wkt, failure))?;
                        area_m2 += projected.unsigned_area();
                    }
                }
                ClipOutcome::FallbackNeeded => {
                    // Degenerate topology: project the whole leaf in this
                    // cell's zone and stop per-cell work for it.
                    log::debug!(
                        "degenerate clip at cell ({}, {}); projecting whole part in one zone",
                        cell.x(), cell.y()
                    );
                    let projected = cell
                        .transform()
                        .project_polygon(leaf)
                        .map_err(|failure| AreaError::reprojection(wkt, failure))?;
                    area_m2 += projected.unsigned_area();
                    break;
                }
            }
        }
        Ok(area_m2)
    }
}
