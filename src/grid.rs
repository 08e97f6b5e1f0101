use std::sync::{Arc, LazyLock};

use crate::geometry::CoordBounds;
use crate::proj::{self, UtmTransform};

mod cell;

pub use cell::GridCell;

const LON_BANDS: i32 = 360;
const LAT_BANDS: i32 = 180;

static SHARED: LazyLock<Arc<WorldGrid>> = LazyLock::new(|| Arc::new(WorldGrid::build()));

/// The fixed 1°×1° decomposition of the globe: 64,800 cells, each with a
/// precomputed WGS84→UTM transform for its zone. Built once, immutable,
/// safe to share across threads without locking.
pub struct WorldGrid {
    cells: Vec<GridCell>,
}

impl WorldGrid {
    /// Construct the full grid. Cells are stored row-major by (x, y);
    /// the 120 zone/hemisphere transforms are built once up front and
    /// shared by every cell in the same zone.
    pub fn build() -> Self {
        let transforms: Vec<Arc<UtmTransform>> = (1..=60u8)
            .flat_map(|zone| [true, false].map(|north| Arc::new(UtmTransform::new(zone, north))))
            .collect();
        let transform_for = |longitude: f64, latitude: f64| {
            let (zone, north) = proj::utm_zone(longitude, latitude);
            Arc::clone(&transforms[(zone as usize - 1) * 2 + usize::from(!north)])
        };

        let mut cells = Vec::with_capacity((LON_BANDS * LAT_BANDS) as usize);
        for x in -180..180 {
            for y in -90..90 {
                // Zone is chosen from the tile's interior point.
                let transform = transform_for(x as f64 + 0.5, y as f64 + 0.5);
                cells.push(GridCell::new(x, y, transform));
            }
        }
        Self { cells }
    }

    /// Get the process-wide grid, built lazily on first use. Callers that
    /// need isolated instances (tests, embedders) use `build()` directly.
    pub fn shared() -> Arc<WorldGrid> {
        Arc::clone(&SHARED)
    }

    /// Get the number of cells in the grid.
    #[inline] pub fn len(&self) -> usize { self.cells.len() }

    /// Check if the grid has no cells (never true for a built grid).
    #[inline] pub fn is_empty(&self) -> bool { self.cells.is_empty() }

    /// Get the cell whose longitude band is `x` (-180..179) and latitude
    /// band is `y` (-90..89).
    #[inline]
    pub fn cell(&self, x: i32, y: i32) -> &GridCell {
        debug_assert!((-180..180).contains(&x), "longitude band {x} out of range");
        debug_assert!((-90..90).contains(&y), "latitude band {y} out of range");
        &self.cells[((x + 180) * LAT_BANDS + (y + 90)) as usize]
    }

    /// Iterate over every cell whose integer index range covers the given
    /// degree-space bounds, row-major by (x, y). Lazy and restartable;
    /// degenerate (point-like) bounds still cover one cell.
    pub fn cells_overlapping<'a>(&'a self, bounds: &CoordBounds) -> impl Iterator<Item = &'a GridCell> + 'a {
        let x0 = (bounds.min_x.floor() as i32).clamp(-180, 179);
        let x1 = (bounds.max_x.ceil() as i32).clamp(x0 + 1, 180);
        let y0 = (bounds.min_y.floor() as i32).clamp(-90, 89);
        let y1 = (bounds.max_y.ceil() as i32).clamp(y0 + 1, 90);
        (x0..x1).flat_map(move |x| (y0..y1).map(move |y| self.cell(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> CoordBounds {
        CoordBounds { min_x, min_y, max_x, max_y }
    }

    #[test]
    fn grid_covers_the_globe() {
        let grid = WorldGrid::build();
        assert_eq!(grid.len(), 64_800);

        let cell = grid.cell(0, 0);
        assert_eq!((cell.x(), cell.y()), (0, 0));
        assert_eq!(cell.bounds().min().x, 0.0);
        assert_eq!(cell.bounds().max().y, 1.0);

        // Corner bands exist and carry the right indices.
        assert_eq!((grid.cell(-180, -90).x(), grid.cell(-180, -90).y()), (-180, -90));
        assert_eq!((grid.cell(179, 89).x(), grid.cell(179, 89).y()), (179, 89));
    }

    #[test]
    fn transforms_follow_zones_and_hemispheres() {
        let grid = WorldGrid::build();
        assert_eq!(grid.cell(0, 0).transform().zone(), 31);
        assert_eq!(grid.cell(5, 50).transform().zone(), 31);
        assert_eq!(grid.cell(6, 50).transform().zone(), 32);
        assert!(grid.cell(0, 0).transform().is_northern());
        assert!(!grid.cell(0, -10).transform().is_northern());
    }

    #[test]
    fn overlap_ranges_round_outward() {
        let grid = WorldGrid::build();
        let cells: Vec<(i32, i32)> = grid
            .cells_overlapping(&bounds(-0.5, -0.5, 1.5, 0.5))
            .map(|cell| (cell.x(), cell.y()))
            .collect();
        assert_eq!(cells, vec![(-1, -1), (-1, 0), (0, -1), (0, 0), (1, -1), (1, 0)]);
    }

    #[test]
    fn degenerate_bounds_still_cover_one_cell() {
        let grid = WorldGrid::build();
        let cells: Vec<(i32, i32)> = grid
            .cells_overlapping(&bounds(0.25, 0.25, 0.25, 0.25))
            .map(|cell| (cell.x(), cell.y()))
            .collect();
        assert_eq!(cells, vec![(0, 0)]);
    }

    #[test]
    fn out_of_range_bounds_clamp_to_grid_limits() {
        let grid = WorldGrid::build();
        let count = grid.cells_overlapping(&bounds(170.0, 85.0, 200.0, 100.0)).count();
        // 170..180 × 85..90
        assert_eq!(count, 50);
    }

    #[test]
    fn shared_grid_is_reused() {
        let a = WorldGrid::shared();
        let b = WorldGrid::shared();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
