use std::sync::Arc;

use geo::{Coord, Rect};

use crate::proj::UtmTransform;

/// One 1°×1° tile of the world grid.
#[derive(Clone)]
pub struct GridCell {
    x: i32,
    y: i32,
    bounds: Rect<f64>,
    transform: Arc<UtmTransform>,
}

impl GridCell {
    pub(crate) fn new(x: i32, y: i32, transform: Arc<UtmTransform>) -> Self {
        let bounds = Rect::new(
            Coord { x: x as f64, y: y as f64 },
            Coord { x: (x + 1) as f64, y: (y + 1) as f64 },
        );
        Self { x, y, bounds, transform }
    }

    /// Get the longitude band index (-180..179).
    #[inline] pub fn x(&self) -> i32 { self.x }

    /// Get the latitude band index (-90..89).
    #[inline] pub fn y(&self) -> i32 { self.y }

    /// Get the tile's degree-space rectangle.
    #[inline] pub fn bounds(&self) -> &Rect<f64> { &self.bounds }

    /// Get the WGS84→UTM transform for this tile's zone.
    #[inline] pub fn transform(&self) -> &UtmTransform { &self.transform }
}
