#![doc = "Geodetic area engine public API"]
mod area;
mod cancel;
mod clip;
mod error;
mod geometry;
mod grid;
mod index;
mod proj;

#[doc(inline)]
pub use area::{AreaEngine, AreaResult, QueryPoint};

#[doc(inline)]
pub use cancel::CancelToken;

#[doc(inline)]
pub use error::{AreaError, Result};

#[doc(inline)]
pub use geometry::CoordBounds;

#[doc(inline)]
pub use grid::{GridCell, WorldGrid};

#[doc(inline)]
pub use index::{AreaIndex, IndexedArea};

#[doc(inline)]
pub use proj::{UtmTransform, utm_zone};
