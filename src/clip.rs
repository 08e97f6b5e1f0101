use std::panic::{AssertUnwindSafe, catch_unwind};

use geo::{BooleanOps, MultiPolygon, Polygon, Rect};

/// Outcome of clipping one leaf polygon against one grid cell.
pub(crate) enum ClipOutcome {
    /// The intersection, possibly multi-part (cell boundaries can split
    /// concave or multi-touching shapes). May be empty.
    Fragments(MultiPolygon<f64>),
    /// The boolean-ops kernel could not clip this input; the caller
    /// should project the whole leaf with this cell's transform instead.
    FallbackNeeded,
}

/// Intersect a leaf polygon with a cell rectangle.
///
/// Floating-point polygon clipping can blow up on numerically degenerate
/// topology; the kernel reports that by panicking. The unwind guard maps
/// that to an explicit `FallbackNeeded` value.
pub(crate) fn clip_to_cell(leaf: &Polygon<f64>, cell: &Rect<f64>) -> ClipOutcome {
    let cell_polygon = cell.to_polygon();
    match catch_unwind(AssertUnwindSafe(|| leaf.intersection(&cell_polygon))) {
        Ok(fragments) => ClipOutcome::Fragments(fragments),
        Err(_) => ClipOutcome::FallbackNeeded,
    }
}
