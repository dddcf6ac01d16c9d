#![forbid(unsafe_code)]

//! Pointer hit testing for a vertical list of equal-height rows.

use reorder_core::TargetSide;

/// Vertical placement of the rendered rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowGeometry {
    /// Y coordinate of the first row.
    pub top: u16,
    /// Height of every row. Zero disables hit testing.
    pub row_height: u16,
}

impl RowGeometry {
    #[must_use]
    pub const fn new(top: u16, row_height: u16) -> Self {
        Self { top, row_height }
    }
}

/// Row under the pointer and the half it is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowHit {
    pub index: usize,
    pub side: TargetSide,
}

/// Resolve the row at `y`.
///
/// The upper half of a row maps to [`TargetSide::Before`], the lower half to
/// [`TargetSide::After`]. Single-cell rows are always `After`. Returns `None`
/// above the first row, below the last, or when `row_height` is zero.
#[must_use]
pub fn hit_row(y: u16, geometry: &RowGeometry, item_count: usize) -> Option<RowHit> {
    if geometry.row_height == 0 || y < geometry.top {
        return None;
    }
    let offset = y - geometry.top;
    let index = usize::from(offset / geometry.row_height);
    if index >= item_count {
        return None;
    }
    let within_row = offset % geometry.row_height;
    let side = if within_row < geometry.row_height / 2 {
        TargetSide::Before
    } else {
        TargetSide::After
    };
    Some(RowHit { index, side })
}
