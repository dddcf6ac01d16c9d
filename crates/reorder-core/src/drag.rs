#![forbid(unsafe_code)]

//! Drag tracking and drag-over resolution.
//!
//! A [`DragOperation`] names the item being dragged. A [`DragOverOperation`]
//! names the row under the pointer (or keyboard cursor) together with the
//! order key the dragged item would receive if dropped there.
//!
//! Every function in this module is pure; the session decides when to apply
//! the values they return.

use crate::order::{OrderKey, OrderTable};

/// The item currently being dragged, by original index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DragOperation {
    pub dragged_index: usize,
}

impl DragOperation {
    /// Create a drag operation.
    #[must_use]
    pub const fn new(dragged_index: usize) -> Self {
        Self { dragged_index }
    }
}

/// Side of a hovered row that a drop would land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TargetSide {
    Before,
    /// Used when the host cannot tell which half of the row is hovered.
    #[default]
    After,
}

impl TargetSide {
    /// Returns the stable string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Before => "before",
            Self::After => "after",
        }
    }

    /// Insert indicator matching this side.
    #[must_use]
    pub const fn insert_side(self) -> InsertSide {
        match self {
            Self::Before => InsertSide::InsertBefore,
            Self::After => InsertSide::InsertAfter,
        }
    }
}

/// Insert indicator for one rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InsertSide {
    InsertBefore,
    InsertAfter,
    #[default]
    CannotInsertHere,
}

impl InsertSide {
    /// Whether a drop indicator should be drawn.
    #[must_use]
    pub const fn can_insert(self) -> bool {
        !matches!(self, Self::CannotInsertHere)
    }
}

/// Hover target plus the key the dragged item would take on drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DragOverOperation {
    pub hovered_index: usize,
    pub candidate_order_key: OrderKey,
    pub side: TargetSide,
}

/// Start tracking a drag of `dragged_index`.
///
/// Bounds are not checked here; the session validates indices.
#[must_use]
pub const fn begin_drag(dragged_index: usize) -> DragOperation {
    DragOperation::new(dragged_index)
}

/// Whether `index` is the item being dragged.
#[must_use]
pub fn is_dragged_item(index: usize, drag: Option<&DragOperation>) -> bool {
    drag.is_some_and(|drag| drag.dragged_index == index)
}

/// Compute the drag-over state for hovering `hovered_index` on `side`.
///
/// # Panics
///
/// Panics if `hovered_index` is not a valid position in `table`.
#[must_use]
pub fn compute_drag_over(
    hovered_index: usize,
    table: &OrderTable,
    side: TargetSide,
) -> DragOverOperation {
    let key = table.key_at(hovered_index);
    let candidate_order_key = match side {
        TargetSide::Before => key - 1,
        TargetSide::After => key + 1,
    };
    DragOverOperation {
        hovered_index,
        candidate_order_key,
        side,
    }
}

/// Decide whether `candidate` should replace the current hover state.
///
/// Rejects hovering the dragged item itself and candidates whose key equals
/// the current one. Absent operations never block acceptance.
#[must_use]
pub fn should_accept_drag_over(
    candidate: &DragOverOperation,
    drag: Option<&DragOperation>,
    current: Option<&DragOverOperation>,
) -> bool {
    let targets_dragged = drag.is_some_and(|drag| drag.dragged_index == candidate.hovered_index);
    let unchanged =
        current.is_some_and(|current| current.candidate_order_key == candidate.candidate_order_key);
    !targets_dragged && !unchanged
}

/// Insert indicator for the row at `index`.
///
/// # Panics
///
/// Panics if `drag_over` targets `index` and `index` is not a valid position
/// in `table`.
#[must_use]
pub fn resolve_insert_side(
    index: usize,
    drag_over: Option<&DragOverOperation>,
    table: &OrderTable,
) -> InsertSide {
    match drag_over {
        Some(over) if over.hovered_index == index => {
            if over.candidate_order_key < table.key_at(index) {
                InsertSide::InsertBefore
            } else {
                InsertSide::InsertAfter
            }
        }
        _ => InsertSide::CannotInsertHere,
    }
}
