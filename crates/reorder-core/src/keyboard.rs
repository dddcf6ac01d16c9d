#![forbid(unsafe_code)]

//! Keyboard navigation of the hover target.
//!
//! Arrow presses walk the hover target one row at a time, clamped to the
//! list. Moving up lands before the new row; moving down lands after it.

use crate::drag::{DragOverOperation, TargetSide, compute_drag_over};
use crate::order::OrderTable;

/// Direction of a keyboard move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Up,
    Down,
}

impl MoveDirection {
    /// Side the hover lands on after moving in this direction.
    #[must_use]
    pub const fn side(self) -> TargetSide {
        match self {
            Self::Up => TargetSide::Before,
            Self::Down => TargetSide::After,
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Returns the stable string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

/// Compute the hover target one step from `current_index`.
///
/// Returns `None` when the step is clamped back onto `current_index`, i.e.
/// moving up from row 0 or down from `max_index`.
///
/// # Panics
///
/// Panics if the clamped target is not a valid position in `table`.
#[must_use]
pub fn compute_keyboard_move(
    direction: MoveDirection,
    current_index: usize,
    table: &OrderTable,
    max_index: usize,
) -> Option<DragOverOperation> {
    let target = match direction {
        MoveDirection::Up => current_index.saturating_sub(1),
        MoveDirection::Down => max_index.min(current_index + 1),
    };
    if target == current_index {
        return None;
    }
    Some(compute_drag_over(target, table, direction.side()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::create_initial_orders;

    #[test]
    fn move_up_within_bounds() {
        let table = create_initial_orders(3);
        let over = compute_keyboard_move(MoveDirection::Up, 1, &table, 2).expect("in bounds");
        assert_eq!(over.hovered_index, 0);
        assert_eq!(over.candidate_order_key, 0);
        assert_eq!(over.side, TargetSide::Before);
    }

    #[test]
    fn move_down_within_bounds() {
        let table = create_initial_orders(3);
        let over = compute_keyboard_move(MoveDirection::Down, 1, &table, 2).expect("in bounds");
        assert_eq!(over.hovered_index, 2);
        assert_eq!(over.candidate_order_key, 6);
        assert_eq!(over.side, TargetSide::After);
    }

    #[test]
    fn boundaries_return_none() {
        let table = create_initial_orders(3);
        assert_eq!(compute_keyboard_move(MoveDirection::Up, 0, &table, 2), None);
        assert_eq!(compute_keyboard_move(MoveDirection::Down, 2, &table, 2), None);
    }

    #[test]
    fn single_item_never_moves() {
        let table = create_initial_orders(1);
        assert_eq!(compute_keyboard_move(MoveDirection::Up, 0, &table, 0), None);
        assert_eq!(compute_keyboard_move(MoveDirection::Down, 0, &table, 0), None);
    }

    #[test]
    fn direction_helpers() {
        assert_eq!(MoveDirection::Up.opposite(), MoveDirection::Down);
        assert_eq!(MoveDirection::Down.as_str(), "down");
        assert_eq!(MoveDirection::Up.side(), TargetSide::Before);
    }
}
