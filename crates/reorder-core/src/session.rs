#![forbid(unsafe_code)]

//! Reorder session: the single owned state value behind a reorderable list.
//!
//! ```text
//! Idle --begin_drag--> Dragging --hover/arrow/clear_hover--> Dragging
//!                         |
//!                         +--confirm (hover present, order changes)--> Idle + Committed
//!                         +--confirm (no hover / order unchanged)----> Idle + Canceled
//!                         +--cancel----------------------------------> Idle + Canceled
//! ```
//!
//! Every input produces exactly one [`ReorderTransition`]. Inputs that change
//! nothing are reported as [`ReorderEffect::Noop`] with a reason rather than
//! as errors.
//!
//! # Invariants
//! 1. A drag-over state exists only while a drag is in progress.
//! 2. A commit and the return to `Idle` happen in the same call.
//! 3. After a commit the order table is rebuilt for the new sequence.
//! 4. Rejected input (`Err`) leaves the session untouched.

use crate::commit::commit_reorder;
use crate::drag::{
    DragOperation, DragOverOperation, InsertSide, TargetSide, begin_drag, compute_drag_over,
    is_dragged_item, resolve_insert_side, should_accept_drag_over,
};
use crate::error::ReorderError;
use crate::keyboard::{MoveDirection, compute_keyboard_move};
use crate::order::OrderTable;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Lifecycle state of a reorder session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReorderState {
    #[default]
    Idle,
    Dragging {
        drag: DragOperation,
        over: Option<DragOverOperation>,
    },
}

impl ReorderState {
    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// The active drag operation, if any.
    #[must_use]
    pub const fn drag(&self) -> Option<DragOperation> {
        match self {
            Self::Idle => None,
            Self::Dragging { drag, .. } => Some(*drag),
        }
    }

    /// The active drag-over operation, if any.
    #[must_use]
    pub const fn drag_over(&self) -> Option<DragOverOperation> {
        match self {
            Self::Idle => None,
            Self::Dragging { over, .. } => *over,
        }
    }

    /// Returns the stable string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging { .. } => "dragging",
        }
    }
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Discrete input consumed by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReorderInput {
    BeginDrag { index: usize },
    HoverOver { index: usize, side: TargetSide },
    /// Drop the hover target, keeping the drag.
    ClearHover,
    ConfirmDrop,
    CancelDrag,
    MoveDirectional(MoveDirection),
}

impl ReorderInput {
    /// Name of the operation, used in errors and logs.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::BeginDrag { .. } => "begin_drag",
            Self::HoverOver { .. } => "hover_over",
            Self::ClearHover => "clear_hover",
            Self::ConfirmDrop => "confirm_drop",
            Self::CancelDrag => "cancel_drag",
            Self::MoveDirectional(_) => "move_directional",
        }
    }
}

// ---------------------------------------------------------------------------
// Effects
// ---------------------------------------------------------------------------

/// Why an input left the session unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReorderNoopReason {
    IdleWithoutActiveDrag,
    HoverOnDraggedItem,
    HoverUnchanged,
    AtBoundary,
}

/// Why a drag ended without a reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReorderCancelReason {
    /// Explicit cancel (Escape, pointer left the list, programmatic).
    Requested,
    /// Confirmed with no hover target.
    NoDropTarget,
    /// Confirmed on a slot that leaves every item in place.
    PositionUnchanged,
    /// The backing collection changed while dragging.
    ItemsChanged,
}

impl ReorderCancelReason {
    /// Returns the stable string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Requested => "requested",
            Self::NoDropTarget => "no_drop_target",
            Self::PositionUnchanged => "position_unchanged",
            Self::ItemsChanged => "items_changed",
        }
    }
}

/// A committed reorder, by original indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderEvent {
    /// Original index of the dragged item.
    pub source_index: usize,
    /// Original index of the row it was dropped on.
    pub target_index: usize,
    /// Side of the target it landed on.
    pub side: TargetSide,
    /// New sequence: `order[i]` is the original index now at position `i`.
    pub order: Vec<usize>,
}

impl ReorderEvent {
    /// Position the dragged item occupies after the reorder.
    #[must_use]
    pub fn new_position(&self) -> usize {
        self.order
            .iter()
            .position(|&original| original == self.source_index)
            .unwrap_or(self.source_index)
    }
}

/// Effect emitted by one transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderEffect {
    DragStarted {
        index: usize,
        replaced: Option<usize>,
    },
    HoverChanged {
        over: DragOverOperation,
    },
    HoverCleared {
        previous: DragOverOperation,
    },
    Committed(ReorderEvent),
    Canceled {
        dragged: usize,
        reason: ReorderCancelReason,
    },
    Noop {
        reason: ReorderNoopReason,
    },
}

impl ReorderEffect {
    /// Whether the effect changed observable state.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        matches!(self, Self::Noop { .. })
    }
}

/// One state-machine step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderTransition {
    pub transition_id: u64,
    pub from: ReorderState,
    pub to: ReorderState,
    pub effect: ReorderEffect,
}

/// Read-only view for renderers and announcement text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderSnapshot {
    pub item_count: usize,
    pub dragged_index: Option<usize>,
    pub drag_over: Option<DragOverOperation>,
}

impl ReorderSnapshot {
    /// Whether `index` is being dragged.
    #[must_use]
    pub fn is_dragging(&self, index: usize) -> bool {
        self.dragged_index == Some(index)
    }

    /// Whether `index` is the current hover target.
    #[must_use]
    pub fn is_over(&self, index: usize) -> bool {
        self.drag_over.is_some_and(|over| over.hovered_index == index)
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Order table plus drag state for one list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReorderSession {
    table: Option<OrderTable>,
    state: ReorderState,
    transition_counter: u64,
}

impl ReorderSession {
    /// Create a detached session. Every operation fails with
    /// [`ReorderError::NotInitialized`] until [`Self::set_item_count`] is called.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session attached to a list of `item_count` items.
    #[must_use]
    pub fn with_item_count(item_count: usize) -> Self {
        Self {
            table: Some(OrderTable::initial(item_count)),
            state: ReorderState::Idle,
            transition_counter: 0,
        }
    }

    /// Whether the session has an order table.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.table.is_some()
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> ReorderState {
        self.state
    }

    /// Current order table, if attached.
    #[must_use]
    pub fn order_table(&self) -> Option<&OrderTable> {
        self.table.as_ref()
    }

    /// Rebuild the order table after the backing collection changed.
    ///
    /// An in-flight drag is canceled; the returned transition reports it.
    pub fn set_item_count(&mut self, item_count: usize) -> Option<ReorderTransition> {
        self.table = Some(OrderTable::initial(item_count));
        tracing::debug!(message = "reorder.table_rebuilt", item_count);
        let from = self.state;
        let drag = from.drag()?;
        self.state = ReorderState::Idle;
        let transition = self.emit(
            from,
            ReorderEffect::Canceled {
                dragged: drag.dragged_index,
                reason: ReorderCancelReason::ItemsChanged,
            },
        );
        Some(transition)
    }

    /// Number of items in the attached list.
    pub fn item_count(&self) -> Result<usize, ReorderError> {
        Ok(self.table("item_count")?.len())
    }

    /// Whether `index` is the item being dragged.
    pub fn is_dragged_item(&self, index: usize) -> Result<bool, ReorderError> {
        self.table("is_dragged_item")?;
        Ok(is_dragged_item(index, self.state.drag().as_ref()))
    }

    /// Insert indicator for the row at `index`.
    pub fn resolve_insert_side(&self, index: usize) -> Result<InsertSide, ReorderError> {
        let table = self.table("resolve_insert_side")?;
        Ok(resolve_insert_side(
            index,
            self.state.drag_over().as_ref(),
            table,
        ))
    }

    /// Read-only view of the drag state.
    pub fn snapshot(&self) -> Result<ReorderSnapshot, ReorderError> {
        let table = self.table("snapshot")?;
        Ok(ReorderSnapshot {
            item_count: table.len(),
            dragged_index: self.state.drag().map(|drag| drag.dragged_index),
            drag_over: self.state.drag_over(),
        })
    }

    /// Start dragging `index`. Overwrites a drag already in progress; its
    /// hover target is kept unless it points at `index`.
    pub fn begin_drag(&mut self, index: usize) -> Result<ReorderTransition, ReorderError> {
        self.apply(ReorderInput::BeginDrag { index })
    }

    /// Hover `index` on `side`.
    pub fn hover_over(
        &mut self,
        index: usize,
        side: TargetSide,
    ) -> Result<ReorderTransition, ReorderError> {
        self.apply(ReorderInput::HoverOver { index, side })
    }

    /// Forget the hover target while the drag continues.
    pub fn clear_hover(&mut self) -> Result<ReorderTransition, ReorderError> {
        self.apply(ReorderInput::ClearHover)
    }

    /// Drop on the current hover target.
    pub fn confirm_drop(&mut self) -> Result<ReorderTransition, ReorderError> {
        self.apply(ReorderInput::ConfirmDrop)
    }

    /// Abandon the current drag.
    pub fn cancel_drag(&mut self) -> Result<ReorderTransition, ReorderError> {
        self.apply(ReorderInput::CancelDrag)
    }

    /// Alias of [`Self::cancel_drag`]: clears drag and hover state.
    pub fn end_drag(&mut self) -> Result<ReorderTransition, ReorderError> {
        self.cancel_drag()
    }

    /// Move the hover target one row up or down.
    pub fn move_directional(
        &mut self,
        direction: MoveDirection,
    ) -> Result<ReorderTransition, ReorderError> {
        self.apply(ReorderInput::MoveDirectional(direction))
    }

    /// Apply one input and report the resulting transition.
    pub fn apply(&mut self, input: ReorderInput) -> Result<ReorderTransition, ReorderError> {
        let table = self
            .table
            .as_ref()
            .ok_or(ReorderError::NotInitialized {
                operation: input.operation(),
            })?;
        let len = table.len();
        match input {
            ReorderInput::BeginDrag { index } | ReorderInput::HoverOver { index, .. }
                if index >= len =>
            {
                return Err(ReorderError::IndexOutOfRange { index, len });
            }
            _ => {}
        }

        let from = self.state;
        let mut committed_table = None;
        let effect = match (from, input) {
            (_, ReorderInput::BeginDrag { index }) => {
                let replaced = from.drag().map(|drag| drag.dragged_index);
                self.state = ReorderState::Dragging {
                    drag: begin_drag(index),
                    over: from
                        .drag_over()
                        .filter(|over| over.hovered_index != index),
                };
                ReorderEffect::DragStarted { index, replaced }
            }
            (ReorderState::Idle, _) => ReorderEffect::Noop {
                reason: ReorderNoopReason::IdleWithoutActiveDrag,
            },
            (ReorderState::Dragging { drag, over }, ReorderInput::HoverOver { index, side }) => {
                let candidate = compute_drag_over(index, table, side);
                if should_accept_drag_over(&candidate, Some(&drag), over.as_ref()) {
                    self.state = ReorderState::Dragging {
                        drag,
                        over: Some(candidate),
                    };
                    ReorderEffect::HoverChanged { over: candidate }
                } else if candidate.hovered_index == drag.dragged_index {
                    ReorderEffect::Noop {
                        reason: ReorderNoopReason::HoverOnDraggedItem,
                    }
                } else {
                    ReorderEffect::Noop {
                        reason: ReorderNoopReason::HoverUnchanged,
                    }
                }
            }
            (ReorderState::Dragging { over: None, .. }, ReorderInput::ClearHover) => {
                ReorderEffect::Noop {
                    reason: ReorderNoopReason::HoverUnchanged,
                }
            }
            (
                ReorderState::Dragging {
                    drag,
                    over: Some(previous),
                },
                ReorderInput::ClearHover,
            ) => {
                self.state = ReorderState::Dragging { drag, over: None };
                ReorderEffect::HoverCleared { previous }
            }
            (ReorderState::Dragging { drag, over }, ReorderInput::MoveDirectional(direction)) => {
                let current = over.map_or(drag.dragged_index, |over| over.hovered_index);
                let max_index = len.saturating_sub(1);
                match compute_keyboard_move(direction, current, table, max_index) {
                    Some(next) => {
                        self.state = ReorderState::Dragging {
                            drag,
                            over: Some(next),
                        };
                        ReorderEffect::HoverChanged { over: next }
                    }
                    None => ReorderEffect::Noop {
                        reason: ReorderNoopReason::AtBoundary,
                    },
                }
            }
            (ReorderState::Dragging { drag, over: None }, ReorderInput::ConfirmDrop) => {
                self.state = ReorderState::Idle;
                ReorderEffect::Canceled {
                    dragged: drag.dragged_index,
                    reason: ReorderCancelReason::NoDropTarget,
                }
            }
            (ReorderState::Dragging { drag, over: Some(over) }, ReorderInput::ConfirmDrop) => {
                let next = commit_reorder(table, drag.dragged_index, over.candidate_order_key);
                self.state = ReorderState::Idle;
                if next.is_identity() {
                    ReorderEffect::Canceled {
                        dragged: drag.dragged_index,
                        reason: ReorderCancelReason::PositionUnchanged,
                    }
                } else {
                    committed_table = Some(OrderTable::initial(len));
                    ReorderEffect::Committed(ReorderEvent {
                        source_index: drag.dragged_index,
                        target_index: over.hovered_index,
                        side: over.side,
                        order: next.permutation(),
                    })
                }
            }
            (ReorderState::Dragging { drag, .. }, ReorderInput::CancelDrag) => {
                self.state = ReorderState::Idle;
                ReorderEffect::Canceled {
                    dragged: drag.dragged_index,
                    reason: ReorderCancelReason::Requested,
                }
            }
        };

        if committed_table.is_some() {
            self.table = committed_table;
        }
        Ok(self.emit(from, effect))
    }

    /// Unconditionally return to `Idle`.
    ///
    /// Returns `None` when no drag was in progress.
    pub fn force_cancel(&mut self) -> Option<ReorderTransition> {
        let from = self.state;
        let drag = from.drag()?;
        self.state = ReorderState::Idle;
        Some(self.emit(
            from,
            ReorderEffect::Canceled {
                dragged: drag.dragged_index,
                reason: ReorderCancelReason::Requested,
            },
        ))
    }

    fn table(&self, operation: &'static str) -> Result<&OrderTable, ReorderError> {
        self.table
            .as_ref()
            .ok_or(ReorderError::NotInitialized { operation })
    }

    fn emit(&mut self, from: ReorderState, effect: ReorderEffect) -> ReorderTransition {
        self.transition_counter = self.transition_counter.saturating_add(1);
        let transition = ReorderTransition {
            transition_id: self.transition_counter,
            from,
            to: self.state,
            effect,
        };
        log_transition(&transition);
        transition
    }
}

fn log_transition(transition: &ReorderTransition) {
    match &transition.effect {
        ReorderEffect::DragStarted { index, replaced } => {
            tracing::debug!(
                message = "reorder.drag_start",
                transition_id = transition.transition_id,
                index = *index,
                replaced = ?replaced
            );
        }
        ReorderEffect::HoverChanged { over } => {
            tracing::debug!(
                message = "reorder.hover",
                transition_id = transition.transition_id,
                hovered_index = over.hovered_index,
                candidate_order_key = over.candidate_order_key,
                side = over.side.as_str()
            );
        }
        ReorderEffect::HoverCleared { previous } => {
            tracing::debug!(
                message = "reorder.hover_cleared",
                transition_id = transition.transition_id,
                previous_index = previous.hovered_index
            );
        }
        ReorderEffect::Committed(event) => {
            tracing::debug!(
                message = "reorder.commit",
                transition_id = transition.transition_id,
                source_index = event.source_index,
                target_index = event.target_index,
                side = event.side.as_str()
            );
        }
        ReorderEffect::Canceled { dragged, reason } => {
            tracing::debug!(
                message = "reorder.cancel",
                transition_id = transition.transition_id,
                dragged = *dragged,
                reason = reason.as_str()
            );
        }
        ReorderEffect::Noop { reason } => {
            tracing::trace!(
                message = "reorder.noop",
                transition_id = transition.transition_id,
                reason = ?reason
            );
        }
    }
}
