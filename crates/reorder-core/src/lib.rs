#![forbid(unsafe_code)]

//! Ordering engine for drag and keyboard list reordering.
//!
//! Tracks which item is being dragged, resolves where it would land relative
//! to a hovered row, and commits the move into a gap-keyed order table.
//!
//! # Role
//! `reorder-core` holds no payloads and knows nothing about input devices or
//! rendering. Hosts feed it indices and read back transitions; the
//! `reorder-widgets` crate is one such host.
//!
//! # Primary responsibilities
//! - **OrderTable**: odd initial keys leave a free slot on each side of every item.
//! - **Drag / drag-over**: pure helpers for candidate keys and insert indicators.
//! - **Commit**: re-key the dragged item and stable-sort.
//! - **ReorderSession**: the state machine tying the pieces together.
//!
//! # Example
//! ```
//! use reorder_core::{ReorderEffect, ReorderSession, TargetSide, apply_permutation};
//!
//! let mut session = ReorderSession::with_item_count(3);
//! session.begin_drag(2).unwrap();
//! session.hover_over(0, TargetSide::Before).unwrap();
//! let transition = session.confirm_drop().unwrap();
//! if let ReorderEffect::Committed(event) = transition.effect {
//!     let items = apply_permutation(vec!["a", "b", "c"], &event.order).unwrap();
//!     assert_eq!(items, vec!["c", "a", "b"]);
//! }
//! ```

pub mod commit;
pub mod drag;
pub mod error;
pub mod keyboard;
pub mod order;
pub mod session;

pub use commit::commit_reorder;
pub use drag::{
    DragOperation, DragOverOperation, InsertSide, TargetSide, begin_drag, compute_drag_over,
    is_dragged_item, resolve_insert_side, should_accept_drag_over,
};
pub use error::ReorderError;
pub use keyboard::{MoveDirection, compute_keyboard_move};
pub use order::{
    OrderEntry, OrderKey, OrderTable, apply_permutation, create_initial_orders, permute_in_place,
    reorder_items,
};
pub use session::{
    ReorderCancelReason, ReorderEffect, ReorderEvent, ReorderInput, ReorderNoopReason,
    ReorderSession, ReorderSnapshot, ReorderState, ReorderTransition,
};
