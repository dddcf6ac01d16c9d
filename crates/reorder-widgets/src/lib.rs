#![forbid(unsafe_code)]

//! Keyboard and pointer host adapter for the reorder engine.
//!
//! # Role
//! `reorder-widgets` turns toolkit-neutral input events into
//! [`reorder_core::ReorderSession`] inputs, keeps the caller's items in the
//! committed order, and produces the row state and announcements a renderer
//! or screen reader needs.
//!
//! # Primary responsibilities
//! - **ReorderList**: owns the items and fires `on_reorder` once per commit.
//! - **ReorderKeymap**: Space/Enter, Escape and arrow bindings.
//! - **hit_row**: maps a pointer position to a row and the half it is in.
//! - **Announcements**: row labels, status text and a bounded live queue.

pub mod announce;
pub mod event;
pub mod keymap;
pub mod list;
pub mod pointer;

pub use announce::{
    Announcement, AnnouncementPriority, AnnouncementQueue, drag_status, row_label, row_status,
    transition_announcement,
};
pub use event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind,
};
pub use keymap::{ActivateKey, ReorderKey, ReorderKeymap};
pub use list::{ReorderCallback, ReorderList, RowState};
pub use pointer::{RowGeometry, RowHit, hit_row};
