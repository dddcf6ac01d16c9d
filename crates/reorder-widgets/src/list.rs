#![forbid(unsafe_code)]

//! Reorderable list that owns its items and routes input to a session.
//!
//! [`ReorderList`] keeps the payload vector, the [`ReorderSession`] and the
//! announcement queue in step: a committed drop permutes the items, fires
//! `on_reorder` once, and queues the drop announcement.
//!
//! # Input
//!
//! | input | idle | dragging |
//! |---|---|---|
//! | Space / Enter | pick up focused row | drop |
//! | Up / Down (`k` / `j`) | ignored | move drop target |
//! | Escape | ignored | cancel |
//! | left button down on a row | pick up row | pick up row |
//! | drag / move over a row | ignored | hover row half (clear on the dragged row) |
//! | left button up | ignored | hover, then drop (cancel on the dragged row or off the rows) |
//! | pointer exits / focus lost | ignored | cancel |

use std::fmt;

#[cfg(feature = "tracing")]
use web_time::Instant;

use reorder_core::{
    InsertSide, MoveDirection, ReorderEffect, ReorderError, ReorderEvent, ReorderInput,
    ReorderSession, ReorderTransition, TargetSide, permute_in_place,
};
use reorder_i18n::ReorderTexts;

use crate::announce::{
    Announcement, AnnouncementQueue, drag_status, row_label, row_status, transition_announcement,
};
use crate::event::{Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use crate::keymap::{ReorderKey, ReorderKeymap};
use crate::pointer::{RowGeometry, hit_row};

/// Callback fired once per committed reorder.
pub type ReorderCallback = Box<dyn FnMut(&ReorderEvent)>;

/// Render and accessibility state for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowState<'a> {
    /// The row is being dragged.
    pub grabbed: bool,
    /// The row is the current drop target.
    pub drop_target: bool,
    pub insert_side: InsertSide,
    pub label: String,
    pub role_description: &'a str,
    pub status: &'a str,
}

/// A list of `T` reorderable by keyboard and pointer.
pub struct ReorderList<T> {
    items: Vec<T>,
    session: ReorderSession,
    keymap: ReorderKeymap,
    texts: ReorderTexts,
    announcements: AnnouncementQueue,
    on_reorder: Option<ReorderCallback>,
    disabled: bool,
    #[cfg(feature = "tracing")]
    drag_started_at: Option<Instant>,
}

impl<T> fmt::Debug for ReorderList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReorderList")
            .field("len", &self.items.len())
            .field("state", &self.session.state())
            .field("disabled", &self.disabled)
            .field("pending_announcements", &self.announcements.len())
            .field("has_on_reorder", &self.on_reorder.is_some())
            .finish()
    }
}

impl<T> ReorderList<T> {
    /// Create a list over `items` with default keys and texts.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self {
            session: ReorderSession::with_item_count(items.len()),
            items,
            keymap: ReorderKeymap::default(),
            texts: ReorderTexts::default(),
            announcements: AnnouncementQueue::default(),
            on_reorder: None,
            disabled: false,
            #[cfg(feature = "tracing")]
            drag_started_at: None,
        }
    }

    /// Set the text catalog.
    #[must_use]
    pub fn texts(mut self, texts: ReorderTexts) -> Self {
        self.texts = texts;
        self
    }

    /// Set the key bindings.
    #[must_use]
    pub fn keymap(mut self, keymap: ReorderKeymap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Set the announcement queue capacity.
    #[must_use]
    pub fn announcement_capacity(mut self, capacity: usize) -> Self {
        self.announcements = AnnouncementQueue::with_capacity(capacity);
        self
    }

    /// Register the callback fired after each committed reorder.
    #[must_use]
    pub fn on_reorder(mut self, callback: impl FnMut(&ReorderEvent) + 'static) -> Self {
        self.on_reorder = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn session(&self) -> &ReorderSession {
        &self.session
    }

    #[must_use]
    pub fn text_catalog(&self) -> &ReorderTexts {
        &self.texts
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Replace the items. An in-flight drag is canceled.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        if let Some(transition) = self.session.set_item_count(self.items.len()) {
            self.after_transition(&transition);
        }
    }

    /// Enable or disable input routing. Disabling cancels an in-flight drag.
    ///
    /// Programmatic calls ([`Self::apply`] and friends) still work while
    /// disabled.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.force_cancel();
        }
    }

    // -----------------------------------------------------------------------
    // Session inputs
    // -----------------------------------------------------------------------

    pub fn begin_drag(&mut self, index: usize) -> Result<ReorderTransition, ReorderError> {
        self.apply(ReorderInput::BeginDrag { index })
    }

    pub fn hover_over(
        &mut self,
        index: usize,
        side: TargetSide,
    ) -> Result<ReorderTransition, ReorderError> {
        self.apply(ReorderInput::HoverOver { index, side })
    }

    pub fn confirm_drop(&mut self) -> Result<ReorderTransition, ReorderError> {
        self.apply(ReorderInput::ConfirmDrop)
    }

    pub fn cancel_drag(&mut self) -> Result<ReorderTransition, ReorderError> {
        self.apply(ReorderInput::CancelDrag)
    }

    pub fn move_directional(
        &mut self,
        direction: MoveDirection,
    ) -> Result<ReorderTransition, ReorderError> {
        self.apply(ReorderInput::MoveDirectional(direction))
    }

    /// Apply one input, then sync items, callback and announcements.
    pub fn apply(&mut self, input: ReorderInput) -> Result<ReorderTransition, ReorderError> {
        let transition = self.session.apply(input)?;
        if let ReorderEffect::Committed(event) = &transition.effect {
            permute_in_place(&mut self.items, &event.order)?;
        }
        self.after_transition(&transition);
        Ok(transition)
    }

    fn force_cancel(&mut self) -> Option<ReorderTransition> {
        let transition = self.session.force_cancel()?;
        self.after_transition(&transition);
        Some(transition)
    }

    fn after_transition(&mut self, transition: &ReorderTransition) {
        #[cfg(feature = "tracing")]
        self.log_transition(transition);

        if let (ReorderEffect::Committed(event), Some(callback)) =
            (&transition.effect, self.on_reorder.as_mut())
        {
            callback(event);
        }
        let announcement = self
            .session
            .snapshot()
            .ok()
            .and_then(|snapshot| transition_announcement(&self.texts, transition, &snapshot));
        if let Some(announcement) = announcement {
            self.announcements.push(announcement);
        }
    }

    #[cfg(feature = "tracing")]
    fn log_transition(&mut self, transition: &ReorderTransition) {
        match &transition.effect {
            ReorderEffect::DragStarted { .. } => {
                self.drag_started_at = Some(Instant::now());
            }
            ReorderEffect::Committed(event) => {
                let drag_duration_us = self.take_drag_duration_us();
                tracing::debug!(
                    message = "reorder_list.commit",
                    source_index = event.source_index,
                    target_index = event.target_index,
                    new_position = event.new_position(),
                    total_items = self.items.len(),
                    drag_duration_us
                );
            }
            ReorderEffect::Canceled { dragged, reason } => {
                let drag_duration_us = self.take_drag_duration_us();
                tracing::debug!(
                    message = "reorder_list.cancel",
                    dragged = *dragged,
                    reason = reason.as_str(),
                    drag_duration_us
                );
            }
            ReorderEffect::HoverChanged { .. }
            | ReorderEffect::HoverCleared { .. }
            | ReorderEffect::Noop { .. } => {}
        }
    }

    #[cfg(feature = "tracing")]
    fn take_drag_duration_us(&mut self) -> u64 {
        self.drag_started_at
            .take()
            .map_or(0, |start| {
                u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX)
            })
    }

    // -----------------------------------------------------------------------
    // Event routing
    // -----------------------------------------------------------------------

    /// Route a key press on the row at `focused_index`.
    ///
    /// Returns `Ok(None)` when the key is not consumed by the list.
    pub fn handle_key(
        &mut self,
        event: &KeyEvent,
        focused_index: usize,
    ) -> Result<Option<ReorderTransition>, ReorderError> {
        if self.disabled {
            return Ok(None);
        }
        let Some(key) = self.keymap.resolve(event) else {
            return Ok(None);
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "reorder_list.key",
            key = ?key,
            focused_index,
            dragging = self.session.state().is_active()
        );

        let dragging = self.session.state().is_active();
        let input = match key {
            ReorderKey::Activate if dragging => ReorderInput::ConfirmDrop,
            ReorderKey::Activate => ReorderInput::BeginDrag {
                index: focused_index,
            },
            ReorderKey::Cancel if dragging => ReorderInput::CancelDrag,
            ReorderKey::Navigate(direction) if dragging => ReorderInput::MoveDirectional(direction),
            ReorderKey::Cancel | ReorderKey::Navigate(_) => return Ok(None),
        };
        self.apply(input).map(Some)
    }

    /// Route a pointer event over rows laid out by `geometry`.
    ///
    /// Returns `Ok(None)` when the event is not consumed by the list.
    pub fn handle_mouse(
        &mut self,
        event: &MouseEvent,
        geometry: &RowGeometry,
    ) -> Result<Option<ReorderTransition>, ReorderError> {
        if self.disabled {
            return Ok(None);
        }
        let dragged = self.session.state().drag().map(|drag| drag.dragged_index);
        let dragging = dragged.is_some();
        let hit = hit_row(event.y, geometry, self.items.len());
        match (event.kind, hit) {
            (MouseEventKind::Down(MouseButton::Left), Some(hit)) => {
                self.begin_drag(hit.index).map(Some)
            }
            (MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved, Some(hit))
                if dragged == Some(hit.index) =>
            {
                self.apply(ReorderInput::ClearHover).map(Some)
            }
            (MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved, Some(hit))
                if dragging =>
            {
                self.hover_over(hit.index, hit.side).map(Some)
            }
            (MouseEventKind::Up(MouseButton::Left), Some(hit)) if dragged == Some(hit.index) => {
                self.cancel_drag().map(Some)
            }
            (MouseEventKind::Up(MouseButton::Left), Some(hit)) if dragging => {
                self.hover_over(hit.index, hit.side)?;
                self.confirm_drop().map(Some)
            }
            (MouseEventKind::Up(MouseButton::Left), None) | (MouseEventKind::Exited, _)
                if dragging =>
            {
                self.cancel_drag().map(Some)
            }
            _ => Ok(None),
        }
    }

    /// Route any [`Event`]. Pointer events use `geometry`.
    pub fn handle_event(
        &mut self,
        event: &Event,
        geometry: &RowGeometry,
    ) -> Result<Option<ReorderTransition>, ReorderError> {
        match event {
            Event::Key {
                event,
                focused_index,
            } => self.handle_key(event, *focused_index),
            Event::Mouse(mouse) => self.handle_mouse(mouse, geometry),
            Event::Focus(false) => Ok(self.force_cancel()),
            Event::Focus(true) => Ok(None),
        }
    }

    // -----------------------------------------------------------------------
    // Rendering queries
    // -----------------------------------------------------------------------

    /// Render and accessibility state of row `index`, or `None` past the end.
    #[must_use]
    pub fn row_state(&self, index: usize) -> Option<RowState<'_>> {
        if index >= self.items.len() {
            return None;
        }
        let snapshot = self.session.snapshot().ok()?;
        Some(RowState {
            grabbed: snapshot.is_dragging(index),
            drop_target: snapshot.is_over(index),
            insert_side: self.session.resolve_insert_side(index).ok()?,
            label: row_label(&self.texts, index, self.items.len()),
            role_description: &self.texts.role_description,
            status: row_status(&self.texts, &snapshot, index),
        })
    }

    /// Live status text while a drag has a target.
    #[must_use]
    pub fn live_status(&self) -> Option<String> {
        let snapshot = self.session.snapshot().ok()?;
        drag_status(&self.texts, &snapshot)
    }

    /// Take all pending announcements, oldest first.
    pub fn drain_announcements(&mut self) -> Vec<Announcement> {
        self.announcements.drain()
    }

    /// Peek at pending announcements without clearing.
    #[must_use]
    pub fn pending_announcements(&self) -> &[Announcement] {
        self.announcements.pending()
    }
}
