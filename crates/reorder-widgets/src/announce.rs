#![forbid(unsafe_code)]

//! Screen-reader text for rows and drag transitions.
//!
//! Row text (label, status, live drag status) is derived from a
//! [`ReorderSnapshot`] only. Transition text is queued as [`Announcement`]s
//! that the host drains into its live region.
//!
//! | transition | announcement |
//! |---|---|
//! | drag started | row status of the dragged item (high) |
//! | hover changed | live drag status (normal) |
//! | committed | "Item N dropped at position M" (high) |
//! | canceled | "Drag cancelled" (normal) |
//! | no-op | nothing |

use reorder_core::{ReorderEffect, ReorderSnapshot, ReorderTransition, TargetSide};
use reorder_i18n::ReorderTexts;

// ---------------------------------------------------------------------------
// Announcement
// ---------------------------------------------------------------------------

/// Priority level for announcements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum AnnouncementPriority {
    /// May be dropped when the queue is full.
    Low,
    #[default]
    Normal,
    /// Interrupts the current announcement.
    High,
}

/// Screen reader announcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub text: String,
    pub priority: AnnouncementPriority,
}

impl Announcement {
    /// Create a normal priority announcement.
    #[must_use]
    pub fn normal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            priority: AnnouncementPriority::Normal,
        }
    }

    /// Create a high priority announcement.
    #[must_use]
    pub fn high(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            priority: AnnouncementPriority::High,
        }
    }
}

/// Bounded announcement queue.
///
/// When full, the lowest-priority (then oldest) entry is evicted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncementQueue {
    pending: Vec<Announcement>,
    capacity: usize,
}

impl Default for AnnouncementQueue {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

impl AnnouncementQueue {
    pub const DEFAULT_CAPACITY: usize = 5;

    /// Create a queue holding at most `capacity` announcements (minimum 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pending: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, announcement: Announcement) {
        if self.pending.len() >= self.capacity {
            // min_by_key keeps the first minimum, i.e. the oldest.
            if let Some(pos) = self
                .pending
                .iter()
                .enumerate()
                .min_by_key(|(_, a)| a.priority)
                .map(|(i, _)| i)
            {
                self.pending.remove(pos);
            }
        }
        self.pending.push(announcement);
    }

    /// Take all pending announcements, oldest first.
    pub fn drain(&mut self) -> Vec<Announcement> {
        std::mem::take(&mut self.pending)
    }

    /// Peek at pending announcements without clearing.
    #[must_use]
    pub fn pending(&self) -> &[Announcement] {
        &self.pending
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Row text
// ---------------------------------------------------------------------------

/// Accessible label of row `index` (0-based) in a list of `total` items.
#[must_use]
pub fn row_label(texts: &ReorderTexts, index: usize, total: usize) -> String {
    texts.item_position(index + 1, total)
}

/// Instruction text describing row `index`.
#[must_use]
pub fn row_status<'a>(texts: &'a ReorderTexts, snapshot: &ReorderSnapshot, index: usize) -> &'a str {
    if snapshot.is_dragging(index) {
        &texts.item_being_dragged
    } else if snapshot.is_over(index) {
        &texts.drop_position_available
    } else {
        &texts.press_to_start_dragging
    }
}

/// Live status while a drag has a target, with 1-based indices.
#[must_use]
pub fn drag_status(texts: &ReorderTexts, snapshot: &ReorderSnapshot) -> Option<String> {
    let dragged = snapshot.dragged_index?;
    let over = snapshot.drag_over?;
    Some(texts.dragging_status(
        dragged + 1,
        over.side == TargetSide::Before,
        over.hovered_index + 1,
    ))
}

/// Announcement for one session transition. No-ops and cleared hovers
/// announce nothing.
#[must_use]
pub fn transition_announcement(
    texts: &ReorderTexts,
    transition: &ReorderTransition,
    snapshot: &ReorderSnapshot,
) -> Option<Announcement> {
    match &transition.effect {
        ReorderEffect::DragStarted { .. } => {
            Some(Announcement::high(texts.item_being_dragged.clone()))
        }
        ReorderEffect::HoverChanged { .. } => drag_status(texts, snapshot).map(Announcement::normal),
        ReorderEffect::Committed(event) => Some(Announcement::high(
            texts.dropped(event.source_index + 1, event.new_position() + 1),
        )),
        ReorderEffect::Canceled { .. } => Some(Announcement::normal(texts.drag_cancelled.clone())),
        ReorderEffect::HoverCleared { .. } | ReorderEffect::Noop { .. } => None,
    }
}
