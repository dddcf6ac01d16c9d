#![forbid(unsafe_code)]

//! Key bindings for keyboard reordering.

use crate::event::{KeyCode, KeyEvent, KeyEventKind};
use reorder_core::MoveDirection;

/// Keys that activate a drag (pick up when idle, drop when dragging).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivateKey {
    Space,
    Enter,
}

impl ActivateKey {
    const fn matches(self, code: KeyCode) -> bool {
        match self {
            Self::Space => matches!(code, KeyCode::Char(' ')),
            Self::Enter => matches!(code, KeyCode::Enter),
        }
    }
}

/// Logical reorder key produced by [`ReorderKeymap::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReorderKey {
    Activate,
    Cancel,
    Navigate(MoveDirection),
}

/// Key bindings for a reorderable list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderKeymap {
    /// Default: Space, Enter.
    pub activate_keys: Vec<ActivateKey>,
    /// Whether Escape cancels the drag.
    pub cancel_on_escape: bool,
    /// Accept `k`/`j` alongside the arrow keys.
    pub vim_navigation: bool,
}

impl Default for ReorderKeymap {
    fn default() -> Self {
        Self {
            activate_keys: vec![ActivateKey::Space, ActivateKey::Enter],
            cancel_on_escape: true,
            vim_navigation: false,
        }
    }
}

impl ReorderKeymap {
    /// Map a key event to a reorder key.
    ///
    /// Releases and Ctrl/Alt/Super chords never map, so host shortcuts keep
    /// working while a row has focus.
    #[must_use]
    pub fn resolve(&self, event: &KeyEvent) -> Option<ReorderKey> {
        if event.kind == KeyEventKind::Release || event.has_command_modifier() {
            return None;
        }
        match event.code {
            KeyCode::Up => Some(ReorderKey::Navigate(MoveDirection::Up)),
            KeyCode::Down => Some(ReorderKey::Navigate(MoveDirection::Down)),
            KeyCode::Char('k') if self.vim_navigation => {
                Some(ReorderKey::Navigate(MoveDirection::Up))
            }
            KeyCode::Char('j') if self.vim_navigation => {
                Some(ReorderKey::Navigate(MoveDirection::Down))
            }
            KeyCode::Escape if self.cancel_on_escape => Some(ReorderKey::Cancel),
            code if self.activate_keys.iter().any(|key| key.matches(code)) => {
                Some(ReorderKey::Activate)
            }
            _ => None,
        }
    }
}
