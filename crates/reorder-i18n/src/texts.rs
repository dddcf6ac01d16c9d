#![forbid(unsafe_code)]

//! Screen-reader text catalog for reorderable lists.
//!
//! Every string a reorderable list speaks lives in [`ReorderTexts`]. Hosts
//! override the strings they care about; everything else keeps its English
//! default.
//!
//! # Loading
//!
//! ```toml
//! # reorder-texts.toml
//! item_being_dragged = "Élément en cours de déplacement"
//! item_position_template = "Élément déplaçable {index} sur {total}"
//! ```
//!
//! ```rust,ignore
//! let texts = ReorderTexts::from_toml_file("reorder-texts.toml")?.validated()?;
//! ```
//!
//! # Placeholders
//!
//! | template | placeholders |
//! |---|---|
//! | `item_position_template` | `{index}`, `{total}` |
//! | `dragging_status_template` | `{draggedIndex}`, `{direction}`, `{dragOverIndex}` |
//! | `dropped_template` | `{draggedIndex}`, `{position}` |
//!
//! Indices passed to the formatting helpers are 1-based.

#[cfg(feature = "texts-config")]
use std::path::Path;

#[cfg(feature = "texts-config")]
use serde::{Deserialize, Serialize};

use crate::interpolate::interpolate;

/// Localizable strings spoken by a reorderable list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "texts-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "texts-config", serde(default))]
pub struct ReorderTexts {
    /// Status of the row being dragged.
    pub item_being_dragged: String,
    /// Status of the row under the drag.
    pub drop_position_available: String,
    /// Status of every other row.
    pub press_to_start_dragging: String,
    /// Row label.
    pub item_position_template: String,
    /// Live status while a drop target is selected.
    pub dragging_status_template: String,
    /// Accessible role description of a row.
    pub role_description: String,
    /// Announced after a successful drop.
    pub dropped_template: String,
    /// Announced when a drag ends without a reorder.
    pub drag_cancelled: String,
    pub before_word: String,
    pub after_word: String,
}

impl Default for ReorderTexts {
    fn default() -> Self {
        Self {
            item_being_dragged: "Item is being dragged".into(),
            drop_position_available: "Drop position available".into(),
            press_to_start_dragging: "Press space bar to start dragging".into(),
            item_position_template: "Draggable item {index} of {total}".into(),
            dragging_status_template:
                "Item {draggedIndex} being dragged {direction} item {dragOverIndex}".into(),
            role_description: "draggable item".into(),
            dropped_template: "Item {draggedIndex} dropped at position {position}".into(),
            drag_cancelled: "Drag cancelled".into(),
            before_word: "before".into(),
            after_word: "after".into(),
        }
    }
}

impl ReorderTexts {
    /// Row label, e.g. "Draggable item 2 of 5".
    #[must_use]
    pub fn item_position(&self, index: usize, total: usize) -> String {
        let index = index.to_string();
        let total = total.to_string();
        interpolate(
            &self.item_position_template,
            &[("index", &index), ("total", &total)],
        )
    }

    /// Live status, e.g. "Item 1 being dragged after item 3".
    #[must_use]
    pub fn dragging_status(&self, dragged: usize, before: bool, over: usize) -> String {
        let dragged = dragged.to_string();
        let over = over.to_string();
        interpolate(
            &self.dragging_status_template,
            &[
                ("draggedIndex", &dragged),
                ("direction", self.direction_word(before)),
                ("dragOverIndex", &over),
            ],
        )
    }

    /// Drop announcement, e.g. "Item 1 dropped at position 3".
    #[must_use]
    pub fn dropped(&self, dragged: usize, position: usize) -> String {
        let dragged = dragged.to_string();
        let position = position.to_string();
        interpolate(
            &self.dropped_template,
            &[("draggedIndex", &dragged), ("position", &position)],
        )
    }

    /// "before" or "after".
    #[must_use]
    pub fn direction_word(&self, before: bool) -> &str {
        if before {
            &self.before_word
        } else {
            &self.after_word
        }
    }

    /// Load from a TOML string. Missing keys keep their defaults.
    #[cfg(feature = "texts-config")]
    pub fn from_toml_str(s: &str) -> Result<Self, TextsConfigError> {
        toml::from_str(s).map_err(TextsConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "texts-config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, TextsConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(TextsConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string. Missing keys keep their defaults.
    #[cfg(feature = "texts-config")]
    pub fn from_json_str(s: &str) -> Result<Self, TextsConfigError> {
        serde_json::from_str(s).map_err(TextsConfigError::Json)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "texts-config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TextsConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(TextsConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Serialize to TOML.
    #[cfg(feature = "texts-config")]
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Check every string.
    ///
    /// Returns a list of validation errors. An empty list means the texts
    /// are usable.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (name, value) in [
            ("item_being_dragged", &self.item_being_dragged),
            ("drop_position_available", &self.drop_position_available),
            ("press_to_start_dragging", &self.press_to_start_dragging),
            ("item_position_template", &self.item_position_template),
            ("dragging_status_template", &self.dragging_status_template),
            ("role_description", &self.role_description),
            ("dropped_template", &self.dropped_template),
            ("drag_cancelled", &self.drag_cancelled),
            ("before_word", &self.before_word),
            ("after_word", &self.after_word),
        ] {
            if value.trim().is_empty() {
                errors.push(format!("{name} must not be empty"));
            }
        }

        if !self.item_position_template.contains("{index}") {
            errors.push("item_position_template must contain {index}".into());
        }
        if !self.dropped_template.contains("{position}") {
            errors.push("dropped_template must contain {position}".into());
        }

        errors
    }

    /// Return `self` if [`Self::validate`] reports nothing.
    pub fn validated(self) -> Result<Self, TextsConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(TextsConfigError::Validation(errors))
        }
    }
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors from loading or validating [`ReorderTexts`].
#[derive(Debug)]
pub enum TextsConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "texts-config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "texts-config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for TextsConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "texts-config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "texts-config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for TextsConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "texts-config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "texts-config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(ReorderTexts::default().validate().is_empty());
    }

    #[test]
    fn default_label_and_status() {
        let texts = ReorderTexts::default();
        assert_eq!(texts.item_position(1, 3), "Draggable item 1 of 3");
        assert_eq!(
            texts.dragging_status(1, false, 3),
            "Item 1 being dragged after item 3"
        );
        assert_eq!(
            texts.dragging_status(3, true, 1),
            "Item 3 being dragged before item 1"
        );
        assert_eq!(texts.dropped(2, 1), "Item 2 dropped at position 1");
    }

    #[test]
    fn validate_catches_empty_string() {
        let texts = ReorderTexts {
            drag_cancelled: "  ".into(),
            ..ReorderTexts::default()
        };
        let errors = texts.validate();
        assert!(errors.iter().any(|e| e.contains("drag_cancelled")));
    }

    #[test]
    fn validate_catches_missing_index_placeholder() {
        let texts = ReorderTexts {
            item_position_template: "Item of {total}".into(),
            ..ReorderTexts::default()
        };
        assert!(
            texts
                .validate()
                .iter()
                .any(|e| e.contains("item_position_template"))
        );
        assert!(matches!(
            texts.validated(),
            Err(TextsConfigError::Validation(_))
        ));
    }

    #[test]
    fn validation_error_display_joins_messages() {
        let err = TextsConfigError::Validation(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "validation errors: a; b");
    }

    #[cfg(feature = "texts-config")]
    #[test]
    fn partial_toml_keeps_defaults() {
        let texts = ReorderTexts::from_toml_str(
            r#"
            item_being_dragged = "Moving"
            before_word = "above"
            "#,
        )
        .expect("valid toml");
        assert_eq!(texts.item_being_dragged, "Moving");
        assert_eq!(texts.before_word, "above");
        assert_eq!(texts.after_word, "after");
        assert_eq!(texts.item_position(2, 2), "Draggable item 2 of 2");
    }

    #[cfg(feature = "texts-config")]
    #[test]
    fn partial_json_keeps_defaults() {
        let texts = ReorderTexts::from_json_str(r#"{"role_description": "sortable row"}"#)
            .expect("valid json");
        assert_eq!(texts.role_description, "sortable row");
        assert_eq!(texts.drag_cancelled, "Drag cancelled");
    }

    #[cfg(feature = "texts-config")]
    #[test]
    fn empty_sources_yield_defaults() {
        assert_eq!(
            ReorderTexts::from_toml_str("").expect("empty toml"),
            ReorderTexts::default()
        );
        assert_eq!(
            ReorderTexts::from_json_str("{}").expect("empty json"),
            ReorderTexts::default()
        );
    }

    #[cfg(feature = "texts-config")]
    #[test]
    fn bad_input_maps_to_error_variant() {
        assert!(matches!(
            ReorderTexts::from_toml_str("item_being_dragged = ["),
            Err(TextsConfigError::Toml(_))
        ));
        assert!(matches!(
            ReorderTexts::from_json_str("{"),
            Err(TextsConfigError::Json(_))
        ));
        assert!(matches!(
            ReorderTexts::from_toml_file("/nonexistent/reorder-texts.toml"),
            Err(TextsConfigError::Io(_))
        ));
    }

    #[cfg(feature = "texts-config")]
    #[test]
    fn toml_round_trip_preserves_overrides() {
        let texts = ReorderTexts {
            drag_cancelled: "Abgebrochen".into(),
            ..ReorderTexts::default()
        };
        let toml = texts.to_toml_string().expect("serializable");
        assert_eq!(ReorderTexts::from_toml_str(&toml).expect("parse"), texts);
    }
}
