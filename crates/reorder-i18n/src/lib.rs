#![forbid(unsafe_code)]

//! Localizable text for reorderable lists.
//!
//! Provides the [`ReorderTexts`] catalog of screen-reader strings and the
//! `{name}` [`interpolate`] helper used to fill its templates.
//!
//! # How it fits in the system
//! `reorder-widgets` formats row labels and announcements through this
//! crate. It has no dependency on the ordering engine, so hosts can load and
//! validate texts before any list exists.

pub mod interpolate;
pub mod texts;

pub use interpolate::interpolate;
pub use texts::{ReorderTexts, TextsConfigError};
