#![forbid(unsafe_code)]

//! Errors surfaced by the reorder engine.
//!
//! Redundant input (hovering the same slot twice, pressing an arrow at a
//! list boundary, dropping where nothing moves) is never an error; those
//! are reported as no-op effects by [`crate::session::ReorderSession`].

use std::fmt;

/// Contract violations detected by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderError {
    /// An operation was invoked on a session that has no order table yet.
    NotInitialized { operation: &'static str },
    /// An index outside `0..len` was passed to a drag or hover operation.
    IndexOutOfRange { index: usize, len: usize },
    /// An item slice and an order table disagree on length.
    LengthMismatch { items: usize, entries: usize },
    /// A set of original indices is not a permutation of `0..len`.
    InvalidPermutation { len: usize },
}

impl fmt::Display for ReorderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized { operation } => {
                write!(f, "{operation} called before the session was attached to a list")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for list of {len} items")
            }
            Self::LengthMismatch { items, entries } => {
                write!(f, "{items} items cannot be reordered by {entries} order entries")
            }
            Self::InvalidPermutation { len } => {
                write!(f, "original indices are not a permutation of 0..{len}")
            }
        }
    }
}

impl std::error::Error for ReorderError {}
