#![forbid(unsafe_code)]

//! Order table: a stable mapping from list position to a sortable key.
//!
//! # Design
//!
//! Keys start out as odd integers (`index * 2 + 1`), so the even integers
//! directly below and above every entry are always free. Inserting "before"
//! or "after" an entry assigns `key - 1` or `key + 1` to the moved entry and
//! never requires renumbering the rest of the table.
//!
//! ## Invariants
//! 1. `original_index` values form a permutation of `0..len`.
//! 2. Order keys are pairwise distinct outside of a commit in progress.
//!
//! ## Failure Modes
//! - Equal keys after a commit are an internal invariant violation. Sorting is
//!   stable, so colliding entries keep their relative original order.

use crate::error::ReorderError;

/// Sortable order value. Only its relative ordering matters.
pub type OrderKey = i64;

/// Order bookkeeping for one list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderEntry {
    /// Position of the item in the caller's collection when the table was built.
    pub original_index: usize,
    /// Sort key.
    pub order_key: OrderKey,
}

impl OrderEntry {
    /// Create an entry.
    #[must_use]
    pub const fn new(original_index: usize, order_key: OrderKey) -> Self {
        Self {
            original_index,
            order_key,
        }
    }

    /// Key assigned to `index` in a freshly built table.
    #[must_use]
    pub const fn initial_key(index: usize) -> OrderKey {
        index as OrderKey * 2 + 1
    }
}

/// Ordered sequence of [`OrderEntry`], one per list item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderTable {
    entries: Vec<OrderEntry>,
}

impl OrderTable {
    /// Build the initial table for `item_count` items: keys `1, 3, 5, ...`.
    #[must_use]
    pub fn initial(item_count: usize) -> Self {
        Self {
            entries: (0..item_count)
                .map(|index| OrderEntry::new(index, OrderEntry::initial_key(index)))
                .collect(),
        }
    }

    /// Build a table from explicit entries.
    ///
    /// The original indices must be a permutation of `0..entries.len()`.
    pub fn from_entries(entries: Vec<OrderEntry>) -> Result<Self, ReorderError> {
        let len = entries.len();
        let mut seen = vec![false; len];
        for entry in &entries {
            match seen.get_mut(entry.original_index) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(ReorderError::InvalidPermutation { len }),
            }
        }
        Ok(Self { entries })
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in table order.
    #[must_use]
    pub fn entries(&self) -> &[OrderEntry] {
        &self.entries
    }

    /// Entry at table position `position`.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&OrderEntry> {
        self.entries.get(position)
    }

    /// Order key at table position `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of range.
    #[must_use]
    pub fn key_at(&self, position: usize) -> OrderKey {
        self.entries[position].order_key
    }

    /// Entry whose `original_index` equals `original_index`.
    #[must_use]
    pub fn find_original(&self, original_index: usize) -> Option<&OrderEntry> {
        self.entries
            .iter()
            .find(|entry| entry.original_index == original_index)
    }

    pub(crate) fn find_original_mut(&mut self, original_index: usize) -> Option<&mut OrderEntry> {
        self.entries
            .iter_mut()
            .find(|entry| entry.original_index == original_index)
    }

    /// Stable-sort entries ascending by key.
    pub fn sort_by_key(&mut self) {
        self.entries.sort_by_key(|entry| entry.order_key);
    }

    /// Copy of this table sorted ascending by key.
    #[must_use]
    pub fn sorted(&self) -> Self {
        let mut copy = self.clone();
        copy.sort_by_key();
        copy
    }

    /// Whether any two entries share a key.
    #[must_use]
    pub fn has_key_collision(&self) -> bool {
        let sorted = self.sorted();
        sorted
            .entries
            .windows(2)
            .any(|pair| pair[0].order_key == pair[1].order_key)
    }

    /// Original indices in ascending key order.
    ///
    /// Position `i` of the result names the original item that belongs at
    /// position `i` of the reordered list.
    #[must_use]
    pub fn permutation(&self) -> Vec<usize> {
        self.sorted()
            .entries
            .iter()
            .map(|entry| entry.original_index)
            .collect()
    }

    /// Whether the table, once sorted, leaves every item where it started.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.permutation()
            .iter()
            .enumerate()
            .all(|(position, &original)| position == original)
    }
}

/// Build the initial order table for `item_count` items.
#[must_use]
pub fn create_initial_orders(item_count: usize) -> OrderTable {
    OrderTable::initial(item_count)
}

/// Produce the caller's items in the order described by `table`.
///
/// The table is sorted by key first; position `i` of the result holds
/// `items[sorted[i].original_index]`.
pub fn reorder_items<T: Clone>(items: &[T], table: &OrderTable) -> Result<Vec<T>, ReorderError> {
    if items.len() != table.len() {
        return Err(ReorderError::LengthMismatch {
            items: items.len(),
            entries: table.len(),
        });
    }
    Ok(table
        .permutation()
        .into_iter()
        .map(|original| items[original].clone())
        .collect())
}

/// Move owned items into the order named by `order`.
///
/// `order[i]` is the original index of the item that ends up at position `i`.
pub fn apply_permutation<T>(mut items: Vec<T>, order: &[usize]) -> Result<Vec<T>, ReorderError> {
    permute_in_place(&mut items, order)?;
    Ok(items)
}

/// Reorder `items` in place; see [`apply_permutation`].
///
/// `order` is validated before anything moves, so `items` is untouched on
/// error.
pub fn permute_in_place<T>(items: &mut Vec<T>, order: &[usize]) -> Result<(), ReorderError> {
    if items.len() != order.len() {
        return Err(ReorderError::LengthMismatch {
            items: items.len(),
            entries: order.len(),
        });
    }
    let len = items.len();
    let mut seen = vec![false; len];
    for &original in order {
        match seen.get_mut(original) {
            Some(slot) if !*slot => *slot = true,
            _ => return Err(ReorderError::InvalidPermutation { len }),
        }
    }
    let mut slots: Vec<Option<T>> = items.drain(..).map(Some).collect();
    items.extend(order.iter().filter_map(|&original| slots[original].take()));
    Ok(())
}
