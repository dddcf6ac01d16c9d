#![forbid(unsafe_code)]

//! Commit a drop into the order table.

use crate::order::{OrderKey, OrderTable};

/// Assign `new_key` to the entry for `dragged_index` and re-sort.
///
/// Returns a new table; `table` is left untouched. If no entry has
/// `original_index == dragged_index` the copy is returned sorted and
/// otherwise unchanged.
#[must_use]
pub fn commit_reorder(table: &OrderTable, dragged_index: usize, new_key: OrderKey) -> OrderTable {
    let mut next = table.clone();
    match next.find_original_mut(dragged_index) {
        Some(entry) => entry.order_key = new_key,
        None => {
            tracing::warn!(
                message = "reorder.commit_missing_entry",
                dragged_index,
                entries = table.len()
            );
        }
    }
    next.sort_by_key();
    let collided = next
        .entries()
        .windows(2)
        .any(|pair| pair[0].order_key == pair[1].order_key);
    if collided {
        tracing::warn!(
            message = "reorder.order_key_collision",
            dragged_index,
            new_key,
            entries = next.len()
        );
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{OrderEntry, create_initial_orders, reorder_items};

    #[test]
    fn move_last_to_front() {
        let table = create_initial_orders(3);
        let next = commit_reorder(&table, 2, 0);
        assert_eq!(next.entries()[0], OrderEntry::new(2, 0));
        assert_eq!(next.len(), 3);
        assert_eq!(
            reorder_items(&["a", "b", "c"], &next).expect("lengths match"),
            vec!["c", "a", "b"]
        );
    }

    #[test]
    fn move_middle_to_end_keeps_others() {
        let table = create_initial_orders(3);
        let next = commit_reorder(&table, 1, 6);
        assert_eq!(next.permutation(), vec![0, 2, 1]);
    }

    #[test]
    fn input_table_untouched() {
        let table = create_initial_orders(3);
        let _ = commit_reorder(&table, 0, 6);
        assert_eq!(table, create_initial_orders(3));
    }

    #[test]
    fn colliding_key_falls_back_to_stable_order() {
        let table = create_initial_orders(3);
        // Key 5 collides with item 2; item 0 must stay ahead of item 2.
        let next = commit_reorder(&table, 0, 5);
        assert!(next.has_key_collision());
        assert_eq!(next.permutation(), vec![1, 0, 2]);
    }

    #[test]
    fn gap_keys_never_collide() {
        let table = create_initial_orders(4);
        for dragged in 0..4 {
            for key in [0, 2, 4, 6, 8] {
                let next = commit_reorder(&table, dragged, key);
                assert!(!next.has_key_collision(), "dragged {dragged} key {key}");
                assert!(
                    next.entries()
                        .windows(2)
                        .all(|pair| pair[0].order_key < pair[1].order_key)
                );
            }
        }
    }

    #[test]
    fn unknown_dragged_index_only_sorts() {
        let table = create_initial_orders(2);
        let next = commit_reorder(&table, 9, 0);
        assert_eq!(next, table);
    }

    struct WarnCounter(std::sync::Arc<std::sync::atomic::AtomicUsize>);

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for WarnCounter {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            if *event.metadata().level() == tracing::Level::WARN {
                self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            }
        }
    }

    #[test]
    fn collision_warns_once_per_commit() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};
        use tracing_subscriber::layer::SubscriberExt;

        let warnings = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(WarnCounter(Arc::clone(&warnings)));
        let _guard = tracing::subscriber::set_default(subscriber);

        let table = create_initial_orders(3);
        let _ = commit_reorder(&table, 0, 4);
        assert_eq!(warnings.load(Ordering::SeqCst), 0);
        let _ = commit_reorder(&table, 0, 5);
        assert_eq!(warnings.load(Ordering::SeqCst), 1);
    }
}
