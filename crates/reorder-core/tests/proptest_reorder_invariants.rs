//! Property-based invariant tests for the ordering engine.
//!
//! 1. Initial tables use keys 1, 3, 5, ... in index order
//! 2. A commit lands the dragged item next to the hovered one on the requested side
//! 3. A commit preserves the relative order of every other item
//! 4. The first hover of a drag is always accepted
//! 5. Keyboard moves return None exactly at the list boundaries
//! 6. Only the hovered row reports an insert side
//! 7. Cancelling twice equals cancelling once
//! 8. Random session input never panics and commits are real permutations

use proptest::prelude::*;
use reorder_core::{
    InsertSide, MoveDirection, OrderEntry, ReorderEffect, ReorderInput, ReorderSession,
    ReorderState, TargetSide, commit_reorder, compute_drag_over, compute_keyboard_move,
    create_initial_orders, resolve_insert_side, should_accept_drag_over,
};

// ── Helpers ──────────────────────────────────────────────────────────

fn side_strategy() -> impl Strategy<Value = TargetSide> {
    prop_oneof![Just(TargetSide::Before), Just(TargetSide::After)]
}

fn direction_strategy() -> impl Strategy<Value = MoveDirection> {
    prop_oneof![Just(MoveDirection::Up), Just(MoveDirection::Down)]
}

/// (item count, dragged index, hovered index != dragged)
fn drag_pair() -> impl Strategy<Value = (usize, usize, usize)> {
    (2usize..40).prop_flat_map(|n| {
        (Just(n), 0..n, 0..n - 1).prop_map(|(n, dragged, raw)| {
            let hovered = if raw >= dragged { raw + 1 } else { raw };
            (n, dragged, hovered)
        })
    })
}

fn input_strategy(max_index: usize) -> impl Strategy<Value = ReorderInput> {
    prop_oneof![
        (0..=max_index).prop_map(|index| ReorderInput::BeginDrag { index }),
        ((0..=max_index), side_strategy())
            .prop_map(|(index, side)| ReorderInput::HoverOver { index, side }),
        Just(ReorderInput::ClearHover),
        Just(ReorderInput::ConfirmDrop),
        Just(ReorderInput::CancelDrag),
        direction_strategy().prop_map(ReorderInput::MoveDirectional),
    ]
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Initial keys
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn initial_keys_are_odd_and_ascending(n in 0usize..500) {
        let table = create_initial_orders(n);
        prop_assert_eq!(table.len(), n);
        for (index, entry) in table.entries().iter().enumerate() {
            prop_assert_eq!(*entry, OrderEntry::new(index, index as i64 * 2 + 1));
        }
        prop_assert!(table.is_identity());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2–3. Commit adjacency and stability
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn commit_places_dragged_next_to_hovered(
        (n, dragged, hovered) in drag_pair(),
        side in side_strategy(),
    ) {
        let table = create_initial_orders(n);
        let over = compute_drag_over(hovered, &table, side);
        let order = commit_reorder(&table, dragged, over.candidate_order_key).permutation();

        let pos_dragged = order.iter().position(|&i| i == dragged).unwrap();
        let pos_hovered = order.iter().position(|&i| i == hovered).unwrap();
        match side {
            TargetSide::Before => prop_assert_eq!(pos_dragged + 1, pos_hovered),
            TargetSide::After => prop_assert_eq!(pos_hovered + 1, pos_dragged),
        }
    }

    #[test]
    fn commit_preserves_relative_order_of_others(
        (n, dragged, hovered) in drag_pair(),
        side in side_strategy(),
    ) {
        let table = create_initial_orders(n);
        let over = compute_drag_over(hovered, &table, side);
        let order = commit_reorder(&table, dragged, over.candidate_order_key).permutation();

        let others: Vec<usize> = order.into_iter().filter(|&i| i != dragged).collect();
        prop_assert_eq!(others.len(), n - 1);
        prop_assert!(others.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. First hover accepted
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn first_hover_always_accepted(
        n in 1usize..50,
        hovered_seed in any::<usize>(),
        side in side_strategy(),
    ) {
        let table = create_initial_orders(n);
        let candidate = compute_drag_over(hovered_seed % n, &table, side);
        prop_assert!(should_accept_drag_over(&candidate, None, None));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Keyboard boundaries
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn keyboard_move_none_only_at_boundaries(
        n in 1usize..50,
        current_seed in any::<usize>(),
        direction in direction_strategy(),
    ) {
        let table = create_initial_orders(n);
        let current = current_seed % n;
        let max_index = n - 1;
        let at_boundary = match direction {
            MoveDirection::Up => current == 0,
            MoveDirection::Down => current == max_index,
        };
        let result = compute_keyboard_move(direction, current, &table, max_index);
        prop_assert_eq!(result.is_none(), at_boundary);
        if let Some(over) = result {
            prop_assert_eq!(over.side, direction.side());
            prop_assert_eq!(over.hovered_index.abs_diff(current), 1);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Insert side only on the hovered row
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn insert_side_only_on_hovered_row(
        n in 1usize..50,
        hovered_seed in any::<usize>(),
        side in side_strategy(),
    ) {
        let table = create_initial_orders(n);
        let hovered = hovered_seed % n;
        let over = compute_drag_over(hovered, &table, side);
        for index in 0..n {
            let resolved = resolve_insert_side(index, Some(&over), &table);
            if index == hovered {
                prop_assert_eq!(resolved, side.insert_side());
            } else {
                prop_assert_eq!(resolved, InsertSide::CannotInsertHere);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7–8. Session behavior under arbitrary input
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn cancel_twice_equals_once(
        n in 1usize..20,
        inputs in proptest::collection::vec(input_strategy(19), 0..30),
    ) {
        let mut session = ReorderSession::with_item_count(n);
        for input in inputs {
            let _ = session.apply(input);
        }
        session.cancel_drag().unwrap();
        let once = session.clone();
        session.cancel_drag().unwrap();
        prop_assert_eq!(session.state(), once.state());
        prop_assert_eq!(session.order_table(), once.order_table());
        prop_assert_eq!(session.state(), ReorderState::Idle);
    }

    #[test]
    fn random_input_yields_valid_commits(
        n in 1usize..20,
        inputs in proptest::collection::vec(input_strategy(24), 0..60),
    ) {
        let mut session = ReorderSession::with_item_count(n);
        for input in inputs {
            let before = session.clone();
            match session.apply(input) {
                Ok(transition) => {
                    prop_assert_eq!(transition.to, session.state());
                    if let ReorderEffect::Committed(event) = &transition.effect {
                        let mut sorted = event.order.clone();
                        sorted.sort_unstable();
                        prop_assert_eq!(sorted, (0..n).collect::<Vec<_>>());
                        prop_assert_ne!(event.source_index, event.target_index);
                        prop_assert_eq!(session.state(), ReorderState::Idle);
                    }
                }
                Err(_) => prop_assert_eq!(&session, &before),
            }
            if let Some(over) = session.state().drag_over() {
                prop_assert!(over.hovered_index < n);
            }
        }
    }
}
