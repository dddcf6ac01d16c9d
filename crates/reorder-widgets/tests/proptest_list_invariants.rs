//! Property-based invariant tests for the host list.
//!
//! 1. Items are always a permutation of the originals
//! 2. `on_reorder` fires exactly once per committed transition
//! 3. Applying every reported order to a copy reproduces the list's items
//! 4. Row states exist exactly for `0..len`
//! 5. Releasing the pointer on the dragged row never commits

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;
use reorder_core::{ReorderEffect, apply_permutation};
use reorder_widgets::{
    Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind, ReorderList, RowGeometry,
    hit_row,
};

fn event_strategy() -> impl Strategy<Value = Event> {
    let key = prop_oneof![
        Just(KeyCode::Char(' ')),
        Just(KeyCode::Enter),
        Just(KeyCode::Escape),
        Just(KeyCode::Up),
        Just(KeyCode::Down),
    ];
    let mouse = prop_oneof![
        Just(MouseEventKind::Down(MouseButton::Left)),
        Just(MouseEventKind::Drag(MouseButton::Left)),
        Just(MouseEventKind::Up(MouseButton::Left)),
        Just(MouseEventKind::Exited),
    ];
    prop_oneof![
        4 => (key, 0usize..12).prop_map(|(code, focused_index)| Event::Key {
            event: KeyEvent::new(code),
            focused_index,
        }),
        3 => (mouse, 0u16..40).prop_map(|(kind, y)| Event::Mouse(MouseEvent::new(kind, 0, y))),
        1 => any::<bool>().prop_map(Event::Focus),
    ]
}

proptest! {
    #[test]
    fn list_stays_consistent(
        n in 1usize..10,
        events in proptest::collection::vec(event_strategy(), 0..80),
    ) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let mut list = ReorderList::new((0..n).collect::<Vec<_>>())
            .on_reorder(move |event| sink.borrow_mut().push(event.order.clone()));
        let geometry = RowGeometry::new(0, 3);

        let mut commits = 0usize;
        for event in &events {
            let dragged = list.session().state().drag().map(|drag| drag.dragged_index);
            let released_on_source = match event {
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Up(MouseButton::Left) => {
                    dragged.is_some() && hit_row(mouse.y, &geometry, n).map(|hit| hit.index) == dragged
                }
                _ => false,
            };
            if let Ok(Some(transition)) = list.handle_event(event, &geometry) {
                if matches!(transition.effect, ReorderEffect::Committed(_)) {
                    prop_assert!(!released_on_source, "release on the dragged row committed");
                    commits += 1;
                }
            }

            let mut sorted = list.items().to_vec();
            sorted.sort_unstable();
            prop_assert_eq!(sorted, (0..n).collect::<Vec<_>>());
        }

        prop_assert_eq!(calls.borrow().len(), commits);

        let mut replay: Vec<usize> = (0..n).collect();
        for order in calls.borrow().iter() {
            replay = apply_permutation(replay, order).unwrap();
        }
        prop_assert_eq!(replay.as_slice(), list.items());

        prop_assert!(list.row_state(n - 1).is_some());
        prop_assert!(list.row_state(n).is_none());
    }
}
