#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use reorder_core::{
    MoveDirection, ReorderEffect, ReorderInput, ReorderSession, ReorderState, TargetSide,
};

#[derive(Debug, Arbitrary)]
enum Op {
    Begin(u8),
    Hover(u8, bool),
    ClearHover,
    Confirm,
    Cancel,
    Up,
    Down,
    Resize(u8),
}

#[derive(Debug, Arbitrary)]
struct Input {
    item_count: u8,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let mut len = usize::from(input.item_count % 64);
    let mut session = ReorderSession::with_item_count(len);

    for op in input.ops {
        let reorder_input = match op {
            Op::Begin(index) => ReorderInput::BeginDrag {
                index: usize::from(index),
            },
            Op::Hover(index, before) => ReorderInput::HoverOver {
                index: usize::from(index),
                side: if before {
                    TargetSide::Before
                } else {
                    TargetSide::After
                },
            },
            Op::ClearHover => ReorderInput::ClearHover,
            Op::Confirm => ReorderInput::ConfirmDrop,
            Op::Cancel => ReorderInput::CancelDrag,
            Op::Up => ReorderInput::MoveDirectional(MoveDirection::Up),
            Op::Down => ReorderInput::MoveDirectional(MoveDirection::Down),
            Op::Resize(count) => {
                len = usize::from(count % 64);
                let _ = session.set_item_count(len);
                assert_eq!(session.state(), ReorderState::Idle);
                continue;
            }
        };

        let before = session.clone();
        match session.apply(reorder_input) {
            Ok(transition) => {
                assert_eq!(transition.to, session.state());
                if let ReorderEffect::Committed(event) = &transition.effect {
                    let mut sorted = event.order.clone();
                    sorted.sort_unstable();
                    assert!(sorted.iter().copied().eq(0..len), "commit is not a permutation");
                    assert_eq!(session.state(), ReorderState::Idle);
                }
            }
            Err(_) => assert_eq!(session, before, "rejected input mutated the session"),
        }

        // Invariants that must always hold:
        let snapshot = session.snapshot().expect("session stays attached");
        assert_eq!(snapshot.item_count, len);
        if let Some(over) = snapshot.drag_over {
            assert!(over.hovered_index < len, "hover target OOB");
            assert!(snapshot.dragged_index.is_some(), "hover without drag");
        }
        if let Some(dragged) = snapshot.dragged_index {
            assert!(dragged < len, "dragged index OOB");
        }
    }
});
