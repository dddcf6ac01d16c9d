#![no_main]

use libfuzzer_sys::fuzz_target;
use reorder_core::ReorderEffect;
use reorder_widgets::{
    Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind, ReorderList, RowGeometry,
    hit_row,
};

fn key_code(byte: u8) -> KeyCode {
    match byte % 6 {
        0 => KeyCode::Char(' '),
        1 => KeyCode::Enter,
        2 => KeyCode::Escape,
        3 => KeyCode::Up,
        4 => KeyCode::Down,
        _ => KeyCode::Char('j'),
    }
}

fn mouse_kind(byte: u8) -> MouseEventKind {
    match byte % 5 {
        0 => MouseEventKind::Down(MouseButton::Left),
        1 => MouseEventKind::Drag(MouseButton::Left),
        2 => MouseEventKind::Up(MouseButton::Left),
        3 => MouseEventKind::Moved,
        _ => MouseEventKind::Exited,
    }
}

fuzz_target!(|data: &[u8]| {
    // First two bytes: item count (0..32) and row height (0..4).
    if data.len() < 2 {
        return;
    }
    let count = usize::from(data[0] % 32);
    let geometry = RowGeometry::new(1, u16::from(data[1] % 4));
    let mut list = ReorderList::new((0..count).collect::<Vec<_>>());

    for chunk in data[2..].chunks_exact(3) {
        let event = match chunk[0] % 3 {
            0 => Event::Key {
                event: KeyEvent::new(key_code(chunk[1])),
                focused_index: usize::from(chunk[2]) % count.max(1),
            },
            1 => Event::Mouse(MouseEvent::new(mouse_kind(chunk[1]), 0, u16::from(chunk[2]))),
            _ => Event::Focus(chunk[1] % 2 == 0),
        };
        let dragged = list.session().state().drag().map(|drag| drag.dragged_index);
        let released_on_source = match event {
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Up(MouseButton::Left) => {
                dragged.is_some() && hit_row(mouse.y, &geometry, count).map(|hit| hit.index) == dragged
            }
            _ => false,
        };
        if let Ok(Some(transition)) = list.handle_event(&event, &geometry) {
            if released_on_source {
                assert!(
                    !matches!(transition.effect, ReorderEffect::Committed(_)),
                    "release on the dragged row committed"
                );
            }
        }

        // Items are always a permutation of the originals.
        let mut items = list.items().to_vec();
        items.sort_unstable();
        assert!(items.into_iter().eq(0..count), "items lost or duplicated");
        assert!(list.pending_announcements().len() <= 5);
    }
});
