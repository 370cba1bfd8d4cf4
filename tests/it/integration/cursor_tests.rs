//! Cursor override during resize and move sessions.

use crate::helpers::{MockHost, TestEngineBuilder};
use area_selector::{CursorStyle, Direction, PointerEvent, PointerTarget};

#[test]
fn test_idle_cursor_is_crosshair() {
    let (engine, _) = TestEngineBuilder::new().build();
    assert_eq!(engine.cursor(), CursorStyle::Crosshair);
    assert_eq!(engine.cursor().as_css(), "crosshair");
}

#[test]
fn test_move_session_grabs() {
    let (mut engine, ids) = TestEngineBuilder::new()
        .with_selection((10.0, 10.0), (110.0, 110.0))
        .build();

    engine.handle_mouse_down(
        PointerEvent::new(60.0, 60.0, PointerTarget::DragRegion { id: ids[0] }),
        &MockHost::default(),
    );
    assert_eq!(engine.cursor(), CursorStyle::Grabbing);
    assert_eq!(engine.status().active_cursor, Some(CursorStyle::Grabbing));

    engine.handle_mouse_up();
    assert_eq!(engine.cursor(), CursorStyle::Crosshair);
    assert_eq!(engine.status().active_cursor, None);
}

#[test]
fn test_creation_keeps_crosshair() {
    let (mut engine, _) = TestEngineBuilder::new().build();
    engine.handle_mouse_down(PointerEvent::on_canvas(10.0, 10.0), &MockHost::default());
    assert_eq!(engine.cursor(), CursorStyle::Crosshair);
}

#[test]
fn test_resize_cursor_matches_handle() {
    let (mut engine, ids) = TestEngineBuilder::new()
        // Drawn top-right to bottom-left
        .with_selection((110.0, 10.0), (10.0, 110.0))
        .build();
    let host = MockHost::default();

    let cursors = engine.handle_cursors(ids[0]).unwrap();
    let top_left = cursors.iter().find(|(d, _)| *d == Direction::TopLeft).unwrap().1;
    assert_eq!(top_left, CursorStyle::NeswResize);

    engine.handle_mouse_down(
        PointerEvent::new(110.0, 10.0, PointerTarget::Handle { id: ids[0], direction: Direction::TopLeft }),
        &host,
    );
    assert_eq!(engine.cursor(), CursorStyle::NeswResize);
    engine.handle_mouse_up();

    engine.handle_mouse_down(
        PointerEvent::new(60.0, 10.0, PointerTarget::Handle { id: ids[0], direction: Direction::Top }),
        &host,
    );
    assert_eq!(engine.cursor(), CursorStyle::RowResize);
}

#[test]
fn test_corner_cursor_follows_flip() {
    let (mut engine, ids) = TestEngineBuilder::new()
        .with_canvas(400.0, 300.0)
        .with_selection((100.0, 100.0), (200.0, 200.0))
        .build();
    let id = ids[0];
    let bottom_right = PointerTarget::Handle { id, direction: Direction::BottomRight };

    engine.handle_mouse_down(PointerEvent::new(200.0, 200.0, bottom_right), &MockHost::default());
    assert_eq!(engine.cursor(), CursorStyle::NwseResize);

    // Drag the bottom-right corner left of the box: x flips, y does not
    engine.handle_mouse_move(PointerEvent::new(50.0, 150.0, bottom_right));
    assert!(!engine.selections()[0].is_normal_orientation());
    assert_eq!(engine.cursor(), CursorStyle::NeswResize);

    // Hovering the canvas leaves the cursor alone
    engine.handle_mouse_move(PointerEvent::on_canvas(60.0, 150.0));
    assert_eq!(engine.cursor(), CursorStyle::NeswResize);

    engine.handle_mouse_up();
    assert_eq!(engine.cursor(), CursorStyle::Crosshair);
}

#[test]
fn test_other_selection_corner_does_not_switch_cursor() {
    let (mut engine, ids) = TestEngineBuilder::new()
        .with_canvas(400.0, 300.0)
        .with_selection((100.0, 100.0), (200.0, 200.0))
        .with_selection((300.0, 100.0), (250.0, 150.0))
        .build();

    engine.handle_mouse_down(
        PointerEvent::new(200.0, 200.0, PointerTarget::Handle { id: ids[0], direction: Direction::BottomRight }),
        &MockHost::default(),
    );
    engine.handle_mouse_move(PointerEvent::new(
        300.0,
        100.0,
        PointerTarget::Handle { id: ids[1], direction: Direction::TopLeft },
    ));
    assert_eq!(engine.cursor(), CursorStyle::NwseResize);
}

#[test]
fn snapshot_resize_session_status() {
    let (mut engine, ids) = TestEngineBuilder::new()
        .with_selection((10.0, 10.0), (110.0, 110.0))
        .build();

    engine.handle_mouse_down(
        PointerEvent::new(110.0, 110.0, PointerTarget::Handle { id: ids[0], direction: Direction::BottomRight }),
        &MockHost::default(),
    );
    engine.handle_mouse_move(PointerEvent::on_canvas(150.0, 130.0));

    let status = engine.status();
    assert_eq!(status.active_selection_id, Some(ids[0]));
    insta::assert_json_snapshot!("resize_session_status", status, {
        ".active_selection_id" => "[id]"
    });
}
