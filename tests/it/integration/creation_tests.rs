//! Drawing new selections on the empty canvas.

use crate::helpers::{MockHost, TestEngineBuilder, drag};
use area_selector::{PointerEvent, PointerTarget};

#[test]
fn test_backwards_drag_is_normalized() {
    let (mut engine, _) = TestEngineBuilder::new().with_canvas(400.0, 300.0).build();

    drag(&mut engine, (350.0, 50.0), (50.0, 250.0));

    let committed = engine.selections()[0];
    assert_eq!(committed.left(), 50.0);
    assert_eq!(committed.top(), 50.0);
    assert_eq!(committed.width(), 300.0);
    assert_eq!(committed.height(), 200.0);
    // Raw corners keep the draw direction
    assert_eq!((committed.start_x, committed.end_x), (350.0, 50.0));
}

#[test]
fn test_overlapping_draw_is_discarded() {
    let (mut engine, ids) = TestEngineBuilder::new()
        .with_canvas(400.0, 300.0)
        .with_selection((0.0, 0.0), (100.0, 100.0))
        .build();
    let host = MockHost::default();

    engine.handle_mouse_down(PointerEvent::on_canvas(50.0, 50.0), &host);
    // Pointer down inside an existing box does not overlap yet
    assert!(!engine.status().is_overlapping);

    assert_eq!(engine.candidate_color(), Some("blue"));

    engine.handle_mouse_move(PointerEvent::on_canvas(150.0, 150.0));
    assert!(engine.status().is_overlapping);
    assert!(engine.candidate().is_some());
    assert_eq!(engine.candidate_color(), Some("red"));

    engine.handle_mouse_up();
    assert_eq!(engine.selections().len(), 1);
    assert_eq!(engine.selections()[0].id, ids[0]);
    assert!(engine.candidate().is_none());
    assert!(engine.input_state().is_idle());
}

#[test]
fn test_overlap_flag_clears_when_moving_away() {
    let (mut engine, _) = TestEngineBuilder::new()
        .with_canvas(400.0, 300.0)
        .with_selection((100.0, 0.0), (200.0, 100.0))
        .build();
    let host = MockHost::default();

    engine.handle_mouse_down(PointerEvent::on_canvas(10.0, 10.0), &host);
    engine.handle_mouse_move(PointerEvent::on_canvas(150.0, 50.0));
    assert!(engine.status().is_overlapping);

    // Back to touching the left edge of the stored box
    engine.handle_mouse_move(PointerEvent::on_canvas(100.0, 50.0));
    assert!(!engine.status().is_overlapping);

    engine.handle_mouse_up();
    assert_eq!(engine.selections().len(), 2);
}

#[test]
fn test_touching_selection_is_committed() {
    let (mut engine, _) = TestEngineBuilder::new()
        .with_selection((0.0, 0.0), (100.0, 100.0))
        .build();

    drag(&mut engine, (100.0, 0.0), (200.0, 100.0));
    assert_eq!(engine.selections().len(), 2);
}

#[test]
fn test_click_commits_zero_area_selection() {
    let (mut engine, _) = TestEngineBuilder::new().build();
    let host = MockHost::default();

    engine.handle_mouse_down(PointerEvent::on_canvas(20.0, 30.0), &host);
    engine.handle_mouse_up();

    assert_eq!(engine.selections().len(), 1);
    let committed = engine.selections()[0];
    assert_eq!(committed.width(), 0.0);
    assert_eq!(committed.height(), 0.0);
    assert_eq!((committed.start_x, committed.start_y), (20.0, 30.0));
}

#[test]
fn test_end_point_is_clamped_to_canvas() {
    let (mut engine, _) = TestEngineBuilder::new().with_canvas(400.0, 300.0).build();

    drag(&mut engine, (350.0, 50.0), (500.0, -20.0));

    let committed = engine.selections()[0];
    assert_eq!((committed.end_x, committed.end_y), (400.0, 0.0));
}

#[test]
fn test_host_offset_is_subtracted() {
    let (mut engine, _) = TestEngineBuilder::new().build();
    let host = MockHost::at(10.0, 20.0);

    engine.handle_mouse_down(PointerEvent::on_canvas(60.0, 70.0), &host);
    engine.handle_mouse_move(PointerEvent::on_canvas(360.0, 270.0));

    let candidate = *engine.candidate().unwrap();
    assert_eq!((candidate.start_x, candidate.start_y), (50.0, 50.0));
    assert_eq!((candidate.end_x, candidate.end_y), (350.0, 250.0));

    engine.handle_mouse_up();
    assert_eq!(engine.selections()[0], candidate);
}

#[test]
fn test_unmounted_canvas_starts_nothing() {
    let (mut engine, _) = TestEngineBuilder::new().build();

    engine.handle_mouse_down(PointerEvent::on_canvas(20.0, 20.0), &MockHost::unmounted());
    assert!(engine.input_state().is_idle());

    engine.handle_mouse_move(PointerEvent::on_canvas(100.0, 100.0));
    engine.handle_mouse_up();
    assert!(engine.selections().is_empty());
}

#[test]
fn test_pointer_down_on_other_target_is_ignored() {
    let (mut engine, _) = TestEngineBuilder::new().build();

    engine.handle_mouse_down(PointerEvent::new(20.0, 20.0, PointerTarget::Other), &MockHost::default());
    assert!(engine.input_state().is_idle());
}

#[test]
fn test_leave_commits_like_release() {
    let (mut engine, _) = TestEngineBuilder::new().build();
    let host = MockHost::default();

    engine.handle_mouse_down(PointerEvent::on_canvas(10.0, 10.0), &host);
    engine.handle_mouse_move(PointerEvent::on_canvas(90.0, 60.0));
    engine.handle_mouse_leave();

    assert!(engine.input_state().is_idle());
    assert_eq!(engine.selections().len(), 1);
    assert_eq!(engine.selections()[0].width(), 80.0);
}

#[test]
fn test_second_pointer_down_does_not_restart() {
    let (mut engine, _) = TestEngineBuilder::new().build();
    let host = MockHost::default();

    engine.handle_mouse_down(PointerEvent::on_canvas(10.0, 10.0), &host);
    let first = engine.candidate().unwrap().id;

    engine.handle_mouse_down(PointerEvent::on_canvas(200.0, 200.0), &host);
    let candidate = engine.candidate().unwrap();
    assert_eq!(candidate.id, first);
    assert_eq!((candidate.start_x, candidate.start_y), (10.0, 10.0));
}

#[test]
fn test_each_drawn_selection_gets_new_id() {
    let (mut engine, _) = TestEngineBuilder::new().build();

    drag(&mut engine, (0.0, 0.0), (50.0, 50.0));
    drag(&mut engine, (100.0, 100.0), (150.0, 150.0));

    let list = engine.selections();
    assert_eq!(list.len(), 2);
    assert_ne!(list[0].id, list[1].id);
    assert_eq!(engine.selection_index(list[1].id), Some(2));
}
