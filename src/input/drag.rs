//! Pointer move - draw, resize and move ticks.
//!
//! ## Performance Notes
//!
//! Pointer move fires for every mouse sample during a drag. Each tick does a
//! constant amount of work plus one R-tree overlap query; idle ticks return
//! before touching the store.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::cursor::handle_cursor;
use crate::engine::SelectionEngine;
use crate::input::coords::CoordinateConverter;
use crate::input::{InputState, PointerEvent, PointerTarget};
use crate::profile_scope;
use tracing::trace;

impl SelectionEngine {
    pub fn handle_mouse_move(&mut self, event: PointerEvent) {
        profile_scope!("handle_mouse_move");

        match self.input_state {
            InputState::Idle => {}
            InputState::Creating { .. } => self.tick_creating(event),
            InputState::Updating { direction, .. } if direction.is_move() => self.tick_moving(event),
            InputState::Updating { .. } => {
                self.tick_resizing(event);
                self.follow_corner_cursor(event.target);
            }
        }
    }

    fn tick_creating(&mut self, event: PointerEvent) {
        profile_scope!("selection_create");

        let InputState::Creating { origin, candidate, .. } = self.input_state else {
            return;
        };

        let end = CoordinateConverter::client_to_clamped_canvas(event.position, origin, &self.bounds);
        let candidate = candidate.with_end(end.x, end.y);
        let overlapping = self.store.overlaps_any(&candidate);

        self.input_state = InputState::Creating {
            origin,
            candidate,
            overlapping,
        };
    }

    fn tick_resizing(&mut self, event: PointerEvent) {
        profile_scope!("selection_resize");

        let InputState::Updating {
            id,
            direction,
            origin,
            drag_anchor,
            pre_edit,
            ..
        } = self.input_state
        else {
            return;
        };
        let Some(current) = self.store.find(id).copied() else {
            trace!(%id, "Resize target vanished, tick ignored");
            return;
        };

        let pointer = CoordinateConverter::client_to_clamped_canvas(event.position, origin, &self.bounds);

        // Each edge is written independently, so dragging past the opposite
        // edge flips the selection instead of collapsing it
        let mut edited = current;
        if direction.affects_right() {
            edited.end_x = pointer.x;
        }
        if direction.affects_left() {
            edited.start_x = pointer.x;
        }
        if direction.affects_bottom() {
            edited.end_y = pointer.y;
        }
        if direction.affects_top() {
            edited.start_y = pointer.y;
        }

        self.store.update(edited);
        let overlapping = self.store.overlaps_any(&edited);

        self.input_state = InputState::Updating {
            id,
            direction,
            origin,
            drag_anchor,
            pre_edit: pre_edit.or(Some(current)),
            post_edit: Some(edited),
            overlapping,
        };
    }

    fn tick_moving(&mut self, event: PointerEvent) {
        profile_scope!("selection_move");

        let InputState::Updating {
            id,
            direction,
            origin,
            drag_anchor,
            pre_edit,
            ..
        } = self.input_state
        else {
            return;
        };
        let Some(current) = self.store.find(id).copied() else {
            trace!(%id, "Move target vanished, tick ignored");
            return;
        };

        let pointer = CoordinateConverter::client_to_clamped_canvas(event.position, origin, &self.bounds);
        let delta = pointer - drag_anchor;

        // An axis moves only if both corners stay on the canvas
        let mut moved = current;
        let (start_x, start_x_ok) = self.bounds.clamp_x(current.start_x + delta.x);
        let (end_x, end_x_ok) = self.bounds.clamp_x(current.end_x + delta.x);
        if start_x_ok && end_x_ok {
            moved.start_x = start_x;
            moved.end_x = end_x;
        }
        let (start_y, start_y_ok) = self.bounds.clamp_y(current.start_y + delta.y);
        let (end_y, end_y_ok) = self.bounds.clamp_y(current.end_y + delta.y);
        if start_y_ok && end_y_ok {
            moved.start_y = start_y;
            moved.end_y = end_y;
        }

        self.store.update(moved);
        let overlapping = self.store.overlaps_any(&moved);

        // The anchor follows the pointer even when an axis was held back
        self.input_state = InputState::Updating {
            id,
            direction,
            origin,
            drag_anchor: pointer,
            pre_edit: pre_edit.or(Some(current)),
            post_edit: Some(moved),
            overlapping,
        };
    }

    /// Let the diagonal cursor follow the hovered corner of the selection
    /// under resize, which changes when the drag flips its orientation.
    fn follow_corner_cursor(&mut self, target: PointerTarget) {
        let PointerTarget::Handle { id: hovered, direction } = target else {
            return;
        };
        let Some(active) = self.input_state.active_selection_id() else {
            return;
        };
        if !direction.is_corner() {
            return;
        }
        let Some(selection) = self.store.find(hovered) else {
            return;
        };

        let cursor = handle_cursor(selection, direction);
        if self.cursor.update_corner(active, hovered, cursor) {
            trace!(cursor = cursor.as_css(), "Corner cursor switched");
        }
    }
}
