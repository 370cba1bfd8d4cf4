//! Pointer down - start a creation, resize or move session.

use crate::cursor::active_cursor_for;
use crate::engine::SelectionEngine;
use crate::geometry::Point;
use crate::input::coords::{CanvasHost, CoordinateConverter};
use crate::input::{PointerEvent, PointerTarget};
use crate::profile_scope;
use crate::types::{Direction, SelectionId};
use tracing::{debug, trace};

impl SelectionEngine {
    /// Begin a pointer session.
    ///
    /// The canvas origin is read from `host` here and nowhere else. If the
    /// canvas is not mounted, or a session is already running, nothing
    /// happens.
    pub fn handle_mouse_down(&mut self, event: PointerEvent, host: &impl CanvasHost) {
        profile_scope!("handle_mouse_down");

        if !self.input_state.is_idle() {
            trace!("Pointer down during an active session, ignored");
            return;
        }

        match event.target {
            PointerTarget::Canvas => self.start_creating(event.position, host),
            PointerTarget::Handle { id, direction } => {
                self.start_updating(id, direction, event.position, host)
            }
            PointerTarget::DragRegion { id } => {
                self.start_updating(id, Direction::None, event.position, host)
            }
            PointerTarget::Other => {}
        }
    }

    fn start_creating(&mut self, client: Point, host: &impl CanvasHost) {
        let Some(origin) = host.canvas_origin() else {
            trace!("Canvas not mounted, creation not started");
            return;
        };

        let start = CoordinateConverter::client_to_canvas(client, origin);
        self.input_state.start_creating(origin, start);
        debug!(x = start.x, y = start.y, "Creating selection");
    }

    fn start_updating(
        &mut self,
        id: SelectionId,
        direction: Direction,
        client: Point,
        host: &impl CanvasHost,
    ) {
        let Some(selection) = self.store.find(id).copied() else {
            debug!(%id, "Pointer down on unknown selection, ignored");
            return;
        };
        let Some(origin) = host.canvas_origin() else {
            trace!("Canvas not mounted, update not started");
            return;
        };

        let anchor = CoordinateConverter::client_to_canvas(client, origin);
        self.input_state.start_updating(id, direction, origin, anchor);
        self.cursor.trigger(active_cursor_for(&selection, direction));
        debug!(%id, %direction, "Updating selection");
    }
}
