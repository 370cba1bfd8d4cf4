//! Pointer up and pointer leave - finalize the session.

use crate::engine::SelectionEngine;
use crate::input::InputState;
use crate::profile_scope;
use tracing::{debug, warn};

impl SelectionEngine {
    /// End the session: commit a non-overlapping new selection, or revert an
    /// edit that ended overlapping. Always returns to idle and clears the
    /// cursor override.
    pub fn handle_mouse_up(&mut self) {
        profile_scope!("handle_mouse_up");

        let state = std::mem::take(&mut self.input_state);
        self.cursor.reset();

        match state {
            InputState::Idle => {}
            InputState::Creating { candidate, .. } => {
                // Re-check against the store rather than trusting the last tick
                if self.store.overlaps_any(&candidate) {
                    debug!(id = %candidate.id, "Discarded overlapping selection");
                    return;
                }
                match self.store.add(candidate) {
                    Ok(()) => debug!(
                        id = %candidate.id,
                        index = self.store.len(),
                        width = candidate.width(),
                        height = candidate.height(),
                        "Committed selection"
                    ),
                    Err(e) => warn!("Could not commit selection: {}", e),
                }
            }
            InputState::Updating {
                id,
                pre_edit: Some(pre_edit),
                post_edit: Some(post_edit),
                ..
            } => {
                if self.store.overlaps_any(&post_edit) && self.store.update(pre_edit) {
                    debug!(%id, "Reverted overlapping edit");
                } else {
                    debug!(%id, "Finished editing selection");
                }
            }
            InputState::Updating { id, .. } => {
                debug!(%id, "Edit ended without changes");
            }
        }
    }

    /// Leaving the canvas ends the session exactly like a pointer up
    pub fn handle_mouse_leave(&mut self) {
        self.handle_mouse_up();
    }
}
