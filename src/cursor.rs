//! Cursor presentation logic.
//!
//! Resize handles pick their cursor from the selection's draw orientation:
//! a selection drawn top-left to bottom-right (or the reverse) uses the
//! "normal" diagonal pair, a mixed-direction one uses the swapped pair.

use crate::types::{Direction, Selection, SelectionId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CursorStyle {
    /// Idle, ready to draw
    Crosshair,
    /// Hovering a drag region
    Grab,
    /// Moving a selection
    Grabbing,
    RowResize,
    ColResize,
    NwseResize,
    NeswResize,
}

impl CursorStyle {
    /// CSS `cursor` value
    pub fn as_css(&self) -> &'static str {
        match self {
            Self::Crosshair => "crosshair",
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
            Self::RowResize => "row-resize",
            Self::ColResize => "col-resize",
            Self::NwseResize => "nwse-resize",
            Self::NeswResize => "nesw-resize",
        }
    }

    pub fn is_corner_resize(&self) -> bool {
        matches!(self, Self::NwseResize | Self::NeswResize)
    }
}

const DEFAULT_CORNER_CURSORS: [CursorStyle; 2] = [CursorStyle::NwseResize, CursorStyle::NeswResize];
const FLIPPED_CORNER_CURSORS: [CursorStyle; 2] = [CursorStyle::NeswResize, CursorStyle::NwseResize];

/// Cursor for the handle at `direction` on `selection`.
///
/// `Direction::None` is the drag region and maps to the open-hand cursor.
pub fn handle_cursor(selection: &Selection, direction: Direction) -> CursorStyle {
    let corners = if selection.is_normal_orientation() {
        DEFAULT_CORNER_CURSORS
    } else {
        FLIPPED_CORNER_CURSORS
    };

    match direction {
        Direction::TopLeft | Direction::BottomRight => corners[0],
        Direction::TopRight | Direction::BottomLeft => corners[1],
        Direction::Top | Direction::Bottom => CursorStyle::RowResize,
        Direction::Left | Direction::Right => CursorStyle::ColResize,
        Direction::None => CursorStyle::Grab,
    }
}

/// Cursors for all eight handles, in handle render order
pub fn handle_cursors(selection: &Selection) -> [(Direction, CursorStyle); 8] {
    Direction::HANDLES.map(|d| (d, handle_cursor(selection, d)))
}

/// Cursor shown while a session of this kind is active
pub fn active_cursor_for(selection: &Selection, direction: Direction) -> CursorStyle {
    if direction.is_move() {
        CursorStyle::Grabbing
    } else {
        handle_cursor(selection, direction)
    }
}

/// Tracks the global cursor override during a resize/move session.
#[derive(Debug, Clone, Default)]
pub struct CursorTracker {
    active: Option<CursorStyle>,
}

impl CursorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the cursor for the rest of the session
    pub fn trigger(&mut self, cursor: CursorStyle) {
        self.active = Some(cursor);
    }

    /// Follow the hovered corner handle of the selection being resized.
    ///
    /// Only corner-to-corner swaps are applied; edge and drag cursors never
    /// replace a diagonal one mid-session.
    pub fn update_corner(
        &mut self,
        active_id: SelectionId,
        hovered_id: SelectionId,
        hovered_cursor: CursorStyle,
    ) -> bool {
        let Some(current) = self.active else {
            return false;
        };
        if !current.is_corner_resize() || active_id != hovered_id || !hovered_cursor.is_corner_resize() {
            return false;
        }
        self.active = Some(hovered_cursor);
        current != hovered_cursor
    }

    pub fn reset(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<CursorStyle> {
        self.active
    }

    /// Effective cursor: the override, or crosshair when idle
    pub fn current(&self) -> CursorStyle {
        self.active.unwrap_or(CursorStyle::Crosshair)
    }
}
