//! Input state machine - the single pointer session.
//!
//! One enum replaces the loose "is selecting / active id / direction / drag
//! start / pre-edit / post-edit" flags, so a session that edits a selection
//! always carries the id and direction it edits.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Creating     (pointer down on the empty canvas)
//! Idle -> Updating     (pointer down on a resize handle or drag region)
//!
//! Any -> Idle          (pointer up or leave - commits or reverts)
//! ```

use crate::geometry::Point;
use crate::types::{Direction, Selection, SelectionId};

#[derive(Debug, Clone, PartialEq)]
pub enum InputState {
    /// No pointer session
    Idle,

    /// Drawing a new selection on the empty canvas
    Creating {
        /// Client-space top-left of the canvas, measured at pointer down
        origin: Point,
        /// Selection being drawn; not in the store until committed
        candidate: Selection,
        overlapping: bool,
    },

    /// Resizing (`direction` is an edge or corner) or moving
    /// (`direction == Direction::None`) a stored selection
    Updating {
        id: SelectionId,
        direction: Direction,
        origin: Point,
        /// Canvas-space pointer position of the previous move tick
        drag_anchor: Point,
        /// Snapshot taken on the first tick, restored if the edit ends overlapping
        pre_edit: Option<Selection>,
        /// Last state written to the store
        post_edit: Option<Selection>,
        overlapping: bool,
    },
}

impl Default for InputState {
    fn default() -> Self {
        Self::Idle
    }
}

impl InputState {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_creating(&self) -> bool {
        matches!(self, Self::Creating { .. })
    }

    /// Returns true for both resize and move sessions
    pub fn is_updating(&self) -> bool {
        matches!(self, Self::Updating { .. })
    }

    pub fn is_moving(&self) -> bool {
        matches!(self, Self::Updating { direction, .. } if direction.is_move())
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Updating { direction, .. } if !direction.is_move())
    }

    /// Id of the stored selection being edited, if any
    pub fn active_selection_id(&self) -> Option<SelectionId> {
        match self {
            Self::Updating { id, .. } => Some(*id),
            _ => None,
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::Updating { direction, .. } => Some(*direction),
            _ => None,
        }
    }

    /// The in-progress selection of a creation session
    pub fn candidate(&self) -> Option<&Selection> {
        match self {
            Self::Creating { candidate, .. } => Some(candidate),
            _ => None,
        }
    }

    /// Overlap flag of the current session, false when idle
    pub fn is_overlapping(&self) -> bool {
        match self {
            Self::Creating { overlapping, .. } | Self::Updating { overlapping, .. } => *overlapping,
            Self::Idle => false,
        }
    }

    pub fn origin(&self) -> Option<Point> {
        match self {
            Self::Creating { origin, .. } | Self::Updating { origin, .. } => Some(*origin),
            Self::Idle => None,
        }
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// Start drawing a new selection at `start` (canvas space)
    pub fn start_creating(&mut self, origin: Point, start: Point) {
        *self = Self::Creating {
            origin,
            candidate: Selection::at_point(SelectionId::new(), start.x, start.y),
            overlapping: false,
        };
    }

    /// Start editing a stored selection
    pub fn start_updating(&mut self, id: SelectionId, direction: Direction, origin: Point, anchor: Point) {
        *self = Self::Updating {
            id,
            direction,
            origin,
            drag_anchor: anchor,
            pre_edit: None,
            post_edit: None,
            overlapping: false,
        };
    }
}
