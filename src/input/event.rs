//! Pointer events as delivered by the view layer.

use crate::geometry::Point;
use crate::types::{Direction, SelectionId};
use serde::{Deserialize, Serialize};

/// What the pointer was over when the event fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PointerTarget {
    /// The bare canvas, not a selection part
    Canvas,
    /// One of the eight resize handles of a selection
    Handle { id: SelectionId, direction: Direction },
    /// The inner area of a selection that starts a move
    DragRegion { id: SelectionId },
    /// Anything else (badge, delete button, outside the canvas)
    Other,
}

impl PointerTarget {
    /// Id of the selection this target belongs to
    pub fn selection_id(&self) -> Option<SelectionId> {
        match self {
            Self::Handle { id, .. } | Self::DragRegion { id } => Some(*id),
            Self::Canvas | Self::Other => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Client-space position
    pub position: Point,
    pub target: PointerTarget,
}

impl PointerEvent {
    pub fn new(x: f32, y: f32, target: PointerTarget) -> Self {
        Self {
            position: Point::new(x, y),
            target,
        }
    }

    pub fn on_canvas(x: f32, y: f32) -> Self {
        Self::new(x, y, PointerTarget::Canvas)
    }
}
