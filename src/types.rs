//! Core types for the selection engine.
//!
//! This module defines the fundamental data structures shared by the store,
//! the pointer state machines and the presentation helpers.

use crate::geometry::{Bounds, Extent, boundary, dimension};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Selection Identity
// ============================================================================

/// Opaque, unique identifier of a selection.
///
/// Generated once when a drag starts on the empty canvas and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionId(Uuid);

impl SelectionId {
    /// Generate a fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SelectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SelectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// Selection
// ============================================================================

/// A user-drawn rectangle in canvas space.
///
/// `start` is where the drag began and `end` where it currently is, so either
/// corner may be numerically larger on either axis. Use the derived accessors
/// (`left`, `top`, `width`, ...) instead of assuming `start < end`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub id: SelectionId,
    pub start_x: f32,
    pub start_y: f32,
    pub end_x: f32,
    pub end_y: f32,
}

impl Selection {
    pub fn new(id: SelectionId, start: (f32, f32), end: (f32, f32)) -> Self {
        Self {
            id,
            start_x: start.0,
            start_y: start.1,
            end_x: end.0,
            end_y: end.1,
        }
    }

    /// A zero-sized selection anchored at a single point (start of a drag)
    pub fn at_point(id: SelectionId, x: f32, y: f32) -> Self {
        Self::new(id, (x, y), (x, y))
    }

    pub fn left(&self) -> f32 {
        boundary(self.start_x, self.end_x, Extent::Min)
    }

    pub fn right(&self) -> f32 {
        boundary(self.start_x, self.end_x, Extent::Max)
    }

    pub fn top(&self) -> f32 {
        boundary(self.start_y, self.end_y, Extent::Min)
    }

    pub fn bottom(&self) -> f32 {
        boundary(self.start_y, self.end_y, Extent::Max)
    }

    pub fn width(&self) -> f32 {
        dimension(self.start_x, self.end_x)
    }

    pub fn height(&self) -> f32 {
        dimension(self.start_y, self.end_y)
    }

    /// Normalized bounding box
    pub fn bounds(&self) -> Bounds {
        Bounds::from_corners((self.start_x, self.start_y), (self.end_x, self.end_y))
    }

    /// True when the drag went top-left to bottom-right or the reverse.
    ///
    /// Mixed directions (e.g. drawn from top-right to bottom-left) are
    /// "flipped" and swap the diagonal resize cursors.
    pub fn is_normal_orientation(&self) -> bool {
        let from_top_left = self.start_x < self.end_x && self.start_y < self.end_y;
        let from_bottom_right = self.start_x > self.end_x && self.start_y > self.end_y;
        from_top_left || from_bottom_right
    }

    /// Copy of this selection with a different end corner
    pub fn with_end(&self, end_x: f32, end_y: f32) -> Self {
        Self {
            end_x,
            end_y,
            ..*self
        }
    }
}

// ============================================================================
// Direction
// ============================================================================

/// Which edge(s) a pointer interaction edits.
///
/// `None` means the whole selection is being moved rather than resized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    None,
}

impl Default for Direction {
    fn default() -> Self {
        Self::None
    }
}

impl Direction {
    /// The eight resize directions, in handle render order
    pub const HANDLES: [Direction; 8] = [
        Direction::TopLeft,
        Direction::TopRight,
        Direction::BottomLeft,
        Direction::BottomRight,
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    pub fn affects_top(&self) -> bool {
        matches!(self, Self::Top | Self::TopLeft | Self::TopRight)
    }

    pub fn affects_bottom(&self) -> bool {
        matches!(self, Self::Bottom | Self::BottomLeft | Self::BottomRight)
    }

    pub fn affects_left(&self) -> bool {
        matches!(self, Self::Left | Self::TopLeft | Self::BottomLeft)
    }

    pub fn affects_right(&self) -> bool {
        matches!(self, Self::Right | Self::TopRight | Self::BottomRight)
    }

    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            Self::TopLeft | Self::TopRight | Self::BottomLeft | Self::BottomRight
        )
    }

    /// Returns true for the whole-selection move
    pub fn is_move(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
            Self::None => "none",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
