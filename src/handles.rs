//! Display geometry for a selection's interactive parts.
//!
//! Handles are placed on the raw `start`/`end` coordinates rather than the
//! normalized box, so every handle stays bound to the edge it edits even when
//! the selection was drawn "backwards".

use crate::constants::{BADGE_MARGIN, BADGE_SIZE, DRAG_REGION_INSET, HANDLE_HIT_SIZE, HANDLE_SIZE};
use crate::geometry::{Bounds, Point};
use crate::types::{Direction, Selection};
use serde::{Deserialize, Serialize};

/// Sizes used to lay out handles, the drag region and the index badge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandleMetrics {
    /// Visible square size
    pub handle_size: f32,
    /// Enlarged interaction size
    pub hit_size: f32,
    /// Total inset of the drag region
    pub drag_inset: f32,
    pub badge_size: f32,
    pub badge_margin: f32,
}

impl Default for HandleMetrics {
    fn default() -> Self {
        Self {
            handle_size: HANDLE_SIZE,
            hit_size: HANDLE_HIT_SIZE,
            drag_inset: DRAG_REGION_INSET,
            badge_size: BADGE_SIZE,
            badge_margin: BADGE_MARGIN,
        }
    }
}

/// One resize handle: where to draw it and where it reacts to the pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleRect {
    pub direction: Direction,
    /// Top-left of the visible square
    pub origin: Point,
    pub size: f32,
    pub hit: Bounds,
}

/// Where to put the 1-based index badge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgePlacement {
    pub origin: Point,
    /// True when the selection is too small and the badge sits to its left
    pub outside: bool,
}

/// Lay out the eight resize handles of a selection
pub fn handle_rects(selection: &Selection, metrics: &HandleMetrics) -> Vec<HandleRect> {
    let half = metrics.handle_size / 2.0;
    let hit = metrics.hit_size;
    let mid_x = (selection.start_x + selection.end_x) / 2.0;
    let mid_y = (selection.start_y + selection.end_y) / 2.0;
    // Edge handles span the edge minus room for both corners
    let edge_w = (selection.width() - hit * 2.0).max(0.0);
    let edge_h = (selection.height() - hit * 2.0).max(0.0);

    let anchors = [
        (Direction::TopLeft, selection.start_x, selection.start_y),
        (Direction::TopRight, selection.end_x, selection.start_y),
        (Direction::BottomLeft, selection.start_x, selection.end_y),
        (Direction::BottomRight, selection.end_x, selection.end_y),
        (Direction::Top, mid_x, selection.start_y),
        (Direction::Right, selection.end_x, mid_y),
        (Direction::Bottom, mid_x, selection.end_y),
        (Direction::Left, selection.start_x, mid_y),
    ];

    anchors
        .into_iter()
        .map(|(direction, x, y)| {
            let origin = Point::new(x - half, y - half);

            let hit = match direction {
                Direction::Top | Direction::Bottom => Bounds::from_origin_size(
                    origin.x - (edge_w - hit) / 2.0,
                    origin.y,
                    edge_w,
                    hit,
                ),
                Direction::Left | Direction::Right => Bounds::from_origin_size(
                    origin.x,
                    origin.y - (edge_h - hit) / 2.0,
                    hit,
                    edge_h,
                ),
                _ => Bounds::from_origin_size(origin.x, origin.y, hit, hit),
            };

            HandleRect {
                direction,
                origin,
                size: metrics.handle_size,
                hit,
            }
        })
        .collect()
}

/// Area that starts a move when pressed; `None` if the selection is too small
pub fn drag_region(selection: &Selection, metrics: &HandleMetrics) -> Option<Bounds> {
    let width = selection.width() - metrics.drag_inset;
    let height = selection.height() - metrics.drag_inset;
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    let inset = metrics.drag_inset / 2.0;
    Some(Bounds::from_origin_size(
        selection.left() + inset,
        selection.top() + inset,
        width,
        height,
    ))
}

pub fn badge_placement(selection: &Selection, metrics: &HandleMetrics) -> BadgePlacement {
    let needed = metrics.badge_margin + metrics.drag_inset + metrics.badge_size;
    let outside = selection.width() <= needed || selection.height() <= needed;

    let origin = if outside {
        Point::new(
            selection.left() - metrics.badge_margin - metrics.badge_size,
            selection.top(),
        )
    } else {
        Point::new(
            selection.left() + metrics.badge_margin,
            selection.top() + metrics.badge_margin,
        )
    };

    BadgePlacement { origin, outside }
}

/// Top-left of the delete button, just right of the selection
pub fn delete_button_origin(selection: &Selection, metrics: &HandleMetrics) -> Point {
    Point::new(
        selection.left() + selection.width() + metrics.badge_margin,
        selection.top(),
    )
}
