//! Coordinate projection from canvas space back to original image pixels.
//!
//! This is the only representation handed to downstream consumers such as a
//! data viewer; raw canvas coordinates are never exposed.

use crate::geometry::dimension;
use crate::types::Selection;
use serde::{Deserialize, Serialize};

/// Center and size of a selection in original image pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedAreaData {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Round half up, matching how the values are shown in the browser viewer.
#[inline]
fn to_origin(value: f32, scale: f32) -> i32 {
    ((value as f64 / scale as f64) + 0.5).floor() as i32
}

#[inline]
fn center(start: f32, end: f32) -> f32 {
    (start + end) / 2.0
}

/// Project a selection (or an uncommitted candidate) into image space.
///
/// `scale` is canvas pixels per image pixel and must be positive; the store
/// refuses any other value.
pub fn project(selection: &Selection, scale: f32) -> SelectedAreaData {
    let Selection {
        start_x,
        start_y,
        end_x,
        end_y,
        ..
    } = *selection;

    SelectedAreaData {
        x: to_origin(center(start_x, end_x), scale),
        y: to_origin(center(start_y, end_y), scale),
        width: to_origin(dimension(start_x, end_x), scale),
        height: to_origin(dimension(start_y, end_y), scale),
    }
}

/// Pretty JSON for a list of projected areas
pub fn render_json(areas: &[SelectedAreaData]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(areas)
}
