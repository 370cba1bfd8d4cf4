//! Geometry utilities.
//!
//! Depending on how the user draws a selection (left to right or right to
//! left, top to bottom or bottom to top) `start` may be greater than `end` on
//! either axis. Everything here normalizes through `boundary`/`dimension`
//! instead of trusting the corner order.

use crate::types::Selection;
use serde::{Deserialize, Serialize};

/// Which side of an unordered pair to pick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    Min,
    Max,
}

/// Smaller or larger of two unordered endpoints
#[inline]
pub fn boundary(a: f32, b: f32, which: Extent) -> f32 {
    match which {
        Extent::Min => a.min(b),
        Extent::Max => a.max(b),
    }
}

/// Extent of a rectangle along one axis
#[inline]
pub fn dimension(a: f32, b: f32) -> f32 {
    (a - b).abs()
}

/// Force `value` into `[min, max]`.
///
/// The flag reports whether the value was already in range, so callers can
/// reject a coupled movement when any part of it would leave the canvas.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> (f32, bool) {
    if value < min {
        (min, false)
    } else if value > max {
        (max, false)
    } else {
        (value, true)
    }
}

/// Strict axis-aligned intersection test. Touching edges do not overlap.
pub fn overlaps(a: &Selection, b: &Selection) -> bool {
    a.bounds().overlaps(&b.bounds())
}

// ============================================================================
// Point & Bounds
// ============================================================================

/// A position in client or canvas space
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A normalized box with `min <= max` on both axes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Bounds {
    pub fn from_corners(a: (f32, f32), b: (f32, f32)) -> Self {
        Self {
            min_x: boundary(a.0, b.0, Extent::Min),
            min_y: boundary(a.1, b.1, Extent::Min),
            max_x: boundary(a.0, b.0, Extent::Max),
            max_y: boundary(a.1, b.1, Extent::Max),
        }
    }

    pub fn from_origin_size(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::from_corners((x, y), (x + width, y + height))
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    #[inline]
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

// ============================================================================
// Canvas Bounds
// ============================================================================

/// The drawable area. All selection coordinates lie in `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasBounds {
    pub width: f32,
    pub height: f32,
}

impl CanvasBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    #[inline]
    pub fn clamp_x(&self, x: f32) -> (f32, bool) {
        clamp(x, 0.0, self.width)
    }

    #[inline]
    pub fn clamp_y(&self, y: f32) -> (f32, bool) {
        clamp(y, 0.0, self.height)
    }

    /// Clamp both axes, discarding the in-bounds flags
    pub fn clamp_point(&self, p: Point) -> Point {
        Point::new(self.clamp_x(p.x).0, self.clamp_y(p.y).0)
    }

    pub fn contains(&self, selection: &Selection) -> bool {
        self.clamp_x(selection.start_x).1
            && self.clamp_x(selection.end_x).1
            && self.clamp_y(selection.start_y).1
            && self.clamp_y(selection.end_y).1
    }
}
