//! Coordinate conversion between client space and canvas space.
//!
//! The canvas origin is measured once when a session starts; every later tick
//! reuses it.

use crate::geometry::{CanvasBounds, Point};

/// The one layout query the engine makes of its host
pub trait CanvasHost {
    /// Client-space top-left of the canvas element, or `None` if it is not
    /// mounted
    fn canvas_origin(&self) -> Option<Point>;
}

/// A host whose canvas sits at a fixed client position
impl CanvasHost for Point {
    fn canvas_origin(&self) -> Option<Point> {
        Some(*self)
    }
}

impl<T: CanvasHost + ?Sized> CanvasHost for &T {
    fn canvas_origin(&self) -> Option<Point> {
        (**self).canvas_origin()
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Client position to canvas position, unclamped
    #[inline]
    pub fn client_to_canvas(client: Point, origin: Point) -> Point {
        client - origin
    }

    /// Client position to canvas position, clamped into the canvas
    #[inline]
    pub fn client_to_clamped_canvas(client: Point, origin: Point, bounds: &CanvasBounds) -> Point {
        bounds.clamp_point(Self::client_to_canvas(client, origin))
    }

    #[inline]
    pub fn canvas_to_client(canvas: Point, origin: Point) -> Point {
        Point::new(canvas.x + origin.x, canvas.y + origin.y)
    }
}
