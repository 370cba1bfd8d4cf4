//! The selection engine - one owned aggregate of store, canvas and session.
//!
//! Pointer handlers live in `crate::input` as `impl SelectionEngine` blocks;
//! this module holds construction, commands that are not pointer driven, and
//! the read side used by a view layer.

use crate::constants::{DEFAULT_SELECTION_COLOR, OVERLAPPED_WARNING_COLOR};
use crate::cursor::{CursorStyle, CursorTracker, handle_cursors};
use crate::error::SelectorResult;
use crate::geometry::{CanvasBounds, Point};
use crate::handles::{HandleMetrics, drag_region, handle_rects};
use crate::image::ImageInfo;
use crate::input::{InputState, PointerTarget};
use crate::projection::{SelectedAreaData, project, render_json};
use crate::settings::Settings;
use crate::store::SelectionStore;
use crate::types::{Direction, Selection, SelectionId};
use serde::Serialize;
use tracing::debug;

/// Snapshot of the active session for the view layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionStatus {
    /// Selection being resized or moved
    pub active_selection_id: Option<SelectionId>,
    /// True while the in-progress shape overlaps another selection
    pub is_overlapping: bool,
    pub active_cursor: Option<CursorStyle>,
}

pub struct SelectionEngine {
    pub(crate) store: SelectionStore,
    pub(crate) bounds: CanvasBounds,
    pub(crate) input_state: InputState,
    pub(crate) cursor: CursorTracker,
    pub(crate) metrics: HandleMetrics,
    container_width: f32,
}

impl SelectionEngine {
    /// Engine over a canvas of the given size with default handle metrics
    pub fn new(bounds: CanvasBounds) -> Self {
        Self {
            store: SelectionStore::new(),
            bounds,
            input_state: InputState::Idle,
            cursor: CursorTracker::new(),
            metrics: HandleMetrics::default(),
            container_width: bounds.width,
        }
    }

    /// Empty engine sized by settings; call `load_image` to get a canvas height
    pub fn from_settings(settings: &Settings) -> Self {
        let mut engine = Self::new(CanvasBounds::new(settings.container_width, 0.0));
        engine.metrics = settings.handle_metrics();
        engine
    }

    /// Fit a new image into the container.
    ///
    /// Existing selections refer to the previous image, so they are dropped
    /// along with any active session.
    pub fn load_image(&mut self, image: ImageInfo) -> SelectorResult<()> {
        let (bounds, scale) = image.fit_to_width(self.container_width)?;
        self.store.set_scale(scale)?;
        self.store.clear();
        self.input_state.reset();
        self.cursor.reset();
        self.bounds = bounds;
        debug!(
            width = image.width,
            height = image.height,
            scale,
            "Loaded image"
        );
        Ok(())
    }

    /// Delete a committed selection.
    ///
    /// Refused for the selection the active session is editing. Returns
    /// whether a selection was removed.
    pub fn delete_selection(&mut self, id: SelectionId) -> bool {
        if self.input_state.active_selection_id() == Some(id) {
            debug!(%id, "Refusing to delete selection under edit");
            return false;
        }
        let removed = self.store.remove(id).is_some();
        if removed {
            debug!(%id, remaining = self.store.len(), "Deleted selection");
        }
        removed
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn selections(&self) -> &[Selection] {
        self.store.list()
    }

    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    /// Mutable store access for hosts that restore selections themselves
    pub fn store_mut(&mut self) -> &mut SelectionStore {
        &mut self.store
    }

    /// The selection being drawn, if a creation session is active
    pub fn candidate(&self) -> Option<&Selection> {
        self.input_state.candidate()
    }

    pub fn input_state(&self) -> &InputState {
        &self.input_state
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            active_selection_id: self.input_state.active_selection_id(),
            is_overlapping: self.input_state.is_overlapping(),
            active_cursor: self.cursor.active(),
        }
    }

    /// Cursor for the whole canvas: the session override or crosshair
    pub fn cursor(&self) -> CursorStyle {
        self.cursor.current()
    }

    pub fn handle_cursors(&self, id: SelectionId) -> Option<[(Direction, CursorStyle); 8]> {
        self.store.find(id).map(handle_cursors)
    }

    /// 1-based position shown on the selection's badge
    pub fn selection_index(&self, id: SelectionId) -> Option<usize> {
        self.store.index_of(id)
    }

    /// Outline color of a stored selection: the warning color while it is
    /// being edited into an overlap
    pub fn selection_color(&self, id: SelectionId) -> &'static str {
        if self.input_state.active_selection_id() == Some(id) && self.input_state.is_overlapping() {
            OVERLAPPED_WARNING_COLOR
        } else {
            DEFAULT_SELECTION_COLOR
        }
    }

    /// Outline color of the selection being drawn, if any
    pub fn candidate_color(&self) -> Option<&'static str> {
        self.input_state.candidate().map(|_| {
            if self.input_state.is_overlapping() {
                OVERLAPPED_WARNING_COLOR
            } else {
                DEFAULT_SELECTION_COLOR
            }
        })
    }

    pub fn bounds(&self) -> CanvasBounds {
        self.bounds
    }

    pub fn scale(&self) -> f32 {
        self.store.scale()
    }

    pub fn metrics(&self) -> &HandleMetrics {
        &self.metrics
    }

    /// All committed selections in image-pixel space, in display order
    pub fn selected_area_data(&self) -> Vec<SelectedAreaData> {
        let scale = self.store.scale();
        self.store.list().iter().map(|s| project(s, scale)).collect()
    }

    pub fn selected_area_json(&self) -> serde_json::Result<String> {
        render_json(&self.selected_area_data())
    }

    /// Resolve what a canvas-space point is over.
    ///
    /// Resize handles win (front-most selection first), then drag regions,
    /// else the bare canvas. Positions outside the canvas are `Other` unless
    /// a handle reaches past the edge there.
    pub fn hit_test(&self, point: Point) -> PointerTarget {
        let outside = point.x < 0.0
            || point.y < 0.0
            || point.x > self.bounds.width
            || point.y > self.bounds.height;

        // Handles poke out past the box, so scan every selection front to back
        for selection in self.store.list().iter().rev() {
            let hit = handle_rects(selection, &self.metrics)
                .into_iter()
                .find(|rect| rect.hit.contains_point(point.x, point.y));
            if let Some(rect) = hit {
                return PointerTarget::Handle {
                    id: selection.id,
                    direction: rect.direction,
                };
            }
        }

        if outside {
            return PointerTarget::Other;
        }

        let in_drag_region = self.store.query_point(point.x, point.y).into_iter().find(|id| {
            self.store
                .find(*id)
                .and_then(|s| drag_region(s, &self.metrics))
                .is_some_and(|region| region.contains_point(point.x, point.y))
        });

        match in_drag_region {
            Some(id) => PointerTarget::DragRegion { id },
            None => PointerTarget::Canvas,
        }
    }
}
