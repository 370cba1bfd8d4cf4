//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestEngineBuilder` - Builder for engines with preset selections
//! - `MockHost` - A canvas host with a configurable client offset
//! - `drag` / `drag_target` - Full down/move/up sequences

use area_selector::geometry::{CanvasBounds, Point};
use area_selector::{
    CanvasHost, PointerEvent, PointerTarget, Selection, SelectionEngine, SelectionId,
};

// ============================================================================
// MockHost
// ============================================================================

/// Canvas host whose element sits at `origin` in client space, or is not
/// mounted at all.
#[derive(Debug, Clone, Copy)]
pub struct MockHost {
    pub origin: Option<Point>,
}

impl MockHost {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            origin: Some(Point::new(x, y)),
        }
    }

    pub fn unmounted() -> Self {
        Self { origin: None }
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::at(0.0, 0.0)
    }
}

impl CanvasHost for MockHost {
    fn canvas_origin(&self) -> Option<Point> {
        self.origin
    }
}

// ============================================================================
// TestEngineBuilder
// ============================================================================

/// Builder for engines with a canvas size, scale and preset selections.
///
/// # Example
/// ```ignore
/// let (engine, ids) = TestEngineBuilder::new()
///     .with_canvas(400.0, 300.0)
///     .with_selection((0.0, 0.0), (50.0, 50.0))
///     .build();
/// ```
pub struct TestEngineBuilder {
    width: f32,
    height: f32,
    scale: f32,
    selections: Vec<((f32, f32), (f32, f32))>,
}

impl Default for TestEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEngineBuilder {
    pub fn new() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            scale: 1.0,
            selections: Vec::new(),
        }
    }

    pub fn with_canvas(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_selection(mut self, start: (f32, f32), end: (f32, f32)) -> Self {
        self.selections.push((start, end));
        self
    }

    /// Build the engine; the returned ids follow insertion order.
    pub fn build(self) -> (SelectionEngine, Vec<SelectionId>) {
        let mut engine = SelectionEngine::new(CanvasBounds::new(self.width, self.height));
        engine.store_mut().set_scale(self.scale).unwrap();

        let ids = self
            .selections
            .into_iter()
            .map(|(start, end)| {
                let selection = Selection::new(SelectionId::new(), start, end);
                engine.store_mut().add(selection).unwrap();
                selection.id
            })
            .collect();

        (engine, ids)
    }
}

// ============================================================================
// Pointer sequences
// ============================================================================

/// Press on `target` at `from`, move through `path`, then release.
pub fn drag_target(
    engine: &mut SelectionEngine,
    host: &MockHost,
    target: PointerTarget,
    from: (f32, f32),
    path: &[(f32, f32)],
) {
    engine.handle_mouse_down(PointerEvent::new(from.0, from.1, target), host);
    for &(x, y) in path {
        engine.handle_mouse_move(PointerEvent::new(x, y, PointerTarget::Canvas));
    }
    engine.handle_mouse_up();
}

/// Draw on the empty canvas from `from` to `to` with the host at the client origin.
pub fn drag(engine: &mut SelectionEngine, from: (f32, f32), to: (f32, f32)) {
    drag_target(engine, &MockHost::default(), PointerTarget::Canvas, from, &[to]);
}

pub fn selection(engine: &SelectionEngine, id: SelectionId) -> Selection {
    *engine.store().get(id).unwrap()
}

/// Assert that no two committed selections strictly overlap
pub fn assert_no_overlaps(engine: &SelectionEngine) {
    let list = engine.selections();
    for (i, a) in list.iter().enumerate() {
        for b in &list[i + 1..] {
            assert!(
                !area_selector::geometry::overlaps(a, b),
                "selections overlap: {:?} and {:?}",
                a,
                b
            );
        }
    }
}
