//! Spatial Index Module
//!
//! Provides R-tree based spatial indexing for overlap candidates and hit testing.
//! This reduces per-tick overlap checks from O(n) to O(log n + k).

use crate::geometry::Bounds;
use crate::types::{Selection, SelectionId};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A spatial entry representing a selection's normalized bounding box.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub id: SelectionId,
    pub bounds: Bounds,
}

impl SpatialEntry {
    pub fn new(selection: &Selection) -> Self {
        Self {
            id: selection.id,
            bounds: selection.bounds(),
        }
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bounds.min_x, self.bounds.min_y],
            [self.bounds.max_x, self.bounds.max_y],
        )
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Spatial index over stored selections.
///
/// Envelope queries are inclusive, so results are candidates only; callers
/// confirm with the strict test in `geometry`.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<SelectionId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Build a spatial index from an iterator of selections.
    pub fn from_selections<'a, I>(selections: I) -> Self
    where
        I: Iterator<Item = &'a Selection>,
    {
        let entries: Vec<SpatialEntry> = selections.map(SpatialEntry::new).collect();
        let entries_map: HashMap<SelectionId, SpatialEntry> =
            entries.iter().map(|e| (e.id, *e)).collect();

        Self {
            tree: RTree::bulk_load(entries),
            entries: entries_map,
        }
    }

    /// Insert or replace the entry for a selection
    pub fn insert(&mut self, selection: &Selection) {
        if let Some(old_entry) = self.entries.remove(&selection.id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(selection);
        self.tree.insert(entry);
        self.entries.insert(selection.id, entry);
    }

    pub fn remove(&mut self, id: SelectionId) -> bool {
        if let Some(entry) = self.entries.remove(&id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// Query all selections whose box contains the given canvas point.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<SelectionId> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.bounds.contains_point(x, y))
            .map(|entry| entry.id)
            .collect()
    }

    /// Query all selections whose envelope touches the given box.
    pub fn query_bounds(&self, bounds: &Bounds) -> Vec<SelectionId> {
        let envelope = AABB::from_corners(
            [bounds.min_x, bounds.min_y],
            [bounds.max_x, bounds.max_y],
        );

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
