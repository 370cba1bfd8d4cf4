//! Selection store - the single source of truth for committed selections.
//!
//! Keeps selections in insertion order (which is also z-order and the 1-based
//! index shown on each badge) together with an R-tree mirror used for overlap
//! and hit queries, and the image-to-canvas scale factor.

use crate::constants::DEFAULT_SCALE;
use crate::error::{SelectorError, SelectorResult};
use crate::geometry::overlaps;
use crate::spatial_index::SpatialIndex;
use crate::types::{Selection, SelectionId};

pub struct SelectionStore {
    selections: Vec<Selection>,
    index: SpatialIndex,
    scale: f32,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self {
            selections: Vec::new(),
            index: SpatialIndex::new(),
            scale: DEFAULT_SCALE,
        }
    }

    /// All selections in insertion order
    pub fn list(&self) -> &[Selection] {
        &self.selections
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Look up a selection, failing if it does not exist
    pub fn get(&self, id: SelectionId) -> SelectorResult<&Selection> {
        self.find(id).ok_or(SelectorError::NotFound(id))
    }

    pub fn find(&self, id: SelectionId) -> Option<&Selection> {
        self.selections.iter().find(|s| s.id == id)
    }

    /// 1-based display position of a selection
    pub fn index_of(&self, id: SelectionId) -> Option<usize> {
        self.selections.iter().position(|s| s.id == id).map(|i| i + 1)
    }

    pub fn add(&mut self, selection: Selection) -> SelectorResult<()> {
        if self.find(selection.id).is_some() {
            return Err(SelectorError::DuplicateId(selection.id));
        }
        self.index.insert(&selection);
        self.selections.push(selection);
        Ok(())
    }

    /// Replace the stored entry with the same id.
    ///
    /// Returns false (and changes nothing) when the id is unknown.
    pub fn update(&mut self, selection: Selection) -> bool {
        let Some(slot) = self.selections.iter_mut().find(|s| s.id == selection.id) else {
            return false;
        };
        *slot = selection;
        self.index.insert(&selection);
        true
    }

    pub fn remove(&mut self, id: SelectionId) -> Option<Selection> {
        let position = self.selections.iter().position(|s| s.id == id)?;
        self.index.remove(id);
        Some(self.selections.remove(position))
    }

    pub fn clear(&mut self) {
        self.selections.clear();
        self.index.clear();
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_scale(&mut self, ratio: f32) -> SelectorResult<()> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(SelectorError::InvalidScale(ratio));
        }
        self.scale = ratio;
        Ok(())
    }

    /// True if `candidate` overlaps any stored selection other than itself
    pub fn overlaps_any(&self, candidate: &Selection) -> bool {
        self.index
            .query_bounds(&candidate.bounds())
            .into_iter()
            .filter(|id| *id != candidate.id)
            .filter_map(|id| self.find(id))
            .any(|other| overlaps(candidate, other))
    }

    /// Selections containing a canvas point, front-most first
    pub fn query_point(&self, x: f32, y: f32) -> Vec<SelectionId> {
        let hits = self.index.query_point(x, y);
        self.selections
            .iter()
            .rev()
            .filter(|s| hits.contains(&s.id))
            .map(|s| s.id)
            .collect()
    }
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new()
    }
}
