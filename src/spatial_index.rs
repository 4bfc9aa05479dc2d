//! Spatial Index Module
//!
//! R-tree of sprite bounding boxes used to prefilter hit-test candidates.
//! The tree knows nothing about draw order; the scene resolves overlaps.

use crate::types::{Bounds, SpriteId};
use rstar::primitives::{GeomWithData, Rectangle};
use rstar::RTree;
use std::collections::HashMap;

type Entry = GeomWithData<Rectangle<[f32; 2]>, SpriteId>;

fn entry(sprite_id: SpriteId, bounds: Bounds) -> Entry {
    let rect = Rectangle::from_corners(
        [bounds.x, bounds.y],
        [bounds.x + bounds.width, bounds.y + bounds.height],
    );
    GeomWithData::new(rect, sprite_id)
}

/// Bounding boxes keyed by sprite. Edges are inclusive.
#[derive(Default)]
pub struct SpatialIndex {
    tree: RTree<Entry>,
    // Last box inserted per sprite, needed to find its tree entry again.
    boxes: HashMap<SpriteId, Bounds>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the box for `sprite_id`.
    pub fn insert(&mut self, sprite_id: SpriteId, bounds: Bounds) {
        self.remove(sprite_id);
        self.tree.insert(entry(sprite_id, bounds));
        self.boxes.insert(sprite_id, bounds);
    }

    pub fn update(&mut self, sprite_id: SpriteId, bounds: Bounds) {
        if self.boxes.get(&sprite_id) != Some(&bounds) {
            self.insert(sprite_id, bounds);
        }
    }

    pub fn remove(&mut self, sprite_id: SpriteId) -> bool {
        match self.boxes.remove(&sprite_id) {
            Some(bounds) => self.tree.remove(&entry(sprite_id, bounds)).is_some(),
            None => false,
        }
    }

    pub fn bounds_of(&self, sprite_id: SpriteId) -> Option<Bounds> {
        self.boxes.get(&sprite_id).copied()
    }

    /// Every sprite whose box contains the point, in no particular order.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<SpriteId> {
        self.tree
            .locate_all_at_point(&[x, y])
            .map(|entry| entry.data)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}
