//! Tile and feature data model.
//!
//! A tile has 13 slots: four edges with three sub-slots each (north,
//! east, south, west — edge `i` owns slots `3i..3i+3`, with `3i+1` the
//! edge midpoint) plus a center slot. Each slot optionally references a
//! feature in the tile's own feature table. Two slots are part of the
//! same connected feature exactly when they hold the same `FeatureId` —
//! identity, not kind, determines grouping.
//!
//! An edge midpoint with no feature reference is a river edge: water is
//! the absence of road, town, or field.

use serde::{Deserialize, Serialize};

/// Total slot count: 4 edges x 3 sub-slots + 1 center.
pub const SLOT_COUNT: usize = 13;

/// Index of the center slot.
pub const CENTER_SLOT: usize = 12;

/// Number of edge (= perimeter) slots.
const EDGE_SLOTS: usize = 12;

/// What a feature is, for rules and geometry purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureKind {
    Road,
    Town,
    Field,
    /// Center-slot marker only; never occupies an edge.
    Mill,
}

/// Index into a tile's feature table. Slots holding the same id are
/// physically connected inside the tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureId(pub usize);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    features: Vec<FeatureKind>,
    slots: [Option<FeatureId>; SLOT_COUNT],
}

impl Tile {
    /// Build a tile from its feature table and full slot assignment.
    ///
    /// Panics on a malformed definition (dangling feature id, a mill on
    /// an edge, a non-mill in the center): tile definitions are static
    /// library data, and a bad one is a bug upstream of the game.
    pub fn new(features: Vec<FeatureKind>, slots: [Option<FeatureId>; SLOT_COUNT]) -> Self {
        for (i, slot) in slots.iter().enumerate() {
            let Some(FeatureId(id)) = slot else { continue };
            assert!(
                *id < features.len(),
                "slot {i} references feature {id} outside the table"
            );
            let kind = features[*id];
            if i == CENTER_SLOT {
                assert!(
                    kind == FeatureKind::Mill,
                    "center slot holds {kind:?}, only a mill marker is allowed"
                );
            } else {
                assert!(
                    kind != FeatureKind::Mill,
                    "slot {i} holds a mill marker, mills are center-only"
                );
            }
        }
        Self { features, slots }
    }

    /// Build a tile from per-edge feature assignments (midpoint slots
    /// only) and an optional center feature. Side sub-slots stay empty.
    pub fn from_edges(
        features: Vec<FeatureKind>,
        edges: [Option<usize>; 4],
        center: Option<usize>,
    ) -> Self {
        let mut slots = [None; SLOT_COUNT];
        for (edge, feature) in edges.iter().enumerate() {
            slots[3 * edge + 1] = feature.map(FeatureId);
        }
        slots[CENTER_SLOT] = center.map(FeatureId);
        Self::new(features, slots)
    }

    pub fn slot(&self, index: usize) -> Option<FeatureId> {
        self.slots[index]
    }

    /// Kind of the feature with the given id.
    pub fn feature(&self, id: FeatureId) -> FeatureKind {
        self.features[id.0]
    }

    /// Feature occupying the midpoint of edge 0–3, if any. `None` is a
    /// river edge.
    pub fn edge_feature(&self, edge: usize) -> Option<FeatureId> {
        self.slots[3 * edge + 1]
    }

    /// Kind occupying the midpoint of edge 0–3. `None` is a river edge.
    pub fn edge_kind(&self, edge: usize) -> Option<FeatureKind> {
        self.edge_feature(edge).map(|id| self.feature(id))
    }

    /// Feature in the center slot, if any.
    pub fn center_feature(&self) -> Option<FeatureId> {
        self.slots[CENTER_SLOT]
    }

    /// Rotate the tile a quarter turn clockwise: edge `i` becomes edge
    /// `(i + 1) mod 4`, the center stays put. Four rotations are the
    /// identity.
    pub fn rotate_cw(&mut self) {
        let mut rotated = [None; SLOT_COUNT];
        for (slot, feature) in self.slots.iter().enumerate().take(EDGE_SLOTS) {
            rotated[(slot + 3) % EDGE_SLOTS] = *feature;
        }
        rotated[CENTER_SLOT] = self.slots[CENTER_SLOT];
        self.slots = rotated;
    }
}
