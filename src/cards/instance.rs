//! Card instances - live card state.
//!
//! `CardInstance` is one physical card on the table or in a pile. It tracks
//! the state a snapshot has to carry: orientation, face, table position and
//! markers.
//!
//! ## Markers
//!
//! A marker is a counter attached to one card, keyed by `(name, model)`.
//! Most cards carry none or a couple, so they live in a `SmallVec` in
//! insertion order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::orientation::Orientation;
use crate::core::entity::EntityId;
use crate::core::player::PlayerId;

/// Key of a marker on a card.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MarkerKey {
    pub name: String,
    pub model: String,
}

impl MarkerKey {
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// A marker and how many of it sit on a card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkerCount {
    pub key: MarkerKey,
    pub qty: u32,
}

/// A live card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique entity ID for this instance.
    pub entity_id: EntityId,

    /// Model id the card was created from.
    pub model: String,

    /// Owner. `None` for cards created in the shared area.
    pub owner: Option<PlayerId>,

    /// Who currently controls it.
    pub controller: Option<PlayerId>,

    pub orientation: Orientation,

    pub face_up: bool,

    /// Table coordinates. Only cards lying loose on the table have one.
    pub position: Option<(i32, i32)>,

    markers: SmallVec<[MarkerCount; 2]>,
}

impl CardInstance {
    /// Create a face-up, unrotated card without markers.
    #[must_use]
    pub fn new(entity_id: EntityId, model: impl Into<String>, owner: Option<PlayerId>) -> Self {
        Self {
            entity_id,
            model: model.into(),
            owner,
            controller: owner,
            orientation: Orientation::Rot0,
            face_up: true,
            position: None,
            markers: SmallVec::new(),
        }
    }

    /// Place the card on the table (builder pattern).
    #[must_use]
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.position = Some((x, y));
        self
    }

    /// Number of a given marker on this card (0 if absent).
    #[must_use]
    pub fn marker(&self, key: &MarkerKey) -> u32 {
        self.markers
            .iter()
            .find(|m| &m.key == key)
            .map_or(0, |m| m.qty)
    }

    /// Set a marker quantity. A quantity of 0 removes the marker.
    pub fn set_marker(&mut self, key: MarkerKey, qty: u32) {
        if qty == 0 {
            self.markers.retain(|m| m.key != key);
            return;
        }
        match self.markers.iter_mut().find(|m| m.key == key) {
            Some(existing) => existing.qty = qty,
            None => self.markers.push(MarkerCount { key, qty }),
        }
    }

    /// Markers in the order they were first placed.
    #[must_use]
    pub fn markers(&self) -> &[MarkerCount] {
        &self.markers
    }

    /// Check if the card carries any marker.
    #[must_use]
    pub fn has_markers(&self) -> bool {
        !self.markers.is_empty()
    }
}
