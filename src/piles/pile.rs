//! Named card piles.
//!
//! A `Pile` tracks card entity ids in order (index 0 is the bottom, the
//! last index is the top). Cards are inserted through the pile's
//! `PilePosition`, so the final order of recreated cards is decided by the
//! pile, not by whoever inserts them.

use serde::{Deserialize, Serialize};

use crate::core::entity::EntityId;
use crate::core::player::PlayerId;

/// Position for inserting a card into a pile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PilePosition {
    /// Add to top of pile (append).
    #[default]
    Top,
    /// Add to bottom of pile.
    Bottom,
    /// Insert at specific index (0 = bottom). Clamped to the pile length.
    Index(usize),
}

/// Lookup key for a live pile.
///
/// Records never hold references into live state; they carry one of these
/// and re-resolve it against the current `GameState`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileRef {
    /// A pile in the shared area, by name.
    Shared(String),
    /// A player's hand.
    Hand(PlayerId),
    /// One of a player's named piles.
    Player(PlayerId, String),
}

impl PileRef {
    /// The player owning the referenced pile, `None` for shared piles.
    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        match self {
            PileRef::Shared(_) => None,
            PileRef::Hand(p) | PileRef::Player(p, _) => Some(*p),
        }
    }
}

impl std::fmt::Display for PileRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PileRef::Shared(name) => write!(f, "shared/{}", name),
            PileRef::Hand(p) => write!(f, "{}/Hand", p),
            PileRef::Player(p, name) => write!(f, "{}/{}", p, name),
        }
    }
}

/// A named, ordered collection of cards.
///
/// Shared piles have no owner and no controller. Player piles start out
/// controlled by their owner; control can be handed to someone else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pile {
    name: String,
    owner: Option<PlayerId>,
    controller: Option<PlayerId>,
    position: PilePosition,
    cards: Vec<EntityId>,
}

impl Pile {
    /// Create a shared pile.
    pub fn shared(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: None,
            controller: None,
            position: PilePosition::Top,
            cards: Vec::new(),
        }
    }

    /// Create a pile owned (and controlled) by a player.
    pub fn owned(name: impl Into<String>, owner: PlayerId) -> Self {
        Self {
            name: name.into(),
            owner: Some(owner),
            controller: Some(owner),
            position: PilePosition::Top,
            cards: Vec::new(),
        }
    }

    /// Set the insertion contract (builder pattern).
    #[must_use]
    pub fn with_position(mut self, position: PilePosition) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    #[must_use]
    pub fn controller(&self) -> Option<PlayerId> {
        self.controller
    }

    /// Hand control of the pile to another player.
    pub fn set_controller(&mut self, controller: Option<PlayerId>) {
        self.controller = controller;
    }

    #[must_use]
    pub fn position(&self) -> PilePosition {
        self.position
    }

    /// Check if this pile belongs to the shared area.
    #[must_use]
    pub fn is_shared(&self) -> bool {
        self.owner.is_none()
    }

    /// Check if `player` currently controls this pile.
    #[must_use]
    pub fn is_controlled_by(&self, player: PlayerId) -> bool {
        self.controller == Some(player)
    }

    /// Cards from bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[EntityId] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Insert a card using the pile's own insertion contract.
    pub fn insert(&mut self, entity: EntityId) {
        self.insert_at(entity, self.position);
    }

    /// Insert a card at an explicit position.
    pub fn insert_at(&mut self, entity: EntityId, position: PilePosition) {
        match position {
            PilePosition::Top => self.cards.push(entity),
            PilePosition::Bottom => self.cards.insert(0, entity),
            PilePosition::Index(i) => {
                let idx = i.min(self.cards.len());
                self.cards.insert(idx, entity);
            }
        }
    }

    /// Remove a card. Returns true if it was in the pile.
    pub fn remove(&mut self, entity: EntityId) -> bool {
        let before = self.cards.len();
        self.cards.retain(|&e| e != entity);
        self.cards.len() != before
    }

    /// Remove every card, returning the removed ids.
    pub fn take_all(&mut self) -> Vec<EntityId> {
        std::mem::take(&mut self.cards)
    }
}
