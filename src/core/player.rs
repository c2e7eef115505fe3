//! Player identification and the live player entity.
//!
//! ## PlayerId
//!
//! The id the host assigns to a connected participant. It is the identity
//! key of a `PlayerRecord`, so a snapshot can only be reapplied to a player
//! who holds the same id when the table is loaded.
//!
//! ## Player
//!
//! A connected participant: their hand, their named piles and their
//! counters. Cards themselves live in the `GameState` arena; piles hold
//! entity ids.

use serde::{Deserialize, Serialize};

use crate::piles::{Counters, Pile};

/// Player identifier supporting up to 255 players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw id.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A connected player and everything they own on the table.
#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    /// The player's hand.
    pub hand: Pile,
    /// Named piles (library, discard, ...), in configuration order.
    pub piles: Vec<Pile>,
    /// Player counters (threat, ...).
    pub counters: Counters,
}

impl Player {
    /// Create a player with an empty hand and no piles or counters.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Pile::owned("Hand", id),
            piles: Vec::new(),
            counters: Counters::new(),
        }
    }

    /// Add a pile (builder pattern).
    #[must_use]
    pub fn with_pile(mut self, pile: Pile) -> Self {
        self.piles.push(pile);
        self
    }

    /// Replace the counter collection (builder pattern).
    #[must_use]
    pub fn with_counters(mut self, counters: Counters) -> Self {
        self.counters = counters;
        self
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a named pile.
    #[must_use]
    pub fn pile(&self, name: &str) -> Option<&Pile> {
        self.piles.iter().find(|p| p.name() == name)
    }

    /// Look up a named pile mutably.
    pub fn pile_mut(&mut self, name: &str) -> Option<&mut Pile> {
        self.piles.iter_mut().find(|p| p.name() == name)
    }

    /// Check if the player still has a pile with this name.
    #[must_use]
    pub fn has_pile(&self, name: &str) -> bool {
        self.pile(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p1 = PlayerId::new(1);
        assert_eq!(p1.raw(), 1);
        assert_eq!(format!("{}", p1), "Player 1");
        assert!(PlayerId::new(0) < p1);
    }

    #[test]
    fn test_player_piles() {
        let id = PlayerId::new(2);
        let player = Player::new(id, "Bilbo")
            .with_pile(Pile::owned("Library", id))
            .with_pile(Pile::owned("Discard Pile", id));

        assert_eq!(player.name(), "Bilbo");
        assert!(player.has_pile("Library"));
        assert!(!player.has_pile("Foo"));
        assert_eq!(player.hand.owner(), Some(id));
    }

    #[test]
    fn test_player_id_serialization() {
        let json = serde_json::to_string(&PlayerId::new(3)).unwrap();
        assert_eq!(json, "3");
        let back: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PlayerId::new(3));
    }
}
