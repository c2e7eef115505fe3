//! Table configuration.
//!
//! Games configure the persistence layer at startup by providing:
//! - `PileConfig`: shared piles and per-player piles
//! - `CounterConfig`: shared counters and per-player counters
//! - `TableConfig`: everything above plus the file conventions (game id,
//!   title folder, file prefixes, deck sections)
//!
//! Nothing here is hardcoded to one game; `games::lotr` holds a preset.

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId};
use crate::piles::{Counters, Pile, PilePosition};

/// Configuration for a single pile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileConfig {
    pub name: String,

    /// Where recreated cards are inserted.
    pub position: PilePosition,
}

impl PileConfig {
    /// Create a pile configuration that appends new cards.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: PilePosition::Top,
        }
    }

    /// Insert new cards at the bottom instead.
    #[must_use]
    pub fn stacked_bottom(mut self) -> Self {
        self.position = PilePosition::Bottom;
        self
    }
}

/// Configuration for a named counter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterConfig {
    pub name: String,
    pub initial: i64,
}

impl CounterConfig {
    pub fn new(name: impl Into<String>, initial: i64) -> Self {
        Self {
            name: name.into(),
            initial,
        }
    }
}

/// Complete table configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TableConfig {
    /// Game id written into deck files.
    pub game_id: String,

    /// Human-readable game title; also the decks sub-folder name.
    pub title: String,

    /// Path fragment marking the host's generic database folder.
    pub database_marker: String,

    /// Folder holding saved decks and table states.
    pub decks_folder: String,

    /// Path fragment marking the host's root folder.
    pub root_marker: String,

    /// Shared pile that is never persisted.
    pub trash_pile: String,

    /// Deck sections, in output order.
    pub deck_sections: Vec<String>,

    /// File name prefix for table states.
    pub table_state_prefix: String,

    /// File name prefix for deck exports.
    pub deck_prefix: String,

    /// Host-confirmation choices; index 0 is the affirmative one.
    pub confirm_choices: Vec<String>,

    pub shared_piles: Vec<PileConfig>,
    pub player_piles: Vec<PileConfig>,
    pub shared_counters: Vec<CounterConfig>,
    pub player_counters: Vec<CounterConfig>,
}

impl TableConfig {
    /// Create a configuration with the default file conventions and no
    /// piles, counters or sections.
    pub fn new(game_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            game_id: game_id.into(),
            title: title.into(),
            database_marker: "GameDatabase".to_string(),
            decks_folder: "Decks".to_string(),
            root_marker: "OCTGN".to_string(),
            trash_pile: "Trash".to_string(),
            deck_sections: Vec::new(),
            table_state_prefix: "table-state".to_string(),
            deck_prefix: "deck".to_string(),
            confirm_choices: vec!["I am the Host!".to_string(), "I am not...".to_string()],
            shared_piles: Vec::new(),
            player_piles: Vec::new(),
            shared_counters: Vec::new(),
            player_counters: Vec::new(),
        }
    }

    /// Add a shared pile.
    #[must_use]
    pub fn with_shared_pile(mut self, pile: PileConfig) -> Self {
        self.shared_piles.push(pile);
        self
    }

    /// Add a pile every player gets.
    #[must_use]
    pub fn with_player_pile(mut self, pile: PileConfig) -> Self {
        self.player_piles.push(pile);
        self
    }

    /// Add a shared counter.
    #[must_use]
    pub fn with_shared_counter(mut self, counter: CounterConfig) -> Self {
        self.shared_counters.push(counter);
        self
    }

    /// Add a counter every player gets.
    #[must_use]
    pub fn with_player_counter(mut self, counter: CounterConfig) -> Self {
        self.player_counters.push(counter);
        self
    }

    /// Add a deck section.
    #[must_use]
    pub fn with_deck_section(mut self, name: impl Into<String>) -> Self {
        self.deck_sections.push(name.into());
        self
    }

    /// Set the shared pile excluded from snapshots.
    #[must_use]
    pub fn with_trash_pile(mut self, name: impl Into<String>) -> Self {
        self.trash_pile = name.into();
        self
    }

    /// Set the deck file prefix.
    #[must_use]
    pub fn with_deck_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.deck_prefix = prefix.into();
        self
    }

    /// Set the folder markers used by the default path rewrite.
    #[must_use]
    pub fn with_folders(
        mut self,
        database_marker: impl Into<String>,
        decks_folder: impl Into<String>,
        root_marker: impl Into<String>,
    ) -> Self {
        self.database_marker = database_marker.into();
        self.decks_folder = decks_folder.into();
        self.root_marker = root_marker.into();
        self
    }

    /// Get a shared pile config by name.
    #[must_use]
    pub fn shared_pile(&self, name: &str) -> Option<&PileConfig> {
        self.shared_piles.iter().find(|p| p.name == name)
    }

    /// Build the shared piles described by this configuration.
    #[must_use]
    pub fn build_shared_piles(&self) -> Vec<Pile> {
        self.shared_piles
            .iter()
            .map(|p| Pile::shared(&p.name).with_position(p.position))
            .collect()
    }

    /// Build the shared counters described by this configuration.
    #[must_use]
    pub fn build_shared_counters(&self) -> Counters {
        build_counters(&self.shared_counters)
    }

    /// Build a freshly connected player with the configured piles and counters.
    #[must_use]
    pub fn build_player(&self, id: PlayerId, name: &str) -> Player {
        self.player_piles.iter().fold(
            Player::new(id, name).with_counters(build_counters(&self.player_counters)),
            |player, p| player.with_pile(Pile::owned(&p.name, id).with_position(p.position)),
        )
    }
}

fn build_counters(configs: &[CounterConfig]) -> Counters {
    configs
        .iter()
        .fold(Counters::new(), |acc, c| acc.with_counter(&c.name, c.initial))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TableConfig {
        TableConfig::new("game-1", "Test Game")
            .with_shared_pile(PileConfig::new("Encounter"))
            .with_shared_pile(PileConfig::new("Trash"))
            .with_player_pile(PileConfig::new("Library"))
            .with_player_pile(PileConfig::new("Discard Pile").stacked_bottom())
            .with_shared_counter(CounterConfig::new("Round", 1))
            .with_player_counter(CounterConfig::new("Threat", 25))
            .with_deck_section("Hero")
    }

    #[test]
    fn test_defaults() {
        let config = TableConfig::new("g", "T");
        assert_eq!(config.trash_pile, "Trash");
        assert_eq!(config.database_marker, "GameDatabase");
        assert_eq!(config.confirm_choices.len(), 2);
        assert!(config.deck_sections.is_empty());
    }

    #[test]
    fn test_builder() {
        let config = config();
        assert_eq!(config.shared_piles.len(), 2);
        assert_eq!(config.player_piles.len(), 2);
        assert_eq!(config.deck_sections, vec!["Hero".to_string()]);
        assert!(config.shared_pile("Encounter").is_some());
        assert!(config.shared_pile("Quest").is_none());
    }

    #[test]
    fn test_build_player() {
        let player = config().build_player(PlayerId::new(3), "Sam");

        assert_eq!(player.id(), PlayerId::new(3));
        assert_eq!(player.piles.len(), 2);
        assert_eq!(
            player.pile("Discard Pile").map(|p| p.position()),
            Some(PilePosition::Bottom)
        );
        assert_eq!(player.counters.get("Threat"), Some(25));
        assert_eq!(player.pile("Library").and_then(|p| p.owner()), Some(PlayerId::new(3)));
    }

    #[test]
    fn test_build_shared() {
        let config = config();
        let piles = config.build_shared_piles();
        assert!(piles.iter().all(|p| p.is_shared()));
        assert_eq!(config.build_shared_counters().get("Round"), Some(1));
    }
}
