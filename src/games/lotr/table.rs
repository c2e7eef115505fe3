//! LotR table preset.

use crate::cards::CardRegistry;
use crate::core::{CounterConfig, GameState, PileConfig, PlayerId, TableConfig};

/// Game id written into deck files.
pub const GAME_ID: &str = "a21af4e8-be4b-4cda-a6b6-534f9717391f";

/// Game title; also the decks sub-folder.
pub const TITLE: &str = "Lord of the Rings - The Card Game";

/// Deck sections, in output order.
pub const DECK_SECTIONS: [&str; 6] = ["Hero", "Ally", "Attachment", "Event", "Side Quest", "Sideboard"];

const SHARED_PILES: [&str; 9] = [
    "Encounter",
    "Encounter Discard Pile",
    "Quest",
    "Quest Discard Pile",
    "Special",
    "Special Discard Pile",
    "Setup",
    "Victory Display",
    "Trash",
];

const PLAYER_PILES: [&str; 3] = ["Library", "Discard Pile", "Sideboard"];

/// A configured LotR table.
#[derive(Clone, Debug)]
pub struct LotrTable {
    config: TableConfig,
}

impl LotrTable {
    pub fn builder() -> LotrTableBuilder {
        LotrTableBuilder::new()
    }

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Seat `players` at a fresh table as seen by `local`.
    #[must_use]
    pub fn seat(&self, registry: CardRegistry, local: PlayerId, players: &[(PlayerId, &str)]) -> GameState {
        GameState::from_config(&self.config, registry, local, players)
    }

    pub fn into_config(self) -> TableConfig {
        self.config
    }
}

/// Builder for a `LotrTable`.
pub struct LotrTableBuilder {
    starting_threat: i64,
    encounter_on_bottom: bool,
}

impl Default for LotrTableBuilder {
    fn default() -> Self {
        Self {
            starting_threat: 0,
            encounter_on_bottom: false,
        }
    }
}

impl LotrTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Threat each player's counter starts at.
    pub fn starting_threat(mut self, threat: i64) -> Self {
        self.starting_threat = threat;
        self
    }

    /// Recreate encounter cards underneath the existing ones.
    pub fn encounter_on_bottom(mut self, bottom: bool) -> Self {
        self.encounter_on_bottom = bottom;
        self
    }

    pub fn build(self) -> LotrTable {
        let mut config = TableConfig::new(GAME_ID, TITLE)
            .with_folders("GameDatabase", "Decks", "OCTGN")
            .with_trash_pile("Trash")
            .with_deck_prefix("lotr-lcg-deck")
            .with_player_counter(CounterConfig::new("Threat", self.starting_threat));

        for name in SHARED_PILES {
            let pile = PileConfig::new(name);
            let pile = if self.encounter_on_bottom && name == "Encounter" {
                pile.stacked_bottom()
            } else {
                pile
            };
            config = config.with_shared_pile(pile);
        }
        for name in PLAYER_PILES {
            config = config.with_player_pile(PileConfig::new(name));
        }
        for section in DECK_SECTIONS {
            config = config.with_deck_section(section);
        }

        LotrTable { config }
    }
}
