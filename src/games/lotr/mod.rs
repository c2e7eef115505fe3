//! Lord of the Rings: The Card Game table.
//!
//! The layout the game's scripts expect:
//! - Shared encounter, quest and special decks with their discard piles,
//!   the victory display and a trash pile that is never saved
//! - Per-player library, discard pile and sideboard, plus a threat counter
//! - Six deck sections, matching the card types a player deck is built from

mod table;

pub use table::{LotrTable, LotrTableBuilder, DECK_SECTIONS, GAME_ID, TITLE};
