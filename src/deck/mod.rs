//! Deck-list files.
//!
//! A deck export walks a player's piles, buckets each card into the section
//! named by its type label and writes the per-section `(name, model)` counts
//! as an `.o8d` XML document. Cards whose type is not one of the configured
//! sections are left out. `DeckList` reads such a document back.

pub mod sections;
pub mod export;
pub mod import;

pub use sections::{classify_section, DeckSections};
pub use export::{export_deck, render_deck};
pub use import::{DeckCard, DeckList, DeckListSection};
