//! Piles and counters.
//!
//! Piles are **configured**, not hardcoded: a game lists its shared piles
//! and per-player piles in `TableConfig`. A pile is an ordered list of card
//! entities plus an insertion contract that decides where new cards land.
//!
//! ## Key Types
//!
//! - `Pile`: Named, ordered card collection, shared or owned by a player
//! - `PilePosition`: Where inserted cards land
//! - `PileRef`: Lookup key that re-resolves a pile in a live `GameState`
//! - `Counters`: Named integer trackers on a player or the shared area

pub mod pile;
pub mod counters;

pub use pile::{Pile, PilePosition, PileRef};
pub use counters::Counters;
