//! Codecs between live entities and persisted records.
//!
//! Each codec is a pair of plain functions over an explicit `GameState`:
//! `encode_*` projects live entities into records and never mutates;
//! `decode_*` recreates entities from records, skipping whatever no longer
//! resolves (unknown models, pile names or players) and delegating work on
//! entities this participant does not control.
//!
//! ## Layers (leaves first)
//!
//! - `card`: one card <-> `CardRecord`
//! - `counter`: counter collection <-> `CounterMap`
//! - `pile`: pile <-> `PileRecord`, with the authority check
//! - `player`: player <-> `PlayerRecord`
//! - `snapshot`: the whole table <-> `TableSnapshot`

pub mod records;
pub mod card;
pub mod counter;
pub mod pile;
pub mod player;
pub mod snapshot;

pub use records::{CardRecord, CounterMap, MarkerRecord, PileRecord, PlayerRecord, TableSnapshot};
pub use card::{decode_card, decode_table_card, encode_card};
pub use counter::{decode_counters, encode_counters};
pub use pile::{decode_pile, encode_pile, PileDecode};
pub use player::{decode_player, encode_player};
pub use snapshot::{decode_snapshot, encode_snapshot};
