//! # table-state
//!
//! Save, load and deck export for a virtual tabletop card game client.
//!
//! ## Design Principles
//!
//! 1. **Explicit Context**: Every codec works against a `GameState` passed
//!    in by the caller. Nothing reads or writes ambient global state.
//!
//! 2. **Merge, Don't Replace**: Loading a snapshot recreates its cards on
//!    top of the live table. Records that no longer resolve (unknown model,
//!    pile or player) are skipped, not errors.
//!
//! 3. **Configuration Over Convention**: Games describe their piles,
//!    counters, deck sections and file conventions via `TableConfig`.
//!
//! ## Architecture
//!
//! - **Authority**: A participant only mutates what it owns or controls.
//!   Anything else is packed into a `Command` and sent to its owner.
//!
//! - **Records**: Plain serde values (`CardRecord`, `PlayerRecord`,
//!   `TableSnapshot`) that refer to live state only by model id, player id
//!   and pile name.
//!
//! ## Modules
//!
//! - `core`: Entity ids, players, configuration, live state, errors
//! - `cards`: Card definitions, instances, orientation, registry
//! - `piles`: Piles and counters
//! - `codec`: Records and the card/counter/pile/player/snapshot codecs
//! - `remote`: Delegated commands and the transport seam
//! - `deck`: `.o8d` deck export and import
//! - `session`: Host-confirmed, lock-guarded save and load
//! - `games`: Game presets

pub mod core;
pub mod cards;
pub mod piles;
pub mod codec;
pub mod remote;
pub mod deck;
pub mod session;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    EntityId, Player, PlayerId,
    CounterConfig, PileConfig, TableConfig,
    Destination, GameState, SharedArea,
    PersistError, Result,
};

pub use crate::cards::{CardDefinition, CardInstance, CardRegistry, MarkerKey, Orientation};

pub use crate::piles::{Counters, Pile, PilePosition, PileRef};

pub use crate::codec::{
    CardRecord, CounterMap, MarkerRecord, PileRecord, PlayerRecord, TableSnapshot,
    PileDecode,
    decode_snapshot, encode_snapshot,
};

pub use crate::remote::{Command, Outbox, Transport};

pub use crate::deck::{DeckList, DeckSections};

pub use crate::session::{AbortReason, Host, Outcome, ScriptedHost, SharedLock, TableLock, TableSession};
