//! Entity identification for live cards.
//!
//! Every card created on the table or in a pile gets a unique `EntityId`
//! from the owning `GameState`. Ids are process-local: they are never
//! written to a snapshot, because a reloaded card is a new entity.
//!
//! ```
//! use table_state::core::EntityId;
//!
//! let card = EntityId(7);
//! assert_eq!(card.raw(), 7);
//! assert_eq!(card.next(), EntityId(8));
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a live card entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// First id handed out by a fresh state.
    pub const FIRST: EntityId = EntityId(1);

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id allocated after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}
