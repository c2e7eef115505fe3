//! Persisted record shapes.
//!
//! Records are plain values: they reference live state only through lookup
//! keys (model id, player id, pile name). Missing keys read back as their
//! defaults so that older or hand-trimmed files still load.
//!
//! ## JSON shape
//!
//! ```text
//! {
//!   "table":    [CardRecord, ...],
//!   "shared":   { "<pile>": [CardRecord, ...] },
//!   "counters": { "<name>": int } | null,
//!   "players":  [ { "_id", "name", "counters", "hand", "piles" }, ... ]
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::cards::Orientation;
use crate::core::error::Result;
use crate::core::player::PlayerId;

/// Counter values by name. Always wrapped in an `Option`: `None` means the
/// entity has no counters at all, which is different from counters at zero.
pub type CounterMap = BTreeMap<String, i64>;

/// Cards of one pile, bottom to top.
pub type PileRecord = Vec<CardRecord>;

/// One marker on a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerRecord {
    pub name: String,
    pub model: String,
    pub qty: u32,
}

/// One card.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub model: String,

    #[serde(default)]
    pub orientation: Orientation,

    /// Applied on load only when present.
    #[serde(default)]
    pub is_face_up: Option<bool>,

    /// `[x, y]` for loose table cards, `null` otherwise.
    #[serde(default)]
    pub position: Option<(i32, i32)>,

    /// `null` when the card carries no markers.
    #[serde(default)]
    pub markers: Option<Vec<MarkerRecord>>,
}

impl CardRecord {
    /// A bare record: unrotated, face unspecified, no position, no markers.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Self::default()
        }
    }
}

/// One connected player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "_id")]
    pub player_id: PlayerId,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default)]
    pub counters: Option<CounterMap>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub hand: PileRecord,

    /// Non-empty piles only.
    #[serde(default, deserialize_with = "null_as_default")]
    pub piles: BTreeMap<String, PileRecord>,
}

/// The whole table at one point in time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub table: Vec<CardRecord>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub shared: BTreeMap<String, PileRecord>,

    #[serde(default)]
    pub counters: Option<CounterMap>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub players: Vec<PlayerRecord>,
}

impl TableSnapshot {
    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a snapshot document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of card records anywhere in the snapshot.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.table.len()
            + self.shared.values().map(Vec::len).sum::<usize>()
            + self
                .players
                .iter()
                .map(|p| p.hand.len() + p.piles.values().map(Vec::len).sum::<usize>())
                .sum::<usize>()
    }
}

/// Read `null` the same way as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
