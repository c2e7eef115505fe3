//! Remote commands and their wire form.

use serde::{Deserialize, Serialize};

use crate::codec::records::PileRecord;
use crate::core::error::Result;
use crate::core::player::PlayerId;
use crate::piles::PileRef;

/// An operation delegated to the participant owning its target.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Recreate the carried cards in one of the receiver's piles.
    DecodePile { pile: PileRef, cards: PileRecord },
    /// Recreate the carried cards in a player's hand.
    DecodeHand { player: PlayerId, cards: PileRecord },
}

impl Command {
    /// Short operation name, for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Command::DecodePile { .. } => "decode-pile",
            Command::DecodeHand { .. } => "decode-hand",
        }
    }

    /// Number of card records carried.
    #[must_use]
    pub fn card_count(&self) -> usize {
        match self {
            Command::DecodePile { cards, .. } | Command::DecodeHand { cards, .. } => cards.len(),
        }
    }

    /// Encode for the wire.
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a command received from the wire.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
