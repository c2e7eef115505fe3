//! Player codec.

use super::counter::{decode_counters, encode_counters};
use super::pile::{decode_pile, encode_pile};
use super::records::PlayerRecord;
use crate::core::player::Player;
use crate::core::state::GameState;
use crate::piles::PileRef;
use crate::remote::{Command, Transport};

/// Encode a player. Empty piles are left out of the record entirely.
#[must_use]
pub fn encode_player(state: &GameState, player: &Player) -> PlayerRecord {
    PlayerRecord {
        player_id: player.id(),
        name: player.name().to_string(),
        counters: encode_counters(&player.counters),
        hand: encode_pile(state, &player.hand),
        piles: player
            .piles
            .iter()
            .filter(|p| !p.is_empty())
            .map(|p| (p.name().to_string(), encode_pile(state, p)))
            .collect(),
    }
}

/// Apply a player record to the connected player with the same id.
///
/// Returns false if no such player is connected (they may have left since
/// the save). A hand belonging to someone else is sent to that player as a
/// single `Command::DecodeHand`; piles the live player no longer has are
/// skipped.
pub fn decode_player(
    state: &mut GameState,
    transport: &mut dyn Transport,
    record: &PlayerRecord,
) -> bool {
    let id = record.player_id;
    let Some(player) = state.player_mut(id) else {
        log::debug!("skip record for disconnected {}", id);
        return false;
    };

    decode_counters(record.counters.as_ref(), &mut player.counters);

    if !record.hand.is_empty() {
        if id != state.local_player() {
            transport.send(
                id,
                Command::DecodeHand {
                    player: id,
                    cards: record.hand.clone(),
                },
            );
        } else {
            decode_pile(state, transport, &record.hand, &PileRef::Hand(id), id);
        }
    }

    for (name, cards) in &record.piles {
        if !state.player(id).is_some_and(|p| p.has_pile(name)) {
            log::debug!("skip unknown pile {} of {}", name, id);
            continue;
        }
        decode_pile(state, transport, cards, &PileRef::Player(id, name.clone()), id);
    }

    true
}
