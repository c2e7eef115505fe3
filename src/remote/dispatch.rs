//! Receiving side of delegated commands.

use super::command::Command;
use super::transport::Transport;
use crate::codec::pile::{decode_pile, PileDecode};
use crate::core::state::GameState;
use crate::piles::PileRef;

/// Run a command received from another participant.
///
/// The carried records are decoded under the receiver's own authority, so
/// a well-addressed command never bounces back through `transport`.
pub fn apply(state: &mut GameState, transport: &mut dyn Transport, command: &Command) -> PileDecode {
    let local = state.local_player();
    log::debug!(
        "apply {} ({} cards) as {}",
        command.name(),
        command.card_count(),
        local
    );

    match command {
        Command::DecodePile { pile, cards } => decode_pile(state, transport, cards, pile, local),
        Command::DecodeHand { player, cards } => {
            decode_pile(state, transport, cards, &PileRef::Hand(*player), local)
        }
    }
}
