//! Pile codec and the authority check.
//!
//! A participant may recreate cards in a pile directly when the pile is
//! shared, when it is acting for itself, or when it controls the pile.
//! Anything else belongs to another participant's process: the whole
//! record goes to that participant as one `Command::DecodePile` and nothing
//! is created locally.

use super::card::{decode_card, encode_card};
use super::records::PileRecord;
use crate::core::player::PlayerId;
use crate::core::state::{Destination, GameState};
use crate::piles::{Pile, PileRef};
use crate::remote::{Command, Transport};

/// What happened to a pile record on load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PileDecode {
    /// Decoded locally; carries the number of cards actually created.
    Created(usize),
    /// Handed to another participant.
    Delegated(PlayerId),
    /// The pile no longer exists; the record was skipped.
    Missing,
}

/// Encode every card of a pile, bottom to top.
#[must_use]
pub fn encode_pile(state: &GameState, pile: &Pile) -> PileRecord {
    pile.cards()
        .iter()
        .filter_map(|&entity| state.card(entity))
        .map(encode_card)
        .collect()
}

/// Recreate a pile record into a live pile on behalf of `acting`.
///
/// Cards go through the pile's own insertion contract, in record order.
/// Records whose model cannot be created are skipped.
pub fn decode_pile(
    state: &mut GameState,
    transport: &mut dyn Transport,
    record: &PileRecord,
    pile_ref: &PileRef,
    acting: PlayerId,
) -> PileDecode {
    if record.is_empty() {
        return PileDecode::Created(0);
    }

    let Some(pile) = state.pile(pile_ref) else {
        log::debug!("skip missing pile {}", pile_ref);
        return PileDecode::Missing;
    };

    let local = state.local_player();
    if !pile.is_shared() && acting != local && !pile.is_controlled_by(local) {
        transport.send(
            acting,
            Command::DecodePile {
                pile: pile_ref.clone(),
                cards: record.clone(),
            },
        );
        return PileDecode::Delegated(acting);
    }

    let destination = Destination::Pile(pile_ref.clone());
    let created = record
        .iter()
        .filter_map(|card| decode_card(state, card, &destination))
        .count();
    if created < record.len() {
        log::debug!(
            "created {} of {} cards in {}",
            created,
            record.len(),
            pile_ref
        );
    }
    PileDecode::Created(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, CardRegistry};
    use crate::codec::records::CardRecord;
    use crate::core::config::{PileConfig, TableConfig};
    use crate::remote::Outbox;

    const ME: PlayerId = PlayerId::new(1);
    const OTHER: PlayerId = PlayerId::new(2);

    fn state() -> GameState {
        let registry = CardRegistry::new()
            .with_card(CardDefinition::new("a", "Card A"))
            .with_card(CardDefinition::new("b", "Card B"));
        let config = TableConfig::new("g", "T")
            .with_shared_pile(PileConfig::new("Quest"))
            .with_player_pile(PileConfig::new("Library"));
        GameState::from_config(&config, registry, ME, &[(ME, "Frodo"), (OTHER, "Sam")])
    }

    fn record() -> PileRecord {
        vec![CardRecord::new("a"), CardRecord::new("b"), CardRecord::new("a")]
    }

    #[test]
    fn test_encode_pile_order() {
        let mut state = state();
        let quest = PileRef::Shared("Quest".into());
        let mut outbox = Outbox::new();
        decode_pile(&mut state, &mut outbox, &record(), &quest, ME);

        let encoded = encode_pile(&state, state.pile(&quest).unwrap());
        let models: Vec<_> = encoded.iter().map(|c| c.model.as_str()).collect();
        assert_eq!(models, vec!["a", "b", "a"]);
    }

    #[test]
    fn test_decode_shared_pile_locally() {
        let mut state = state();
        let mut outbox = Outbox::new();
        let quest = PileRef::Shared("Quest".into());

        // Shared piles never delegate, whoever is acting.
        let result = decode_pile(&mut state, &mut outbox, &record(), &quest, OTHER);

        assert_eq!(result, PileDecode::Created(3));
        assert_eq!(state.pile(&quest).unwrap().len(), 3);
        assert!(outbox.is_empty());
    }

    #[test]
    fn test_decode_own_pile_locally() {
        let mut state = state();
        let mut outbox = Outbox::new();
        let library = PileRef::Player(ME, "Library".into());

        let result = decode_pile(&mut state, &mut outbox, &record(), &library, ME);

        assert_eq!(result, PileDecode::Created(3));
        assert!(outbox.is_empty());
    }

    #[test]
    fn test_decode_foreign_pile_delegates() {
        let mut state = state();
        let mut outbox = Outbox::new();
        let library = PileRef::Player(OTHER, "Library".into());

        let result = decode_pile(&mut state, &mut outbox, &record(), &library, OTHER);

        assert_eq!(result, PileDecode::Delegated(OTHER));
        assert_eq!(state.card_count(), 0);
        assert_eq!(
            outbox.queued(),
            &[(
                OTHER,
                Command::DecodePile {
                    pile: library,
                    cards: record()
                }
            )]
        );
    }

    #[test]
    fn test_decode_foreign_pile_controlled_locally() {
        let mut state = state();
        let mut outbox = Outbox::new();
        let library = PileRef::Player(OTHER, "Library".into());
        state.pile_mut(&library).unwrap().set_controller(Some(ME));

        let result = decode_pile(&mut state, &mut outbox, &record(), &library, OTHER);

        assert_eq!(result, PileDecode::Created(3));
        assert!(outbox.is_empty());
    }

    #[test]
    fn test_decode_missing_pile() {
        let mut state = state();
        let mut outbox = Outbox::new();
        let foo = PileRef::Player(ME, "Foo".into());

        assert_eq!(
            decode_pile(&mut state, &mut outbox, &record(), &foo, ME),
            PileDecode::Missing
        );
        assert!(state.player(ME).unwrap().pile("Foo").is_none());
        assert_eq!(state.card_count(), 0);
    }

    #[test]
    fn test_decode_skips_unknown_models() {
        let mut state = state();
        let mut outbox = Outbox::new();
        let quest = PileRef::Shared("Quest".into());
        let record = vec![CardRecord::new("a"), CardRecord::new("zzz")];

        assert_eq!(
            decode_pile(&mut state, &mut outbox, &record, &quest, ME),
            PileDecode::Created(1)
        );
    }

    #[test]
    fn test_decode_empty_record() {
        let mut state = state();
        let mut outbox = Outbox::new();
        let library = PileRef::Player(OTHER, "Library".into());

        assert_eq!(
            decode_pile(&mut state, &mut outbox, &Vec::new(), &library, OTHER),
            PileDecode::Created(0)
        );
        assert!(outbox.is_empty());
    }
}
