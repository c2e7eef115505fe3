//! Table snapshot codec.

use super::card::{decode_table_card, encode_card};
use super::counter::{decode_counters, encode_counters};
use super::pile::{decode_pile, encode_pile};
use super::player::{decode_player, encode_player};
use super::records::TableSnapshot;
use crate::core::config::TableConfig;
use crate::core::state::GameState;
use crate::piles::PileRef;
use crate::remote::Transport;

/// Capture the whole table.
///
/// The trash pile is never persisted and empty shared piles are left out.
/// Players are written in ascending id order so the same table always
/// produces the same document.
#[must_use]
pub fn encode_snapshot(state: &GameState, config: &TableConfig) -> TableSnapshot {
    let mut players: Vec<_> = state.players().iter().collect();
    players.sort_by_key(|p| p.id());

    TableSnapshot {
        table: state
            .table_cards()
            .iter()
            .filter_map(|&entity| state.card(entity))
            .map(encode_card)
            .collect(),
        shared: state
            .shared
            .piles
            .iter()
            .filter(|p| p.name() != config.trash_pile && !p.is_empty())
            .map(|p| (p.name().to_string(), encode_pile(state, p)))
            .collect(),
        counters: encode_counters(&state.shared.counters),
        players: players
            .into_iter()
            .map(|p| encode_player(state, p))
            .collect(),
    }
}

/// Merge a snapshot into the live table.
///
/// Order: loose table cards, shared counters, shared piles (names that
/// still exist), then players. Nothing already on the table is removed and
/// nothing is rolled back if a later step creates fewer cards than
/// recorded.
pub fn decode_snapshot(
    state: &mut GameState,
    transport: &mut dyn Transport,
    snapshot: &TableSnapshot,
) {
    for record in &snapshot.table {
        decode_table_card(state, record);
    }

    decode_counters(snapshot.counters.as_ref(), &mut state.shared.counters);

    let local = state.local_player();
    for (name, cards) in &snapshot.shared {
        if !state.shared.has_pile(name) {
            log::debug!("skip unknown shared pile {}", name);
            continue;
        }
        decode_pile(state, transport, cards, &PileRef::Shared(name.clone()), local);
    }

    for record in &snapshot.players {
        decode_player(state, transport, record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, CardRegistry};
    use crate::codec::records::CardRecord;
    use crate::core::config::{CounterConfig, PileConfig};
    use crate::core::player::PlayerId;
    use crate::core::state::Destination;
    use crate::remote::Outbox;

    const ME: PlayerId = PlayerId::new(1);

    fn config() -> TableConfig {
        TableConfig::new("g", "T")
            .with_shared_pile(PileConfig::new("Quest"))
            .with_shared_pile(PileConfig::new("Staging"))
            .with_shared_pile(PileConfig::new("Trash"))
            .with_shared_counter(CounterConfig::new("Round", 1))
            .with_player_pile(PileConfig::new("Library"))
    }

    fn state(seats: &[(PlayerId, &str)]) -> GameState {
        let registry = CardRegistry::new().with_card(CardDefinition::new("a", "Card A"));
        GameState::from_config(&config(), registry, ME, seats)
    }

    #[test]
    fn test_trash_excluded() {
        let mut state = state(&[(ME, "Frodo")]);
        let trash = Destination::Pile(PileRef::Shared("Trash".into()));
        for _ in 0..5 {
            state.create_card("a", &trash).unwrap();
        }

        let snapshot = encode_snapshot(&state, &config());
        assert!(snapshot.shared.is_empty());
    }

    #[test]
    fn test_trashed_card_leaves_snapshot() {
        let mut state = state(&[(ME, "Frodo")]);
        let quest = Destination::Pile(PileRef::Shared("Quest".into()));
        let kept = state.create_card("a", &quest).unwrap();
        let trashed = state.create_card("a", &quest).unwrap();
        let loose = state.create_card("a", &Destination::Table { x: 1, y: 1 }).unwrap();
        assert_eq!(encode_snapshot(&state, &config()).card_count(), 3);

        assert!(state.move_to_trash(trashed, &config()));
        assert!(state.move_to_trash(loose, &config()));

        let snapshot = encode_snapshot(&state, &config());
        assert_eq!(snapshot.card_count(), 1);
        assert!(snapshot.table.is_empty());
        assert_eq!(snapshot.shared["Quest"].len(), 1);
        assert!(state.card(kept).is_some());
    }

    #[test]
    fn test_empty_shared_piles_omitted() {
        let mut state = state(&[(ME, "Frodo")]);
        state
            .create_card("a", &Destination::Pile(PileRef::Shared("Quest".into())))
            .unwrap();

        let snapshot = encode_snapshot(&state, &config());
        assert_eq!(snapshot.shared.keys().collect::<Vec<_>>(), vec!["Quest"]);
    }

    #[test]
    fn test_players_sorted_by_id() {
        let state = state(&[(PlayerId::new(3), "C"), (ME, "A"), (PlayerId::new(2), "B")]);

        let ids: Vec<_> = encode_snapshot(&state, &config())
            .players
            .iter()
            .map(|p| p.player_id.raw())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_decode_unknown_shared_pile_skipped() {
        let mut state = state(&[(ME, "Frodo")]);
        let mut outbox = Outbox::new();
        let mut snapshot = TableSnapshot::default();
        snapshot.shared.insert("Foo".into(), vec![CardRecord::new("a")]);
        snapshot.shared.insert("Quest".into(), vec![CardRecord::new("a")]);

        decode_snapshot(&mut state, &mut outbox, &snapshot);

        assert_eq!(state.card_count(), 1);
        assert!(!state.shared.has_pile("Foo"));
    }

    #[test]
    fn test_decode_shared_counters() {
        let mut state = state(&[(ME, "Frodo")]);
        let mut outbox = Outbox::new();
        let mut snapshot = TableSnapshot::default();
        snapshot.counters = Some([("Round".to_string(), 4)].into());

        decode_snapshot(&mut state, &mut outbox, &snapshot);

        assert_eq!(state.shared.counters.get("Round"), Some(4));
    }

    #[test]
    fn test_decode_merges_without_clearing() {
        let mut state = state(&[(ME, "Frodo")]);
        let mut outbox = Outbox::new();
        state.create_card("a", &Destination::Table { x: 1, y: 1 }).unwrap();

        let mut snapshot = TableSnapshot::default();
        snapshot.table.push(CardRecord::new("a"));

        decode_snapshot(&mut state, &mut outbox, &snapshot);
        assert_eq!(state.table_cards().len(), 2);
    }
}
