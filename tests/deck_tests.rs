//! Deck export scenarios.

use std::fs;

use proptest::prelude::*;

use table_state::deck::{export_deck, render_deck, DeckList, DeckSections};
use table_state::games::lotr::{LotrTable, DECK_SECTIONS, GAME_ID};
use table_state::{CardDefinition, CardRegistry, Destination, GameState, PileRef, PlayerId};

const ME: PlayerId = PlayerId::new(1);

fn registry() -> CardRegistry {
    CardRegistry::new()
        .with_card(CardDefinition::new("101", "Aragorn").with_type("Hero"))
        .with_card(CardDefinition::new("050", "Gandalf").with_type("Hero"))
        .with_card(CardDefinition::new("060", "Gandalf").with_type("Ally"))
        .with_card(CardDefinition::new("070", "Steward of Gondor").with_type("Attachment"))
        .with_card(CardDefinition::new("080", "A Test of Will").with_type("Event"))
        .with_card(CardDefinition::new("300", "Hill Troll").with_type("Enemy"))
}

#[test]
fn test_hero_section_sorted_by_name() {
    let mut sections = DeckSections::new(&DECK_SECTIONS);
    for model in ["101", "050", "101"] {
        sections.add(registry().get(model).unwrap());
    }

    let xml = render_deck(GAME_ID, &sections, false);
    let gandalf = xml.find(r#"<card qty="1" id="050">Gandalf</card>"#).unwrap();
    let aragorn = xml.find(r#"<card qty="2" id="101">Aragorn</card>"#).unwrap();
    assert!(aragorn < gandalf);
}

#[test]
fn test_export_player_piles() {
    let dir = tempfile::tempdir().unwrap();
    let table = LotrTable::builder().build();
    let mut state = table.seat(registry(), ME, &[(ME, "Frodo")]);

    let library = Destination::Pile(PileRef::Player(ME, "Library".into()));
    let sideboard = Destination::Pile(PileRef::Player(ME, "Sideboard".into()));
    for model in ["101", "060", "060", "070", "080", "300"] {
        state.create_card(model, &library).unwrap();
    }
    state.create_card("080", &sideboard).unwrap();

    let player = state.player(ME).unwrap();
    let path = export_deck(
        &state,
        table.config(),
        &dir.path().join("lotr-lcg-deck-saved-test.o8d"),
        &player.piles,
        false,
    )
    .unwrap();

    let deck = DeckList::parse(&fs::read_to_string(&path).unwrap(), GAME_ID).unwrap();
    let names: Vec<_> = deck.sections.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Hero", "Ally", "Attachment", "Event"]);
    assert_eq!(deck.section("Ally").unwrap().cards[0].qty, 2);
    assert_eq!(deck.section("Event").unwrap().cards[0].qty, 2);
    assert_eq!(deck.card_count(), 6);
}

#[test]
fn test_export_empty_piles() {
    let dir = tempfile::tempdir().unwrap();
    let table = LotrTable::builder().build();
    let state: GameState = table.seat(registry(), ME, &[(ME, "Frodo")]);

    let path = export_deck(
        &state,
        table.config(),
        &dir.path().join("empty.o8d"),
        &state.player(ME).unwrap().piles,
        true,
    )
    .unwrap();

    let deck = DeckList::parse(&fs::read_to_string(path).unwrap(), GAME_ID).unwrap();
    assert!(deck.sections.is_empty());
}

proptest! {
    #[test]
    fn prop_cards_sorted_within_sections(
        cards in prop::collection::vec(("[A-Za-z][A-Za-z ]{0,11}", "[0-9a-f]{1,6}", prop::sample::select(DECK_SECTIONS.to_vec())), 0..30)
    ) {
        let mut sections = DeckSections::new(&DECK_SECTIONS);
        for (name, model, section) in &cards {
            sections.add(&CardDefinition::new(model.as_str(), name.as_str()).with_type(*section));
        }

        let deck = DeckList::parse(&render_deck(GAME_ID, &sections, false), GAME_ID).unwrap();
        for section in &deck.sections {
            let keys: Vec<_> = section.cards.iter().map(|c| (c.name.clone(), c.model.clone())).collect();
            let mut sorted = keys.clone();
            sorted.sort();
            prop_assert_eq!(keys, sorted);
        }
        prop_assert_eq!(deck.card_count() as usize, cards.len());
    }
}
