//! Per-section card tallies.

use std::collections::BTreeMap;

use crate::cards::CardDefinition;
use crate::core::state::GameState;
use crate::piles::Pile;

/// Card key inside a section: `(name, model)`. Ordering on this tuple is
/// the output order.
pub type CardKey = (String, String);

/// Section a card belongs to, if its type label is one of `sections`.
#[must_use]
pub fn classify_section<'a>(sections: &'a [String], card: &CardDefinition) -> Option<&'a str> {
    let card_type = card.card_type()?;
    sections
        .iter()
        .find(|s| s.as_str() == card_type)
        .map(String::as_str)
}

/// Fixed, ordered set of sections, each counting cards by `(name, model)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeckSections {
    names: Vec<String>,
    counts: Vec<BTreeMap<CardKey, u32>>,
}

impl DeckSections {
    /// Create empty sections in the given order.
    pub fn new<S: AsRef<str>>(names: &[S]) -> Self {
        Self {
            names: names.iter().map(|s| s.as_ref().to_string()).collect(),
            counts: vec![BTreeMap::new(); names.len()],
        }
    }

    /// Count one copy of `card`. Returns the section it went into, or `None`
    /// if the card belongs to no section.
    pub fn add(&mut self, card: &CardDefinition) -> Option<&str> {
        let index = {
            let section = classify_section(&self.names, card)?;
            self.names.iter().position(|n| n == section)?
        };
        *self.counts[index]
            .entry((card.name.clone(), card.model.clone()))
            .or_default() += 1;
        Some(&self.names[index])
    }

    /// Count every classifiable card of `piles`.
    pub fn tally<'p>(&mut self, state: &GameState, piles: impl IntoIterator<Item = &'p Pile>) {
        for pile in piles {
            for &entity in pile.cards() {
                let Some(card) = state.definition(entity) else {
                    continue;
                };
                if self.add(card).is_none() {
                    log::debug!("{} ({}) fits no deck section", card.name, card.model);
                }
            }
        }
    }

    /// Counts of one section.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&BTreeMap<CardKey, u32>> {
        let index = self.names.iter().position(|n| n == name)?;
        Some(&self.counts[index])
    }

    /// Sections in their fixed order, empty ones included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<CardKey, u32>)> {
        self.names.iter().map(String::as_str).zip(self.counts.iter())
    }

    /// Number of cards counted in one section.
    #[must_use]
    pub fn total(&self, name: &str) -> u32 {
        self.section(name).map_or(0, |s| s.values().sum())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(BTreeMap::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Vec<String> {
        vec!["Hero".to_string(), "Ally".to_string()]
    }

    #[test]
    fn test_classify_section() {
        let names = names();
        let hero = CardDefinition::new("101", "Aragorn").with_type("Hero");
        let quest = CardDefinition::new("900", "Journey").with_type("Quest");
        let untyped = CardDefinition::new("000", "Token");

        assert_eq!(classify_section(&names, &hero), Some("Hero"));
        assert_eq!(classify_section(&names, &quest), None);
        assert_eq!(classify_section(&names, &untyped), None);
    }

    #[test]
    fn test_add_counts_by_name_and_model() {
        let mut sections = DeckSections::new(&names());
        let aragorn = CardDefinition::new("101", "Aragorn").with_type("Hero");
        let reprint = CardDefinition::new("201", "Aragorn").with_type("Hero");

        assert_eq!(sections.add(&aragorn), Some("Hero"));
        sections.add(&aragorn);
        sections.add(&reprint);

        let hero = sections.section("Hero").unwrap();
        assert_eq!(hero[&("Aragorn".to_string(), "101".to_string())], 2);
        assert_eq!(hero[&("Aragorn".to_string(), "201".to_string())], 1);
        assert_eq!(sections.total("Hero"), 3);
        assert_eq!(sections.total("Ally"), 0);
    }

    #[test]
    fn test_unclassified_not_counted() {
        let mut sections = DeckSections::new(&names());
        assert!(sections.add(&CardDefinition::new("1", "Quest").with_type("Quest")).is_none());
        assert!(sections.is_empty());
    }

    #[test]
    fn test_iter_keeps_fixed_order() {
        let sections = DeckSections::new(&["Sideboard", "Hero", "Ally"]);
        let order: Vec<_> = sections.iter().map(|(name, _)| name).collect();
        assert_eq!(order, vec!["Sideboard", "Hero", "Ally"]);
    }
}
