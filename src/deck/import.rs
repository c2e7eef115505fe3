//! `.o8d` deck import.

use roxmltree::{Document, Node};

use crate::core::error::{PersistError, Result};

/// One `<card>` line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckCard {
    pub qty: u32,
    pub model: String,
    pub name: String,
}

/// One `<section>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckListSection {
    pub name: String,
    pub shared: bool,
    pub cards: Vec<DeckCard>,
}

/// A parsed deck document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckList {
    pub game: String,
    pub sections: Vec<DeckListSection>,
}

impl DeckList {
    /// Parse a deck document written for `game_id`.
    pub fn parse(xml: &str, game_id: &str) -> Result<Self> {
        let doc = Document::parse(xml)?;
        let root = doc.root_element();
        if root.tag_name().name() != "deck" {
            return Err(PersistError::Deck(format!(
                "root element is <{}>, expected <deck>",
                root.tag_name().name()
            )));
        }

        let game = root.attribute("game").unwrap_or_default();
        if game != game_id {
            return Err(PersistError::GameMismatch {
                expected: game_id.to_string(),
                found: game.to_string(),
            });
        }

        let sections = elements(root, "section")
            .map(parse_section)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            game: game.to_string(),
            sections,
        })
    }

    /// Look up a section by name.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&DeckListSection> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Total number of cards across all sections.
    #[must_use]
    pub fn card_count(&self) -> u32 {
        self.sections
            .iter()
            .flat_map(|s| &s.cards)
            .map(|c| c.qty)
            .sum()
    }
}

fn elements<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| child.is_element() && child.tag_name().name() == tag)
}

fn parse_section(node: Node) -> Result<DeckListSection> {
    let name = node
        .attribute("name")
        .ok_or_else(|| PersistError::Deck("section without a name".to_string()))?;
    let shared = node
        .attribute("shared")
        .is_some_and(|s| s.eq_ignore_ascii_case("true"));

    let cards = elements(node, "card")
        .map(|card| -> Result<DeckCard> {
            let qty = card.attribute("qty").unwrap_or_default();
            let qty = qty.parse::<u32>().map_err(|_| {
                PersistError::Deck(format!("bad quantity {:?} in section {}", qty, name))
            })?;
            let model = card
                .attribute("id")
                .ok_or_else(|| PersistError::Deck(format!("card without an id in section {}", name)))?;
            Ok(DeckCard {
                qty,
                model: model.to_string(),
                name: card.text().unwrap_or_default().to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(DeckListSection {
        name: name.to_string(),
        shared,
        cards,
    })
}
