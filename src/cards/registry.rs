//! Card registry for model lookup.
//!
//! The `CardRegistry` stores every card definition the table can create.
//! It is the resolver behind `GameState::create_card`: a model id missing
//! from the registry cannot be created.

use rustc_hash::FxHashMap;

use super::definition::CardDefinition;

/// Registry of card definitions keyed by model id.
///
/// ## Example
///
/// ```
/// use table_state::cards::{CardDefinition, CardRegistry};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::new("101", "Aragorn").with_type("Hero"));
///
/// assert_eq!(registry.get("101").unwrap().name, "Aragorn");
/// assert!(registry.get("999").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<String, CardDefinition>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same model already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.model) {
            panic!("Card with model {:?} already registered", card.model);
        }
        self.cards.insert(card.model.clone(), card);
    }

    /// Register a card (builder pattern).
    #[must_use]
    pub fn with_card(mut self, card: CardDefinition) -> Self {
        self.register(card);
        self
    }

    /// Get a card definition by model id.
    #[must_use]
    pub fn get(&self, model: &str) -> Option<&CardDefinition> {
        self.cards.get(model)
    }

    /// Check if a model id is registered.
    #[must_use]
    pub fn contains(&self, model: &str) -> bool {
        self.cards.contains_key(model)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
