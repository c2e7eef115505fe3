//! Card definitions - static card data.
//!
//! `CardDefinition` holds what never changes about a card model: its name
//! and its type label. The type label is what the deck exporter uses to
//! pick a section ("Hero", "Ally", ...).
//!
//! Instance-specific data (orientation, markers, position) is stored
//! separately in `CardInstance`.

use serde::{Deserialize, Serialize};

/// Static card definition.
///
/// ## Example
///
/// ```
/// use table_state::cards::CardDefinition;
///
/// let aragorn = CardDefinition::new("51223bd0-ffd1-11df-a976-0801200c9001", "Aragorn")
///     .with_type("Hero");
///
/// assert_eq!(aragorn.card_type(), Some("Hero"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Model id used to create the card.
    pub model: String,

    /// Card name as printed.
    pub name: String,

    /// Type label (game-specific). `None` for cards without one.
    pub card_type: Option<String>,
}

impl CardDefinition {
    /// Create a new card definition without a type.
    #[must_use]
    pub fn new(model: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            name: name.into(),
            card_type: None,
        }
    }

    /// Set the type label (builder pattern).
    #[must_use]
    pub fn with_type(mut self, card_type: impl Into<String>) -> Self {
        self.card_type = Some(card_type.into());
        self
    }

    #[must_use]
    pub fn card_type(&self) -> Option<&str> {
        self.card_type.as_deref()
    }
}
