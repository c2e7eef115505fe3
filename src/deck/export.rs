//! `.o8d` deck export.

use std::fs;
use std::path::{Path, PathBuf};

use super::sections::DeckSections;
use crate::core::config::TableConfig;
use crate::core::error::{PersistError, Result};
use crate::core::state::GameState;
use crate::piles::Pile;
use crate::session::paths::rewrite_location;

/// Render tallied sections as a deck document.
///
/// Only non-empty sections are written, in their fixed order. Within a
/// section, cards are sorted by `(name, model)`.
#[must_use]
pub fn render_deck(game_id: &str, sections: &DeckSections, is_shared: bool) -> String {
    let shared = if is_shared { "True" } else { "False" };
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"utf-8\" standalone=\"yes\"?>\n");
    xml.push_str(&format!("<deck game=\"{}\">\n", escape(game_id)));

    for (name, cards) in sections.iter().filter(|(_, cards)| !cards.is_empty()) {
        xml.push_str(&format!(" <section name=\"{}\" shared=\"{}\">\n", escape(name), shared));
        for ((card_name, model), qty) in cards {
            xml.push_str(&format!(
                "  <card qty=\"{}\" id=\"{}\">{}</card>\n",
                qty,
                escape(model),
                escape(card_name)
            ));
        }
        xml.push_str(" </section>\n");
    }

    xml.push_str("</deck>\n");
    xml
}

/// Tally `piles` into the configured sections and write the deck file.
///
/// `working_path` is the host's default location for the file; it goes
/// through the same folder rewrite as table states. Returns the path
/// written.
pub fn export_deck<'p>(
    state: &GameState,
    config: &TableConfig,
    working_path: &Path,
    piles: impl IntoIterator<Item = &'p Pile>,
    is_shared: bool,
) -> Result<PathBuf> {
    let mut sections = DeckSections::new(&config.deck_sections);
    sections.tally(state, piles);
    for (name, _) in sections.iter() {
        let total = sections.total(name);
        if total > 0 {
            log::debug!("{} - {}", name, total);
        }
    }

    let path = rewrite_location(config, working_path);
    fs::write(&path, render_deck(&config.game_id, &sections, is_shared))
        .map_err(|e| PersistError::io(&path, e))?;
    Ok(path)
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
