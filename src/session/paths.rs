//! Default file names and locations.
//!
//! The host's working directory is usually somewhere under its generic
//! card database. Saves belong in the game's decks folder instead:
//!
//! - a path containing the database marker has it swapped for the decks
//!   folder, and the game id swapped for the game title
//! - otherwise the last root marker is replaced by `<decks>/<title>`
//!
//! A path matching neither is used as is.

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::core::config::TableConfig;

/// Current local time as `YYYYMMDDHHMMSS`.
#[must_use]
pub fn timestamp() -> String {
    Local::now().format("%Y%m%d%H%M%S").to_string()
}

/// Default name for a new table-state save.
#[must_use]
pub fn table_save_name(config: &TableConfig) -> String {
    format!("{}-{}.json", config.table_state_prefix, timestamp())
}

/// Default name of the table state to load.
#[must_use]
pub fn table_load_name(config: &TableConfig) -> String {
    format!("{}.json", config.table_state_prefix)
}

/// Deck export name for a user-supplied suffix.
#[must_use]
pub fn deck_file_name(config: &TableConfig, suffix: &str) -> String {
    format!("{}-saved-{}.o8d", config.deck_prefix, suffix)
}

/// Move a working-directory path into the game's decks folder.
#[must_use]
pub fn rewrite_location(config: &TableConfig, working_path: &Path) -> PathBuf {
    let path = working_path.to_string_lossy();

    if path.contains(config.database_marker.as_str()) {
        return path
            .replace(&config.database_marker, &config.decks_folder)
            .replace(&config.game_id, &config.title)
            .into();
    }

    match path.rfind(config.root_marker.as_str()) {
        Some(at) => {
            let separator = if path.contains('\\') { '\\' } else { '/' };
            format!(
                "{}{}{}{}{}",
                &path[..at],
                config.decks_folder,
                separator,
                config.title,
                &path[at + config.root_marker.len()..]
            )
            .into()
        }
        None => working_path.to_path_buf(),
    }
}
