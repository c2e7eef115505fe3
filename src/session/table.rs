//! Table-state save and load.

use std::fs;
use std::path::PathBuf;

use super::host::Host;
use super::lock::{LockGuard, TableLock};
use super::paths::{rewrite_location, table_load_name, table_save_name};
use super::{AbortReason, Outcome};
use crate::codec::{decode_snapshot, encode_snapshot, TableSnapshot};
use crate::core::config::TableConfig;
use crate::core::error::{PersistError, Result};
use crate::core::state::GameState;
use crate::remote::Transport;

const SAVE_CONFIRM: &str = "You are about to SAVE the table states including the elements on the table, \
shared deck and each player's hand and piles.\nThis option should be executed on the game host.";
const LOAD_CONFIRM: &str = "You are about to LOAD the table states including the elements on the table, \
shared deck and each player's hand and piles.\nThis option should be executed on the game host.";

/// One participant's view of the table plus the seams it saves and loads
/// through.
pub struct TableSession<H, L, T> {
    pub(super) state: GameState,
    pub(super) config: TableConfig,
    pub(super) host: H,
    pub(super) lock: L,
    pub(super) transport: T,
}

impl<H: Host, L: TableLock, T: Transport> TableSession<H, L, T> {
    pub fn new(state: GameState, config: TableConfig, host: H, lock: L, transport: T) -> Self {
        Self {
            state,
            config,
            host,
            lock,
            transport,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Write the whole table to a JSON file chosen by the user.
    pub fn save_table(&mut self) -> Result<Outcome> {
        if !self.confirm_host(SAVE_CONFIRM) {
            return Ok(Outcome::Aborted(AbortReason::NotHost));
        }

        let Some(_guard) = LockGuard::acquire(&self.lock) else {
            log::warn!("table lock busy, save skipped");
            self.host
                .whisper("Others players are saving, please try manual saving again");
            return Ok(Outcome::Aborted(AbortReason::LockBusy));
        };

        let snapshot = encode_snapshot(&self.state, &self.config);
        let Some(path) = prompt_path(
            &mut self.host,
            &self.config,
            "Please input the path to save the game state",
            &table_save_name(&self.config),
        ) else {
            self.host.whisper("Failed to save table state, missing file path");
            return Ok(Outcome::Aborted(AbortReason::Cancelled));
        };

        fs::write(&path, snapshot.to_json()?).map_err(|e| PersistError::io(&path, e))?;

        log::info!("saved {} cards to {}", snapshot.card_count(), path.display());
        self.host
            .notify(&format!("Table state saves to {}", path.display()));
        Ok(Outcome::Saved(path))
    }

    /// Merge a JSON table state chosen by the user into the live table.
    ///
    /// Cards created before a failure are kept.
    pub fn load_table(&mut self) -> Result<Outcome> {
        if !self.confirm_host(LOAD_CONFIRM) {
            return Ok(Outcome::Aborted(AbortReason::NotHost));
        }

        let Some(_guard) = LockGuard::acquire(&self.lock) else {
            log::warn!("table lock busy, load skipped");
            self.host
                .whisper("Others players are locking the table, please try again");
            return Ok(Outcome::Aborted(AbortReason::LockBusy));
        };

        let Some(path) = prompt_path(
            &mut self.host,
            &self.config,
            "Please provide the file path to load the table states",
            &table_load_name(&self.config),
        ) else {
            self.host.whisper("Failed to load table state, missing file path");
            return Ok(Outcome::Aborted(AbortReason::Cancelled));
        };

        let json = fs::read_to_string(&path).map_err(|e| PersistError::io(&path, e))?;
        let snapshot = TableSnapshot::from_json(&json)?;
        decode_snapshot(&mut self.state, &mut self.transport, &snapshot);

        log::info!("loaded {} cards from {}", snapshot.card_count(), path.display());
        self.host
            .notify(&format!("Successfully load table state from {}", path.display()));
        Ok(Outcome::Loaded(path))
    }

    fn confirm_host(&mut self, message: &str) -> bool {
        self.host.prompt_choice(message, &self.config.confirm_choices) == Some(0)
    }
}

/// Prompt for a path, pre-filled with `file_name` moved into the decks
/// folder.
pub(super) fn prompt_path<H: Host>(
    host: &mut H,
    config: &TableConfig,
    message: &str,
    file_name: &str,
) -> Option<PathBuf> {
    let default = rewrite_location(config, &host.working_path(file_name));
    host.prompt_string(message, &default.to_string_lossy())
        .map(PathBuf::from)
}
