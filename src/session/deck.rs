//! Deck save for the local player.

use super::host::Host;
use super::lock::{LockGuard, TableLock};
use super::paths::{deck_file_name, timestamp};
use super::table::TableSession;
use super::{AbortReason, Outcome};
use crate::core::error::Result;
use crate::deck::export_deck;
use crate::remote::Transport;

impl<H: Host, L: TableLock, T: Transport> TableSession<H, L, T> {
    /// Export the local player's piles as a deck file.
    ///
    /// The file name suffix is prompted for, pre-filled with the current
    /// time. The hand is not part of the deck.
    pub fn save_deck(&mut self) -> Result<Outcome> {
        let Some(_guard) = LockGuard::acquire(&self.lock) else {
            log::warn!("table lock busy, deck save skipped");
            self.host
                .whisper("Others players are saving, please try manual saving again");
            return Ok(Outcome::Aborted(AbortReason::LockBusy));
        };

        let Some(suffix) = self.host.prompt_string(
            "Please provide a filename suffix (e.g. current scenario name)",
            &timestamp(),
        ) else {
            self.host.whisper("Failed to save deck, missing file suffix");
            return Ok(Outcome::Aborted(AbortReason::Cancelled));
        };

        let local = self.state.local_player();
        let player = self.state.player(local);
        let working_path = self.host.working_path(&deck_file_name(&self.config, &suffix));
        let path = export_deck(
            &self.state,
            &self.config,
            &working_path,
            player.into_iter().flat_map(|p| &p.piles),
            false,
        )?;

        let name = player.map_or_else(|| local.to_string(), |p| p.name().to_string());
        log::info!("{} saved deck to {}", name, path.display());
        self.host
            .notify(&format!("{} saves deck to {}", name, path.display()));
        Ok(Outcome::Saved(path))
    }
}
