//! Outbound transport seam.

use super::command::Command;
use crate::core::player::PlayerId;

/// Delivers commands to other participants.
///
/// Delivery is fire-and-forget: the sender does not wait for the receiver
/// to run the command and gets no result back.
pub trait Transport {
    fn send(&mut self, target: PlayerId, command: Command);
}

/// Transport that queues commands until the network layer flushes them.
#[derive(Clone, Debug, Default)]
pub struct Outbox {
    queued: Vec<(PlayerId, Command)>,
}

impl Outbox {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands queued so far, in send order.
    #[must_use]
    pub fn queued(&self) -> &[(PlayerId, Command)] {
        &self.queued
    }

    /// Take every queued command, leaving the outbox empty.
    pub fn drain(&mut self) -> Vec<(PlayerId, Command)> {
        std::mem::take(&mut self.queued)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queued.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queued.is_empty()
    }
}

impl Transport for Outbox {
    fn send(&mut self, target: PlayerId, command: Command) {
        log::debug!(
            "queue {} ({} cards) for {}",
            command.name(),
            command.card_count(),
            target
        );
        self.queued.push((target, command));
    }
}
