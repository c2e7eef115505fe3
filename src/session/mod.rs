//! Save and load orchestration.
//!
//! Every operation follows the same shape:
//!
//! 1. Confirm with the user that they are the host (table save/load only)
//! 2. Take the table lock, giving up at once if someone else holds it
//! 3. Resolve the file path and do the work
//! 4. Release the lock, whichever way step 3 ended
//! 5. Tell the table what happened
//!
//! A declined confirmation, a busy lock and a cancelled prompt end the
//! operation early with an `Outcome::Aborted`; only I/O and parse failures
//! are errors.

pub mod host;
pub mod lock;
pub mod paths;
pub mod table;
mod deck;

use std::path::PathBuf;

pub use host::{Host, ScriptedHost};
pub use lock::{LockGuard, SharedLock, TableLock};
pub use table::TableSession;

/// Why an operation stopped before doing anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AbortReason {
    /// The user said they are not the host.
    NotHost,
    /// Another participant holds the table lock.
    LockBusy,
    /// A prompt was cancelled.
    Cancelled,
}

/// Result of a session operation that did not fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Saved(PathBuf),
    Loaded(PathBuf),
    Aborted(AbortReason),
}
