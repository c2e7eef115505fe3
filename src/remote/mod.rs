//! Cross-participant delegation.
//!
//! Each participant may only mutate the entities it owns or controls.
//! When a load touches someone else's hand or pile, the work is packed into
//! a `Command` and handed to a `Transport` addressed to the owner, whose
//! process runs it through `apply` under its own authority.
//!
//! ## Key Types
//!
//! - `Command`: Closed set of operations one participant asks another to run
//! - `Transport`: Outbound seam (`send(target, command)`)
//! - `Outbox`: Transport that queues commands for the network layer to flush

pub mod command;
pub mod transport;
pub mod dispatch;

pub use command::Command;
pub use transport::{Outbox, Transport};
pub use dispatch::apply;
