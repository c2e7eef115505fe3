//! Core types: entity ids, players, configuration, live table state, errors.
//!
//! `GameState` is the explicit context every codec reads from and writes
//! into. Nothing in this crate reaches for ambient global state.

pub mod entity;
pub mod player;
pub mod config;
pub mod state;
pub mod error;

pub use entity::EntityId;
pub use player::{Player, PlayerId};
pub use config::{CounterConfig, PileConfig, TableConfig};
pub use state::{Destination, GameState, SharedArea};
pub use error::{PersistError, Result};
