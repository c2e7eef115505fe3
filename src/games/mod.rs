//! Game presets.

pub mod lotr;
