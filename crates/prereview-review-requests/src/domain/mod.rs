//! Domain layer: commands, state, decisions.

pub mod commands;
pub mod decide;
pub mod errors;
pub mod state;
