//! Domain layer: commands, state, decisions, projections.

pub mod commands;
pub mod decide;
pub mod projections;
pub mod state;
