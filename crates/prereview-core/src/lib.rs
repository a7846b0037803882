//! PREreview Core: shared event-sourcing abstractions.
//!
//! This crate defines the traits and types every bounded context builds on:
//! events and the filter primitive that selects them, commands, the
//! fold/decide contract, and the event repository collaborator. It contains
//! no domain knowledge and no infrastructure code.

pub mod command;
pub mod decider;
pub mod error;
pub mod event;
pub mod filter;
pub mod repository;
