//! Domain model for quotes.

pub mod aggregates;
pub mod catalog;
pub mod commands;
pub mod details;
pub mod estimate;
pub mod events;
pub mod money;
