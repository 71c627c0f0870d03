//! Application layer for quotes.

pub mod command_handlers;
pub mod query_handlers;
