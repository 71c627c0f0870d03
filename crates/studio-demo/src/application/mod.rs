//! Application layer for demo quiz sessions.

pub mod analysis_timer;
pub mod command_handlers;
pub mod query_handlers;
