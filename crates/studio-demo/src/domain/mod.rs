//! Domain model for demo quiz sessions.

pub mod aggregates;
pub mod answers;
pub mod commands;
pub mod events;
pub mod quiz;
pub mod runner;
pub mod scoring;
pub mod slug;
pub mod step;
