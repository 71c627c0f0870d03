//! Shared domain abstractions for the studio engine.
//!
//! Every state container in the studio (demo quiz sessions, quote builders)
//! is an event-sourced aggregate. This crate defines the traits and types
//! they share. It contains no storage code.

pub mod aggregate;
pub mod clock;
pub mod command;
pub mod error;
pub mod event;
pub mod locale;
pub mod repository;
