//! Demo quiz engine.
//!
//! Drives every interactive "AI" demo on the site through one lifecycle:
//! question steps, a timed analysis pause, and a deterministic result picked
//! from static content. Each quiz supplies its steps and a scoring function;
//! the engine never branches on which quiz it is running.

pub mod application;
pub mod domain;
pub mod quizzes;
pub mod registry;
