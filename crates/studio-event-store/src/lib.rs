//! In-memory event streams for the studio engine.
//!
//! The studio keeps no state beyond the lifetime of the application
//! instance that hosts a visitor's session, so streams live in memory and
//! are discarded when their view closes.

pub mod in_memory;

pub use in_memory::InMemoryEventRepository;
