//! Quote estimate calculator.
//!
//! Visitors assemble services (each with priced options), add-ons, and event
//! parameters; the estimate is derived on demand from that selection. Each
//! quote is an event-sourced `QuoteBuilder` scoped to the visitor's session.

pub mod application;
pub mod domain;
