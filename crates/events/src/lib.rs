//! Domain events.
//!
//! Every state change in the inventory is described by an event. The CLI logs
//! applied events through `tracing`, keyed by `event_type()`.

pub mod event;

pub use event::Event;
