//! `shelfmark-events` — change-notification plumbing.
//!
//! Mechanics only: how events are shaped, wrapped and fanned out to
//! subscribers. What the events *mean* is defined by the domain crates.

pub mod bus;
pub mod envelope;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use envelope::EventEnvelope;
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
