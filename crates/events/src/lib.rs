//! Typed publish/subscribe for domain events.

pub mod bus;
pub mod event;

pub use bus::EventBus;
pub use event::Event;
