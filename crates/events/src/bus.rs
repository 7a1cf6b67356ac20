//! In-process typed event bus.
//!
//! The bus is a pure dispatch mechanism, not a queue:
//!
//! - **No buffering**: events emitted before a handler registers are gone.
//! - **Synchronous**: `emit` calls every handler inline, in registration
//!   order, and returns when the last one does.
//! - **No fault isolation**: a panicking handler aborts the remaining
//!   dispatch and unwinds into the caller of `emit`.
//!
//! The registration table is an instance field, so independent buses can
//! coexist without shared state.

use std::any::{Any, TypeId};
use std::collections::HashMap;

use crate::event::Event;

type HandlerList<E> = Vec<Box<dyn FnMut(&E)>>;

/// Typed pub/sub bus.
///
/// Handlers registered via [`EventBus::on`] accumulate per event type and
/// are invoked by [`EventBus::emit`] with a payload of exactly that type.
/// There is no unsubscribe; drop the bus to drop its handlers.
#[derive(Default)]
pub struct EventBus {
    // Each slot holds the HandlerList<E> for the event type keyed by TypeId.
    handlers: HashMap<TypeId, Box<dyn Any>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for event type `E`.
    ///
    /// Multiple handlers may be registered for the same event type; they are
    /// kept in registration order. No deduplication is performed.
    pub fn on<E: Event>(&mut self, handler: impl FnMut(&E) + 'static) {
        let slot = self
            .handlers
            .entry(TypeId::of::<E>())
            .or_insert_with(|| Box::new(HandlerList::<E>::new()));
        // Slot was created for this TypeId, so the downcast cannot fail.
        let list = slot
            .downcast_mut::<HandlerList<E>>()
            .expect("handler slot matches event type");
        list.push(Box::new(handler));
        tracing::debug!(event = E::NAME, handlers = list.len(), "handler registered");
    }

    /// Synchronously invoke every handler registered for `E`, in
    /// registration order.
    ///
    /// A no-op when nothing is registered. Handler panics are not caught.
    pub fn emit<E: Event>(&mut self, payload: &E) {
        let Some(slot) = self.handlers.get_mut(&TypeId::of::<E>()) else {
            return;
        };
        let list = slot
            .downcast_mut::<HandlerList<E>>()
            .expect("handler slot matches event type");
        tracing::debug!(event = E::NAME, handlers = list.len(), "dispatching");
        for handler in list.iter_mut() {
            handler(payload);
        }
    }

    /// Number of handlers currently registered for `E`.
    pub fn handler_count<E: Event>(&self) -> usize {
        self.handlers
            .get(&TypeId::of::<E>())
            .and_then(|slot| slot.downcast_ref::<HandlerList<E>>())
            .map_or(0, Vec::len)
    }
}

impl core::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventBus")
            .field("event_types", &self.handlers.len())
            .finish()
    }
}
