//! Domain event payloads.
//!
//! Each payload type is bound to one stable event name; the bus dispatches
//! on the payload type, so handlers always receive the shape they
//! registered for.

use chrono::{DateTime, Utc};

use taskforge_core::EntityId;
use taskforge_events::Event;

use crate::task::Task;

/// A task was saved for the first time.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskCreated(pub Task);

impl Event for TaskCreated {
    const NAME: &'static str = "task.created";
}

/// An existing task was overwritten.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskUpdated(pub Task);

impl Event for TaskUpdated {
    const NAME: &'static str = "task.updated";
}

/// A task was removed from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDeleted {
    pub id: EntityId,
}

impl Event for TaskDeleted {
    const NAME: &'static str = "task.deleted";
}

/// A user authenticated.
#[derive(Debug, Clone, PartialEq)]
pub struct UserLoggedIn {
    pub user_id: EntityId,
    pub timestamp: DateTime<Utc>,
}

impl Event for UserLoggedIn {
    const NAME: &'static str = "user.login";
}
