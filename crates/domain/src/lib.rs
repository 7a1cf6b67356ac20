//! `taskforge-domain` — the task/user model and its domain events.

pub mod attachment;
pub mod event;
pub mod task;
pub mod user;

pub use attachment::Attachment;
pub use event::{TaskCreated, TaskDeleted, TaskUpdated, UserLoggedIn};
pub use task::{Task, TaskPriority, TaskStatus};
pub use user::{Role, User};
