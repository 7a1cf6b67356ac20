use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use taskforge_core::{Entity, EntityId};

/// Task workflow state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
    Archived,
}

/// Task urgency, ordered low to critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low = 1,
    Medium = 2,
    High = 3,
    Critical = 4,
}

/// A unit of work tracked in the system.
///
/// Timestamps are carried for callers; stores do not enforce or update
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: EntityId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    /// Assigned user, if any.
    pub assignee_id: Option<EntityId>,
    pub tags: Vec<String>,
}

impl Entity for Task {
    fn id(&self) -> &EntityId {
        &self.id
    }
}
