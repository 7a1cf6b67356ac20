use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use taskforge_core::{Entity, EntityId};

/// Access role of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
    Guest,
}

/// An actor who can be assigned tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl Entity for User {
    fn id(&self) -> &EntityId {
        &self.id
    }
}
