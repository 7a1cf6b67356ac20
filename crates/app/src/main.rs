//! End-to-end walkthrough: a task repository wired to the event bus.
//!
//! The store and the bus are deliberately uncoupled; publishing after a
//! successful save is this program's job, not the store's.

use anyhow::Result;
use chrono::Utc;
use tracing::info;

use taskforge_core::EntityId;
use taskforge_domain::{Attachment, Task, TaskCreated, TaskDeleted, TaskPriority, TaskStatus};
use taskforge_events::EventBus;
use taskforge_store::{MemoryRepository, Repository};

fn main() -> Result<()> {
    taskforge_observability::init();

    let mut tasks = MemoryRepository::new();
    let mut bus = EventBus::new();

    bus.on(|ev: &TaskCreated| info!(title = %ev.0.title, "new task created"));
    bus.on(|ev: &TaskDeleted| info!(id = %ev.id, "task deleted"));

    let now = Utc::now();
    let task = Task {
        id: EntityId::from(1),
        created_at: now,
        updated_at: now,
        title: "Master Rust".to_string(),
        description: Some("Build a project using the domain core".to_string()),
        status: TaskStatus::InProgress,
        priority: TaskPriority::High,
        assignee_id: Some(EntityId::from("user-123")),
        tags: vec!["learning".to_string(), "coding".to_string()],
    };

    let stored = tasks.save(task)?;
    bus.emit(&TaskCreated(stored));

    let fetched = tasks.find_by_id(&EntityId::from(1))?;
    println!("{}", serde_json::to_string_pretty(fetched)?);

    let attachment = Attachment::File {
        file_url: "http://example.com/spec.pdf".to_string(),
        size_mb: 10,
    };
    println!("{}", attachment.summary());

    let id = EntityId::from(1);
    tasks.delete(&id)?;
    bus.emit(&TaskDeleted { id });
    info!(remaining = tasks.len(), "done");

    Ok(())
}
