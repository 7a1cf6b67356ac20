use serde::{Deserialize, Serialize};

/// Content attached to a task.
///
/// Tagged on `kind` on the wire. The match in [`Attachment::summary`] is
/// exhaustive, so adding a variant is a compile error until every consumer
/// handles it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Attachment {
    Note { content: String },
    File { file_url: String, size_mb: u32 },
    Link { url: String },
}

impl Attachment {
    /// One-line human-readable description.
    ///
    /// Notes are truncated to their first 20 characters.
    pub fn summary(&self) -> String {
        match self {
            Attachment::Note { content } => {
                let preview: String = content.chars().take(20).collect();
                format!("Note: {preview}...")
            }
            Attachment::File { file_url, size_mb } => {
                format!("File: {file_url} ({size_mb}mb)")
            }
            Attachment::Link { url } => format!("Link: {url}"),
        }
    }
}
