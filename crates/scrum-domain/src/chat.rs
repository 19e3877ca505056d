use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::project::ProjectId;

pub type ChatMessageId = Uuid;

/// Append-only project chat message, ordered by backend-assigned creation
/// time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: ChatMessageId,
    pub project_id: ProjectId,
    pub user_id: Uuid,
    pub username: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(project_id: ProjectId, user_id: Uuid, username: String, message: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_id,
            user_id,
            username,
            message,
            created_at: Utc::now(),
        }
    }
}
