use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use scrum_core::{ScrumError, ScrumResult};
use scrum_domain::{
    ChatMessage, Collaborator, Project, ProjectId, Sprint, SprintId, SprintStatus, Task, TaskId,
    TaskUpdate, UserProfile,
};

use crate::feed::ChatFeed;
use crate::memory::{BackendState, MemoryBackend};
use crate::traits::ProjectBackend;

const FORMAT_VERSION: u32 = 1;

/// On-disk wrapper around the backend state.
#[derive(Debug, Serialize, Deserialize)]
struct JsonEnvelope {
    version: u32,
    saved_at: DateTime<Utc>,
    data: BackendState,
}

/// File-backed backend used by the CLI.
///
/// Wraps the in-memory backend and writes the full snapshot back to disk
/// after every successful mutation. Writes go to a temp file in the same
/// directory followed by a rename, so a crash mid-write never corrupts the
/// data file.
pub struct JsonFileBackend {
    path: PathBuf,
    inner: MemoryBackend,
}

impl JsonFileBackend {
    pub async fn load(path: impl AsRef<Path>) -> ScrumResult<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Ok(Self {
                path,
                inner: MemoryBackend::new(),
            });
        }

        let bytes = fs::read(&path).await?;
        let envelope: JsonEnvelope = serde_json::from_slice(&bytes)
            .map_err(|e| ScrumError::Serialization(e.to_string()))?;
        if envelope.version != FORMAT_VERSION {
            return Err(ScrumError::Serialization(format!(
                "Unsupported data file version: {}",
                envelope.version
            )));
        }

        tracing::debug!("Loaded {} bytes from {}", bytes.len(), path.display());
        Ok(Self {
            path,
            inner: MemoryBackend::from_state(envelope.data),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self) -> ScrumResult<()> {
        let envelope = JsonEnvelope {
            version: FORMAT_VERSION,
            saved_at: Utc::now(),
            data: self.inner.snapshot().await,
        };
        let bytes = serde_json::to_vec_pretty(&envelope)
            .map_err(|e| ScrumError::Serialization(e.to_string()))?;

        // Temp file in the target directory keeps the rename on one
        // filesystem, which makes it atomic on POSIX. persist() consumes the
        // guard, so the handle never tries to unlink the renamed file.
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        let temp = tempfile::NamedTempFile::new_in(parent)?;
        fs::write(temp.path(), &bytes).await?;
        temp.persist(&self.path)
            .map_err(|e| ScrumError::Io(e.error))?;

        tracing::debug!("Saved {} bytes to {}", bytes.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl ProjectBackend for JsonFileBackend {
    async fn create_project(&self, project: Project) -> ScrumResult<Project> {
        let project = self.inner.create_project(project).await?;
        self.persist().await?;
        Ok(project)
    }

    async fn get_project(&self, project_id: ProjectId) -> ScrumResult<Option<Project>> {
        self.inner.get_project(project_id).await
    }

    async fn list_backlog_tasks(&self, project_id: ProjectId) -> ScrumResult<Vec<Task>> {
        self.inner.list_backlog_tasks(project_id).await
    }

    async fn create_task(&self, task: Task) -> ScrumResult<Task> {
        let task = self.inner.create_task(task).await?;
        self.persist().await?;
        Ok(task)
    }

    async fn update_task(&self, task_id: TaskId, updates: TaskUpdate) -> ScrumResult<Task> {
        let task = self.inner.update_task(task_id, updates).await?;
        self.persist().await?;
        Ok(task)
    }

    async fn delete_task(&self, task_id: TaskId) -> ScrumResult<()> {
        self.inner.delete_task(task_id).await?;
        self.persist().await
    }

    async fn create_sprint(&self, sprint: Sprint) -> ScrumResult<Sprint> {
        let sprint = self.inner.create_sprint(sprint).await?;
        self.persist().await?;
        Ok(sprint)
    }

    async fn list_sprints(&self, project_id: ProjectId) -> ScrumResult<Vec<Sprint>> {
        self.inner.list_sprints(project_id).await
    }

    async fn set_sprint_status(
        &self,
        sprint_id: SprintId,
        status: SprintStatus,
    ) -> ScrumResult<Sprint> {
        let sprint = self.inner.set_sprint_status(sprint_id, status).await?;
        self.persist().await?;
        Ok(sprint)
    }

    async fn add_collaborator(&self, collaborator: Collaborator) -> ScrumResult<Collaborator> {
        let collaborator = self.inner.add_collaborator(collaborator).await?;
        self.persist().await?;
        Ok(collaborator)
    }

    async fn list_collaborators(&self, project_id: ProjectId) -> ScrumResult<Vec<Collaborator>> {
        self.inner.list_collaborators(project_id).await
    }

    async fn list_chat_messages(&self, project_id: ProjectId) -> ScrumResult<Vec<ChatMessage>> {
        self.inner.list_chat_messages(project_id).await
    }

    async fn send_chat_message(&self, message: ChatMessage) -> ScrumResult<ChatMessage> {
        let message = self.inner.send_chat_message(message).await?;
        self.persist().await?;
        Ok(message)
    }

    fn subscribe_chat(&self, project_id: ProjectId) -> ChatFeed {
        self.inner.subscribe_chat(project_id)
    }

    async fn upsert_profile(&self, profile: UserProfile) -> ScrumResult<UserProfile> {
        let profile = self.inner.upsert_profile(profile).await?;
        self.persist().await?;
        Ok(profile)
    }
}
