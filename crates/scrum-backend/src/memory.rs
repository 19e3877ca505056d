use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, RwLock};

use scrum_core::{ScrumError, ScrumResult};
use scrum_domain::{
    ChatMessage, Collaborator, Project, ProjectId, Sprint, SprintId, SprintStatus, Task, TaskId,
    TaskUpdate, UserProfile,
};

use crate::feed::ChatFeed;
use crate::traits::ProjectBackend;

const CHAT_CHANNEL_CAPACITY: usize = 256;

/// Everything the backend holds, in insertion order per collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendState {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub sprints: Vec<Sprint>,
    #[serde(default)]
    pub collaborators: Vec<Collaborator>,
    #[serde(default)]
    pub chat_messages: Vec<ChatMessage>,
    #[serde(default)]
    pub profiles: Vec<UserProfile>,
}

/// In-memory reference implementation of the backend collaborator.
///
/// Stands in for the hosted store in tests and backs the file store through
/// composition. Each mutating call applies fully under one write lock, so a
/// failed call leaves no partial effect.
pub struct MemoryBackend {
    state: RwLock<BackendState>,
    chat_tx: broadcast::Sender<ChatMessage>,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::from_state(BackendState::default())
    }

    pub fn from_state(state: BackendState) -> Self {
        let (chat_tx, _) = broadcast::channel(CHAT_CHANNEL_CAPACITY);
        Self {
            state: RwLock::new(state),
            chat_tx,
        }
    }

    pub async fn snapshot(&self) -> BackendState {
        self.state.read().await.clone()
    }
}

#[async_trait]
impl ProjectBackend for MemoryBackend {
    async fn create_project(&self, project: Project) -> ScrumResult<Project> {
        let mut state = self.state.write().await;
        state.projects.push(project.clone());
        Ok(project)
    }

    async fn get_project(&self, project_id: ProjectId) -> ScrumResult<Option<Project>> {
        let state = self.state.read().await;
        Ok(state.projects.iter().find(|p| p.id == project_id).cloned())
    }

    async fn list_backlog_tasks(&self, project_id: ProjectId) -> ScrumResult<Vec<Task>> {
        let state = self.state.read().await;
        Ok(state
            .tasks
            .iter()
            .filter(|t| t.project_id == project_id && t.sprint_id.is_none())
            .cloned()
            .collect())
    }

    async fn create_task(&self, task: Task) -> ScrumResult<Task> {
        let mut state = self.state.write().await;
        state.tasks.push(task.clone());
        Ok(task)
    }

    async fn update_task(&self, task_id: TaskId, updates: TaskUpdate) -> ScrumResult<Task> {
        let mut state = self.state.write().await;
        let task = state
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| ScrumError::NotFound(format!("Task {}", task_id)))?;
        task.update(updates);
        Ok(task.clone())
    }

    async fn delete_task(&self, task_id: TaskId) -> ScrumResult<()> {
        let mut state = self.state.write().await;
        let before = state.tasks.len();
        state.tasks.retain(|t| t.id != task_id);
        if state.tasks.len() == before {
            return Err(ScrumError::NotFound(format!("Task {}", task_id)));
        }
        Ok(())
    }

    async fn create_sprint(&self, sprint: Sprint) -> ScrumResult<Sprint> {
        let mut state = self.state.write().await;
        state.sprints.push(sprint.clone());
        Ok(sprint)
    }

    async fn list_sprints(&self, project_id: ProjectId) -> ScrumResult<Vec<Sprint>> {
        let state = self.state.read().await;
        Ok(state
            .sprints
            .iter()
            .filter(|s| s.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn set_sprint_status(
        &self,
        sprint_id: SprintId,
        status: SprintStatus,
    ) -> ScrumResult<Sprint> {
        let mut state = self.state.write().await;
        let sprint = state
            .sprints
            .iter_mut()
            .find(|s| s.id == sprint_id)
            .ok_or_else(|| ScrumError::NotFound(format!("Sprint {}", sprint_id)))?;
        match status {
            SprintStatus::Planned => sprint.status = SprintStatus::Planned,
            SprintStatus::Active => sprint.activate(),
            SprintStatus::Completed => sprint.complete(),
        }
        Ok(sprint.clone())
    }

    async fn add_collaborator(&self, collaborator: Collaborator) -> ScrumResult<Collaborator> {
        let mut state = self.state.write().await;
        state.collaborators.push(collaborator.clone());
        Ok(collaborator)
    }

    async fn list_collaborators(&self, project_id: ProjectId) -> ScrumResult<Vec<Collaborator>> {
        let state = self.state.read().await;
        Ok(state
            .collaborators
            .iter()
            .filter(|c| c.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn list_chat_messages(&self, project_id: ProjectId) -> ScrumResult<Vec<ChatMessage>> {
        let state = self.state.read().await;
        let mut messages: Vec<_> = state
            .chat_messages
            .iter()
            .filter(|m| m.project_id == project_id)
            .cloned()
            .collect();
        messages.sort_by_key(|m| m.created_at);
        Ok(messages)
    }

    async fn send_chat_message(&self, mut message: ChatMessage) -> ScrumResult<ChatMessage> {
        message.created_at = Utc::now();
        {
            let mut state = self.state.write().await;
            state.chat_messages.push(message.clone());
        }
        // No live subscribers is fine; the row is already stored.
        let _ = self.chat_tx.send(message.clone());
        Ok(message)
    }

    fn subscribe_chat(&self, project_id: ProjectId) -> ChatFeed {
        ChatFeed::new(project_id, self.chat_tx.subscribe())
    }

    async fn upsert_profile(&self, profile: UserProfile) -> ScrumResult<UserProfile> {
        let mut state = self.state.write().await;
        let taken = state
            .profiles
            .iter()
            .any(|p| p.username == profile.username && p.id != profile.id);
        if taken {
            return Err(ScrumError::Conflict(format!(
                "Username '{}' is already taken",
                profile.username
            )));
        }
        match state.profiles.iter_mut().find(|p| p.id == profile.id) {
            Some(existing) => *existing = profile.clone(),
            None => state.profiles.push(profile.clone()),
        }
        Ok(profile)
    }
}
