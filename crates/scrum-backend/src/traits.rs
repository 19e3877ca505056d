use async_trait::async_trait;
use scrum_core::ScrumResult;
use scrum_domain::{
    ChatMessage, Collaborator, Project, ProjectId, Sprint, SprintId, SprintStatus, Task, TaskId,
    TaskUpdate, UserProfile,
};

use crate::feed::ChatFeed;

/// Row-level CRUD and change-notification API of the hosted backend.
///
/// The client owns no durable state; everything read through this trait is a
/// transient, derived copy. Mutating calls either apply fully or fail with no
/// partial effect.
#[async_trait]
pub trait ProjectBackend: Send + Sync {
    async fn create_project(&self, project: Project) -> ScrumResult<Project>;

    async fn get_project(&self, project_id: ProjectId) -> ScrumResult<Option<Project>>;

    /// Tasks of the project with no sprint assignment, in backend order.
    /// Callers must not rely on that order beyond set membership.
    async fn list_backlog_tasks(&self, project_id: ProjectId) -> ScrumResult<Vec<Task>>;

    async fn create_task(&self, task: Task) -> ScrumResult<Task>;

    async fn update_task(&self, task_id: TaskId, updates: TaskUpdate) -> ScrumResult<Task>;

    /// Permanent removal. No soft delete, no undo.
    async fn delete_task(&self, task_id: TaskId) -> ScrumResult<()>;

    async fn create_sprint(&self, sprint: Sprint) -> ScrumResult<Sprint>;

    async fn list_sprints(&self, project_id: ProjectId) -> ScrumResult<Vec<Sprint>>;

    /// Drive the planned → active → completed lifecycle.
    async fn set_sprint_status(&self, sprint_id: SprintId, status: SprintStatus)
        -> ScrumResult<Sprint>;

    async fn add_collaborator(&self, collaborator: Collaborator) -> ScrumResult<Collaborator>;

    async fn list_collaborators(&self, project_id: ProjectId) -> ScrumResult<Vec<Collaborator>>;

    /// Chat history ascending by creation time.
    async fn list_chat_messages(&self, project_id: ProjectId) -> ScrumResult<Vec<ChatMessage>>;

    /// The backend assigns the creation timestamp and pushes the stored
    /// message to every live subscriber.
    async fn send_chat_message(&self, message: ChatMessage) -> ScrumResult<ChatMessage>;

    /// Push stream of messages inserted for the project. Lazy, infinite and
    /// non-restartable; delivery is at-least-once with no deduplication.
    fn subscribe_chat(&self, project_id: ProjectId) -> ChatFeed;

    /// Create or update a profile in one atomic call. A username already
    /// taken by another user yields `ScrumError::Conflict`; there is no
    /// separate client-side uniqueness check to race against.
    async fn upsert_profile(&self, profile: UserProfile) -> ScrumResult<UserProfile>;
}
