use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::field_update::FieldUpdate;
use crate::project::ProjectId;
use crate::sprint::SprintId;
use scrum_core::{ScrumError, ScrumResult};

pub type TaskId = Uuid;

/// Board position of a task. The wire format doubles as the board's column
/// identifier, so the variants serialize to the literal column ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Backlog,
    Todo,
    InProgress,
    Review,
    Done,
}

impl TaskStatus {
    /// Map a drop-target column id to a status.
    ///
    /// The "backlog" column is the one place where the column id is not a
    /// board status in the strict sense; dropping there keeps the task in
    /// its backlog state.
    pub fn from_column_id(column: &str) -> Option<Self> {
        match column {
            "backlog" => Some(TaskStatus::Backlog),
            "todo" => Some(TaskStatus::Todo),
            "in-progress" => Some(TaskStatus::InProgress),
            "review" => Some(TaskStatus::Review),
            "done" => Some(TaskStatus::Done),
            _ => None,
        }
    }

    pub fn as_column_id(&self) -> &'static str {
        match self {
            TaskStatus::Backlog => "backlog",
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Review => "review",
            TaskStatus::Done => "done",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub project_id: ProjectId,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub assignee_id: Option<Uuid>,
    pub due_date: Option<DateTime<Utc>>,
    pub story_points: Option<u32>,
    pub sprint_id: Option<SprintId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(project_id: ProjectId, title: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            project_id,
            title,
            description: None,
            status: TaskStatus::Backlog,
            priority: TaskPriority::Medium,
            assignee_id: None,
            due_date: None,
            story_points: None,
            sprint_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Build a backlog task from a validated draft.
    pub fn from_draft(project_id: ProjectId, draft: TaskDraft) -> Self {
        let mut task = Self::new(project_id, draft.title);
        task.description = Some(draft.description);
        task.priority = draft.priority;
        task.story_points = draft.story_points;
        task.due_date = draft.due_date;
        task
    }

    /// A task with no sprint reference is backlog inventory, whatever its
    /// board status says.
    pub fn is_backlog(&self) -> bool {
        self.sprint_id.is_none()
    }

    pub fn update_status(&mut self, status: TaskStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Schedule the task into a sprint. Status is forced back to todo so the
    /// task re-enters sprint work at the front of the board, whatever it was
    /// before.
    pub fn assign_to_sprint(&mut self, sprint_id: SprintId) {
        self.sprint_id = Some(sprint_id);
        self.status = TaskStatus::Todo;
        self.updated_at = Utc::now();
    }

    /// Apply partial changes.
    pub fn update(&mut self, updates: TaskUpdate) {
        if let Some(title) = updates.title {
            self.title = title;
        }
        updates.description.apply_to(&mut self.description);
        if let Some(status) = updates.status {
            self.status = status;
        }
        if let Some(priority) = updates.priority {
            self.priority = priority;
        }
        updates.assignee_id.apply_to(&mut self.assignee_id);
        updates.due_date.apply_to(&mut self.due_date);
        updates.story_points.apply_to(&mut self.story_points);
        updates.sprint_id.apply_to(&mut self.sprint_id);
        self.updated_at = Utc::now();
    }
}

/// Partial update struct for Task
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: FieldUpdate<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub assignee_id: FieldUpdate<Uuid>,
    pub due_date: FieldUpdate<DateTime<Utc>>,
    pub story_points: FieldUpdate<u32>,
    pub sprint_id: FieldUpdate<SprintId>,
}

impl TaskUpdate {
    /// Update carried by a successful drop: just the new status.
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Update carried by a sprint move: sprint reference plus the forced
    /// status reset.
    pub fn sprint_assignment(sprint_id: SprintId) -> Self {
        Self {
            status: Some(TaskStatus::Todo),
            sprint_id: FieldUpdate::Set(sprint_id),
            ..Self::default()
        }
    }
}

/// Form input for creating or editing a backlog item.
///
/// Validated before any backend request is issued; a rejected draft has no
/// side effects.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub story_points: Option<u32>,
    pub due_date: Option<DateTime<Utc>>,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            priority: TaskPriority::Medium,
            story_points: None,
            due_date: None,
        }
    }

    pub fn validate(&self) -> ScrumResult<()> {
        if self.title.trim().is_empty() {
            return Err(ScrumError::Validation("Title cannot be empty".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(ScrumError::Validation(
                "Description cannot be empty".to_string(),
            ));
        }
        if self.story_points == Some(0) {
            return Err(ScrumError::Validation(
                "Story points must be a positive number".to_string(),
            ));
        }
        Ok(())
    }
}
