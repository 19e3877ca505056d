//! Product backlog view.
//!
//! One instance per open project page. Holds a transient copy of the
//! project's unscheduled tasks, the two client-side refinements, and the
//! "currently moving" selection. Every mutation goes through the backend and
//! is followed by a full refetch; the local copy is never patched in place,
//! so a rejected mutation leaves the view exactly as it was.

use std::sync::Arc;

use scrum_backend::{ProjectBackend, RetryPolicy};
use scrum_domain::{
    BacklogRefinement, DragGesture, DropAction, PriorityFilter, Sprint, SprintId, Task, TaskDraft,
    TaskId, TaskUpdate,
};

use crate::notice::NoticeLog;
use scrum_domain::ProjectId;

pub struct BacklogView {
    backend: Arc<dyn ProjectBackend>,
    retry: RetryPolicy,
    project_id: ProjectId,
    tasks: Vec<Task>,
    refinement: BacklogRefinement,
    moving_task: Option<TaskId>,
    pub notices: NoticeLog,
}

impl BacklogView {
    pub fn new(backend: Arc<dyn ProjectBackend>, project_id: ProjectId) -> Self {
        Self {
            backend,
            retry: RetryPolicy::default(),
            project_id,
            tasks: Vec::new(),
            refinement: BacklogRefinement::default(),
            moving_task: None,
            notices: NoticeLog::new(),
        }
    }

    /// Open the view with an initial fetch.
    pub async fn open(backend: Arc<dyn ProjectBackend>, project_id: ProjectId) -> Self {
        let mut view = Self::new(backend, project_id);
        view.refresh().await;
        view
    }

    /// Refetch the backlog from the backend.
    ///
    /// On failure the previous copy stays on screen and an error notice is
    /// raised; the view never shows a half-applied state.
    pub async fn refresh(&mut self) {
        let backend = Arc::clone(&self.backend);
        let project_id = self.project_id;
        match self
            .retry
            .run(|| {
                let backend = Arc::clone(&backend);
                async move { backend.list_backlog_tasks(project_id).await }
            })
            .await
        {
            Ok(tasks) => self.tasks = tasks,
            Err(e) => {
                tracing::error!("Error fetching backlog tasks: {}", e);
                self.notices.error("Failed to load backlog");
            }
        }
    }

    /// The raw fetched set, in backend order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The fetched set with search and priority refinements applied in
    /// sequence. Order is the backend's, untouched.
    pub fn visible_tasks(&self) -> Vec<Task> {
        self.refinement.apply(&self.tasks)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.refinement.query = query.into();
    }

    pub fn set_priority_filter(&mut self, filter: PriorityFilter) {
        self.refinement.priority = filter;
    }

    /// Mark a task as the pending "move to sprint" selection.
    pub fn begin_move(&mut self, task_id: TaskId) {
        self.moving_task = Some(task_id);
    }

    pub fn moving_task(&self) -> Option<TaskId> {
        self.moving_task
    }

    /// Sprints the move dialog may offer: everything not yet completed.
    pub async fn available_sprints(&mut self) -> Vec<Sprint> {
        match self.backend.list_sprints(self.project_id).await {
            Ok(sprints) => sprints.into_iter().filter(|s| s.is_assignable()).collect(),
            Err(e) => {
                tracing::error!("Error listing sprints: {}", e);
                self.notices.error("Failed to load sprints");
                Vec::new()
            }
        }
    }

    /// React to a completed drag gesture.
    ///
    /// Cancelled gestures and drops back onto the source slot issue no
    /// backend call at all. A real drop sets the task's status to the
    /// destination column and refetches.
    pub async fn handle_drag_end(&mut self, gesture: DragGesture) {
        let action = match gesture.interpret() {
            Ok(action) => action,
            Err(e) => {
                tracing::error!("Rejected drag gesture: {}", e);
                self.notices.error("Failed to update task status");
                return;
            }
        };

        let status = match action {
            DropAction::None => return,
            DropAction::SetStatus(status) => status,
        };

        match self
            .backend
            .update_task(gesture.dragged, TaskUpdate::status(status))
            .await
        {
            Ok(_) => self.refresh().await,
            Err(e) => {
                tracing::error!("Error updating task status: {}", e);
                self.notices.error("Failed to update task status");
            }
        }
    }

    /// Move a backlog task into a sprint, forcing its status back to todo.
    ///
    /// A missing task or sprint selection is silently ignored; the move
    /// dialog can be dismissed half-filled without consequence.
    pub async fn move_to_sprint(&mut self, task_id: Option<TaskId>, sprint_id: Option<SprintId>) {
        let (Some(task_id), Some(sprint_id)) = (task_id, sprint_id) else {
            return;
        };

        match self
            .backend
            .update_task(task_id, TaskUpdate::sprint_assignment(sprint_id))
            .await
        {
            Ok(_) => {
                self.notices.success("Task moved to sprint");
                self.moving_task = None;
                self.refresh().await;
            }
            Err(e) => {
                tracing::error!("Error moving task to sprint: {}", e);
                self.notices.error("Failed to move task to sprint");
            }
        }
    }

    /// Permanently delete a backlog item. No undo.
    pub async fn delete_task(&mut self, task_id: TaskId) {
        match self.backend.delete_task(task_id).await {
            Ok(()) => {
                self.notices.success("Backlog item deleted successfully");
                self.refresh().await;
            }
            Err(e) => {
                tracing::error!("Error deleting task: {}", e);
                self.notices.error("Failed to delete task");
            }
        }
    }

    /// Create a backlog item from a form draft.
    ///
    /// Validation failures are reported immediately and issue no request.
    pub async fn add_task(&mut self, draft: TaskDraft) {
        if let Err(e) = draft.validate() {
            self.notices.error(e.to_string());
            return;
        }

        let task = Task::from_draft(self.project_id, draft);
        match self.backend.create_task(task).await {
            Ok(_) => {
                self.notices.success("Backlog item added");
                self.refresh().await;
            }
            Err(e) => {
                tracing::error!("Error creating task: {}", e);
                self.notices.error("Failed to add backlog item");
            }
        }
    }

    /// Apply an edited form draft to an existing item.
    pub async fn edit_task(&mut self, task_id: TaskId, draft: TaskDraft) {
        if let Err(e) = draft.validate() {
            self.notices.error(e.to_string());
            return;
        }

        let updates = TaskUpdate {
            title: Some(draft.title),
            description: Some(draft.description).into(),
            priority: Some(draft.priority),
            story_points: draft.story_points.into(),
            due_date: draft.due_date.into(),
            ..TaskUpdate::default()
        };
        match self.backend.update_task(task_id, updates).await {
            Ok(_) => {
                self.notices.success("Backlog item updated");
                self.refresh().await;
            }
            Err(e) => {
                tracing::error!("Error updating task: {}", e);
                self.notices.error("Failed to update backlog item");
            }
        }
    }
}
