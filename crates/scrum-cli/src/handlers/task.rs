use anyhow::Result;
use std::sync::Arc;

use scrum_backend::{JsonFileBackend, ProjectBackend};
use scrum_client::BacklogView;
use scrum_domain::{FieldUpdate, Task, TaskDraft, TaskStatus, TaskUpdate};

use crate::cli::{TaskAction, TaskCreateArgs, TaskUpdateArgs};
use crate::handlers::{parse_datetime, parse_priority};
use crate::output;

pub async fn handle_task_command(backend: Arc<JsonFileBackend>, action: TaskAction) -> Result<()> {
    match action {
        TaskAction::Create(args) => create_task(backend, args).await,
        TaskAction::Update(args) => update_task(backend, args).await,
        TaskAction::Delete { project_id, id } => {
            let backend = backend as Arc<dyn ProjectBackend>;
            let mut view = BacklogView::new(backend, project_id);
            view.delete_task(id).await;
            output::output_notices(
                view.notices.take(),
                serde_json::json!({ "deleted": id }),
            );
            Ok(())
        }
        TaskAction::AssignSprint {
            project_id,
            id,
            sprint_id,
        } => {
            let backend = backend as Arc<dyn ProjectBackend>;
            let mut view = BacklogView::new(backend, project_id);
            view.move_to_sprint(Some(id), Some(sprint_id)).await;
            output::output_notices(
                view.notices.take(),
                serde_json::json!({ "task_id": id, "sprint_id": sprint_id }),
            );
            Ok(())
        }
    }
}

async fn create_task(backend: Arc<JsonFileBackend>, args: TaskCreateArgs) -> Result<()> {
    let mut draft = TaskDraft::new(args.title, args.description);
    if let Some(priority) = args.priority.as_deref() {
        match parse_priority(priority) {
            Ok(p) => draft.priority = p,
            Err(e) => output::output_error(&e),
        }
    }
    draft.story_points = args.story_points;
    if let Some(due) = args.due_date.as_deref() {
        match parse_datetime(due) {
            Ok(dt) => draft.due_date = Some(dt),
            Err(e) => output::output_error(&e),
        }
    }
    if let Err(e) = draft.validate() {
        output::output_error(&e.to_string());
    }

    match backend.create_task(Task::from_draft(args.project_id, draft)).await {
        Ok(task) => output::output_success(task),
        Err(e) => output::output_error(&e.to_string()),
    }
    Ok(())
}

async fn update_task(backend: Arc<JsonFileBackend>, args: TaskUpdateArgs) -> Result<()> {
    if args.clear_story_points && args.story_points.is_some() {
        output::output_error("Cannot both set and clear story points");
    }

    let status = match args.status.as_deref() {
        Some(column) => match TaskStatus::from_column_id(column) {
            Some(status) => Some(status),
            None => output::output_error(&format!(
                "Invalid status '{}'. Expected a column id: backlog, todo, in-progress, review or done",
                column
            )),
        },
        None => None,
    };
    let priority = match args.priority.as_deref() {
        Some(p) => match parse_priority(p) {
            Ok(p) => Some(p),
            Err(e) => output::output_error(&e),
        },
        None => None,
    };
    let story_points = if args.clear_story_points {
        FieldUpdate::Clear
    } else {
        args.story_points.into()
    };

    let updates = TaskUpdate {
        title: args.title,
        description: args.description.into(),
        status,
        priority,
        story_points,
        ..TaskUpdate::default()
    };

    match backend.update_task(args.id, updates).await {
        Ok(task) => output::output_success(task),
        Err(e) => output::output_error(&e.to_string()),
    }
    Ok(())
}
