use anyhow::Result;
use chrono::{Duration, Utc};
use std::sync::Arc;

use scrum_backend::{JsonFileBackend, ProjectBackend};
use scrum_domain::{Sprint, SprintStatus};

use crate::cli::{SprintAction, SprintCreateArgs};
use crate::handlers::parse_datetime;
use crate::output;

pub async fn handle_sprint_command(
    backend: Arc<JsonFileBackend>,
    action: SprintAction,
) -> Result<()> {
    match action {
        SprintAction::Create(args) => create_sprint(backend, args).await,
        SprintAction::List { project_id, all } => {
            match backend.list_sprints(project_id).await {
                Ok(sprints) => {
                    let sprints: Vec<Sprint> = if all {
                        sprints
                    } else {
                        sprints.into_iter().filter(|s| s.is_assignable()).collect()
                    };
                    output::output_list(sprints);
                }
                Err(e) => output::output_error(&e.to_string()),
            }
            Ok(())
        }
        SprintAction::Activate { id } => set_status(backend, id, SprintStatus::Active).await,
        SprintAction::Complete { id } => set_status(backend, id, SprintStatus::Completed).await,
    }
}

async fn create_sprint(backend: Arc<JsonFileBackend>, args: SprintCreateArgs) -> Result<()> {
    let start_date = match args.start_date.as_deref() {
        Some(s) => match parse_datetime(s) {
            Ok(dt) => dt,
            Err(e) => output::output_error(&e),
        },
        None => Utc::now(),
    };
    let end_date = match args.end_date.as_deref() {
        Some(s) => match parse_datetime(s) {
            Ok(dt) => dt,
            Err(e) => output::output_error(&e),
        },
        None => start_date + Duration::days(i64::from(args.duration_days)),
    };
    if end_date <= start_date {
        output::output_error("End date must be after start date");
    }

    let sprint = Sprint::new(args.project_id, args.title, start_date, end_date);
    match backend.create_sprint(sprint).await {
        Ok(created) => output::output_success(created),
        Err(e) => output::output_error(&e.to_string()),
    }
    Ok(())
}

async fn set_status(
    backend: Arc<JsonFileBackend>,
    id: uuid::Uuid,
    status: SprintStatus,
) -> Result<()> {
    match backend.set_sprint_status(id, status).await {
        Ok(sprint) => output::output_success(sprint),
        Err(e) => output::output_error(&e.to_string()),
    }
    Ok(())
}
