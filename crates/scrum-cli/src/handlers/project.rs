use anyhow::Result;
use std::sync::Arc;
use uuid::Uuid;

use scrum_backend::{JsonFileBackend, ProjectBackend};
use scrum_domain::Project;

use crate::cli::ProjectAction;
use crate::output;

pub async fn handle_project_command(
    backend: Arc<JsonFileBackend>,
    action: ProjectAction,
) -> Result<()> {
    match action {
        ProjectAction::Create { name, owner_id } => {
            let project = Project::new(name, owner_id.unwrap_or_else(Uuid::new_v4));
            match backend.create_project(project).await {
                Ok(created) => output::output_success(created),
                Err(e) => output::output_error(&e.to_string()),
            }
        }
        ProjectAction::Get { id } => match backend.get_project(id).await {
            Ok(Some(project)) => output::output_success(project),
            Ok(None) => output::output_error(&format!("Project not found: {}", id)),
            Err(e) => output::output_error(&e.to_string()),
        },
    }
    Ok(())
}
