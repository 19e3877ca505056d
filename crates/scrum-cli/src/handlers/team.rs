use anyhow::Result;
use std::sync::Arc;
use uuid::Uuid;

use scrum_backend::{JsonFileBackend, ProjectBackend};
use scrum_client::TeamRoster;
use scrum_domain::Collaborator;

use crate::cli::TeamAction;
use crate::handlers::parse_role;
use crate::output;

pub async fn handle_team_command(backend: Arc<JsonFileBackend>, action: TeamAction) -> Result<()> {
    match action {
        TeamAction::Add {
            project_id,
            username,
            role,
            user_id,
            email,
        } => {
            let role = match parse_role(&role) {
                Ok(role) => role,
                Err(e) => output::output_error(&e),
            };
            let mut collaborator = Collaborator::new(
                project_id,
                user_id.unwrap_or_else(Uuid::new_v4),
                username,
                role,
            );
            collaborator.email = email;

            match backend.add_collaborator(collaborator).await {
                Ok(added) => output::output_success(added),
                Err(e) => output::output_error(&e.to_string()),
            }
        }
        TeamAction::List { project_id } => {
            match TeamRoster::load(backend as Arc<dyn ProjectBackend>, project_id).await {
                Ok(roster) => output::output_list(roster.collaborators().to_vec()),
                Err(e) => output::output_error(&e.to_string()),
            }
        }
    }
    Ok(())
}
