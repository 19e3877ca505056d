use anyhow::Result;
use std::sync::Arc;
use uuid::Uuid;

use scrum_backend::{JsonFileBackend, ProjectBackend};
use scrum_domain::UserProfile;

use crate::cli::ProfileAction;
use crate::output;

pub async fn handle_profile_command(
    backend: Arc<JsonFileBackend>,
    action: ProfileAction,
) -> Result<()> {
    match action {
        ProfileAction::Upsert {
            id,
            username,
            email,
            avatar_url,
        } => {
            let profile = UserProfile {
                id: id.unwrap_or_else(Uuid::new_v4),
                username,
                email,
                avatar_url,
            };
            match backend.upsert_profile(profile).await {
                Ok(saved) => output::output_success(saved),
                Err(e) => output::output_error(&e.to_string()),
            }
        }
    }
    Ok(())
}
