use anyhow::Result;
use std::sync::Arc;
use uuid::Uuid;

use scrum_backend::{JsonFileBackend, ProjectBackend};
use scrum_domain::ChatMessage;

use crate::cli::ChatAction;
use crate::output;

pub async fn handle_chat_command(backend: Arc<JsonFileBackend>, action: ChatAction) -> Result<()> {
    match action {
        ChatAction::Send {
            project_id,
            username,
            message,
            user_id,
        } => {
            let message = message.trim();
            if message.is_empty() {
                output::output_error("Message cannot be empty");
            }

            let message = ChatMessage::new(
                project_id,
                user_id.unwrap_or_else(Uuid::new_v4),
                username,
                message.to_string(),
            );
            match backend.send_chat_message(message).await {
                Ok(sent) => output::output_success(sent),
                Err(e) => output::output_error(&e.to_string()),
            }
        }
        ChatAction::List { project_id } => match backend.list_chat_messages(project_id).await {
            Ok(messages) => output::output_list(messages),
            Err(e) => output::output_error(&e.to_string()),
        },
    }
    Ok(())
}
