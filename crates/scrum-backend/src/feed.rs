use scrum_domain::{ChatMessage, ProjectId};
use tokio::sync::broadcast;

/// Push stream of chat messages for one project.
///
/// Wraps a broadcast receiver shared across projects and drops messages that
/// belong to other projects. The stream ends only when the backend side of
/// the channel goes away; there is no way to rewind or restart it.
pub struct ChatFeed {
    project_id: ProjectId,
    rx: broadcast::Receiver<ChatMessage>,
}

impl ChatFeed {
    pub fn new(project_id: ProjectId, rx: broadcast::Receiver<ChatMessage>) -> Self {
        Self { project_id, rx }
    }

    /// Next message for this project, or None once the channel is closed.
    ///
    /// A lagged receiver skips to the oldest retained message and keeps
    /// going; the miss is logged, not surfaced.
    pub async fn next(&mut self) -> Option<ChatMessage> {
        loop {
            match self.rx.recv().await {
                Ok(msg) if msg.project_id == self.project_id => return Some(msg),
                Ok(_) => continue,
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!("Chat feed lagged, {} messages skipped", skipped);
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}
