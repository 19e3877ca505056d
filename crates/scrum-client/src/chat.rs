//! Project chat.
//!
//! History loads once, ascending by creation time; new messages arrive over
//! the backend's push stream and are appended in arrival order. There is no
//! ordering reconciliation beyond the backend-assigned timestamps and no
//! deduplication: an at-least-once transport that delivers twice will
//! double-append. That is a known, deliberate gap, kept visible rather than
//! papered over.

use std::sync::Arc;

use scrum_backend::{ChatFeed, ProjectBackend};
use scrum_core::ScrumResult;
use scrum_domain::{ChatMessage, ProjectId, UserProfile};

use crate::notice::NoticeLog;

pub struct ChatRoom {
    backend: Arc<dyn ProjectBackend>,
    project_id: ProjectId,
    messages: Vec<ChatMessage>,
    feed: ChatFeed,
    pub notices: NoticeLog,
}

impl ChatRoom {
    /// Subscribe and load history.
    ///
    /// The subscription is taken before the history fetch so a message sent
    /// in between shows up on the feed instead of falling into the gap.
    pub async fn open(
        backend: Arc<dyn ProjectBackend>,
        project_id: ProjectId,
    ) -> ScrumResult<Self> {
        let feed = backend.subscribe_chat(project_id);
        let messages = backend.list_chat_messages(project_id).await?;
        Ok(Self {
            backend,
            project_id,
            messages,
            feed,
            notices: NoticeLog::new(),
        })
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append the next pushed message. Returns false once the feed has
    /// closed; the feed cannot be restarted, the room must be reopened.
    pub async fn poll(&mut self) -> bool {
        match self.feed.next().await {
            Some(message) => {
                self.messages.push(message);
                true
            }
            None => false,
        }
    }

    /// Consume the feed until it closes.
    pub async fn run_feed(&mut self) {
        while self.poll().await {}
    }

    /// Send a message as the given user. Blank input is silently dropped;
    /// the local message list is only ever grown by the push feed.
    pub async fn send(&mut self, author: &UserProfile, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        let message = ChatMessage::new(
            self.project_id,
            author.id,
            author.username.clone(),
            text.to_string(),
        );
        if let Err(e) = self.backend.send_chat_message(message).await {
            tracing::error!("Error sending chat message: {}", e);
            self.notices.error("Failed to send message");
        }
    }
}
