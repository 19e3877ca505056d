//! Account settings.
//!
//! Username changes go through the backend's single atomic upsert; the
//! unique constraint lives server-side, so there is no check-then-insert
//! round trip to race against. A conflict comes back as an error, not as a
//! stale pre-check.

use std::sync::Arc;

use scrum_backend::ProjectBackend;
use scrum_core::ScrumError;

use crate::context::AppContext;
use crate::notice::NoticeLog;

pub struct AccountSettings {
    backend: Arc<dyn ProjectBackend>,
    pub notices: NoticeLog,
}

impl AccountSettings {
    pub fn new(backend: Arc<dyn ProjectBackend>) -> Self {
        Self {
            backend,
            notices: NoticeLog::new(),
        }
    }

    /// Change the logged-in user's username.
    ///
    /// On success the cached session profile is replaced; on any failure the
    /// session keeps the old profile and a notice is raised.
    pub async fn change_username(&mut self, ctx: &mut AppContext, new_username: &str) {
        let new_username = new_username.trim();
        if new_username.is_empty() {
            self.notices.error("Username cannot be empty");
            return;
        }

        let Some(session) = ctx.session() else {
            self.notices.error("Not logged in");
            return;
        };

        let mut profile = session.profile.clone();
        profile.username = new_username.to_string();

        match self.backend.upsert_profile(profile).await {
            Ok(saved) => {
                ctx.replace_profile(saved);
                self.notices.success("Username updated");
            }
            Err(ScrumError::Conflict(_)) => {
                self.notices.error("Username already taken");
            }
            Err(e) => {
                tracing::error!("Error updating profile: {}", e);
                self.notices.error("Failed to update username");
            }
        }
    }
}
