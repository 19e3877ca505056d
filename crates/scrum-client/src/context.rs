//! Application context.
//!
//! Theme and session state travel through this explicitly passed object
//! rather than ambient global state. The lifecycle is: initialize from the
//! persisted config at startup, mutate on user action (persisting settings as
//! they change), tear the session down at logout.

use chrono::{DateTime, Utc};
use std::path::PathBuf;

use scrum_core::{AppConfig, ScrumResult, Theme};
use scrum_domain::UserProfile;

/// A logged-in user's cached profile. The only client-side state that
/// outlives a single view.
#[derive(Debug, Clone)]
pub struct Session {
    pub profile: UserProfile,
    pub started_at: DateTime<Utc>,
}

pub struct AppContext {
    pub config: AppConfig,
    config_path: Option<PathBuf>,
    session: Option<Session>,
}

impl AppContext {
    /// Startup path: read the persisted config from the platform config dir.
    pub fn initialize() -> Self {
        Self {
            config: AppConfig::load(),
            config_path: AppConfig::config_path(),
            session: None,
        }
    }

    /// Construct against an explicit config file, used by tests and by
    /// anything that should not touch the real config dir.
    pub fn with_config_path(path: PathBuf) -> Self {
        Self {
            config: AppConfig::load_from(&path),
            config_path: Some(path),
            session: None,
        }
    }

    pub fn login(&mut self, profile: UserProfile) {
        self.session = Some(Session {
            profile,
            started_at: Utc::now(),
        });
    }

    pub fn logout(&mut self) {
        self.session = None;
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub(crate) fn replace_profile(&mut self, profile: UserProfile) {
        if let Some(session) = &mut self.session {
            session.profile = profile;
        }
    }

    pub fn theme(&self) -> Theme {
        self.config.theme
    }

    /// Flip the theme and persist the preference immediately.
    pub fn toggle_theme(&mut self) -> ScrumResult<()> {
        self.config.theme = self.config.theme.toggled();
        self.persist_config()
    }

    fn persist_config(&self) -> ScrumResult<()> {
        match &self.config_path {
            Some(path) => self.config.save_to(path),
            None => Ok(()),
        }
    }
}
