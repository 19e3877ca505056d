use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{ScrumError, ScrumResult};

/// UI color scheme, persisted across sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Persisted application configuration.
///
/// Loaded once at startup and written back whenever the user changes a
/// setting, so preferences survive restarts. Never held as ambient global
/// state; ownership lives in the application context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub default_project: Option<uuid::Uuid>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/scrum/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("scrum/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("scrum\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            if let Ok(content) = std::fs::read_to_string(path) {
                if let Ok(config) = toml::from_str(&content) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn save_to(&self, path: &Path) -> ScrumResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ScrumError::Serialization(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn save(&self) -> ScrumResult<()> {
        match Self::config_path() {
            Some(path) => self.save_to(&path),
            None => Err(ScrumError::Internal(
                "No config directory available on this platform".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = AppConfig {
            theme: Theme::Dark,
            default_project: Some(uuid::Uuid::new_v4()),
        };
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path);
        assert_eq!(loaded.theme, Theme::Dark);
        assert_eq!(loaded.default_project, config.default_project);
    }

    #[test]
    fn test_load_missing_file_defaults() {
        let dir = tempdir().unwrap();
        let loaded = AppConfig::load_from(&dir.path().join("missing.toml"));
        assert_eq!(loaded.theme, Theme::Light);
        assert!(loaded.default_project.is_none());
    }
}
