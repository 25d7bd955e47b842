//! Loading and persisting Redline settings.
//!
//! Settings live in `~/.redline/settings.toml`. Loading is tolerant: a
//! missing or unparsable file falls back to defaults with a warning rather
//! than failing the application. Saves are atomic (temp file + rename).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::sync::RwLock;

use crate::schema::RedlineSettings;

/// Default path of the settings file, if a home directory exists.
pub fn settings_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".redline").join("settings.toml"))
}

/// Manages settings loading and persistence.
pub struct SettingsManager {
    settings: RwLock<RedlineSettings>,
    config_path: PathBuf,
}

impl SettingsManager {
    /// Create a manager backed by the default settings path.
    pub async fn new() -> Result<Self> {
        let config_path = settings_path().context("could not determine home directory")?;
        Ok(Self::with_path(config_path).await)
    }

    /// Create a manager backed by an explicit path. Used by tests and
    /// embedders with their own configuration directory.
    pub async fn with_path(config_path: PathBuf) -> Self {
        let settings = Self::load_from_path(&config_path).await;
        Self {
            settings: RwLock::new(settings),
            config_path,
        }
    }

    /// Load settings from a path, returning defaults if the file is missing
    /// or malformed.
    async fn load_from_path(path: &Path) -> RedlineSettings {
        if !path.exists() {
            return RedlineSettings::default();
        }

        match tokio::fs::read_to_string(path).await {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(settings) => {
                    tracing::debug!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    tracing::warn!("Failed to parse settings {:?}: {}", path, e);
                    RedlineSettings::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read settings {:?}: {}", path, e);
                RedlineSettings::default()
            }
        }
    }

    /// Get the current settings.
    pub async fn get(&self) -> RedlineSettings {
        *self.settings.read().await
    }

    /// Replace the settings and persist them to disk.
    pub async fn update(&self, new_settings: RedlineSettings) -> Result<()> {
        *self.settings.write().await = new_settings;
        self.save().await
    }

    /// Write a default settings file on first run, if none exists.
    pub async fn ensure_settings_file(&self) -> Result<()> {
        if self.config_path.exists() {
            return Ok(());
        }
        self.save().await
    }

    /// Persist the current settings atomically.
    async fn save(&self) -> Result<()> {
        let settings = *self.settings.read().await;
        let contents = toml::to_string_pretty(&settings).context("serialize settings")?;

        if let Some(parent) = self.config_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("create settings directory {:?}", parent))?;
        }

        let tmp_path = self.config_path.with_extension("toml.tmp");
        tokio::fs::write(&tmp_path, &contents)
            .await
            .with_context(|| format!("write settings to {:?}", tmp_path))?;
        tokio::fs::rename(&tmp_path, &self.config_path)
            .await
            .with_context(|| format!("rename settings into {:?}", self.config_path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SettingsManager::with_path(dir.path().join("settings.toml")).await;
        assert_eq!(manager.get().await, RedlineSettings::default());
    }

    #[tokio::test]
    async fn test_malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        tokio::fs::write(&path, "not valid toml [[[").await.unwrap();
        let manager = SettingsManager::with_path(path).await;
        assert_eq!(manager.get().await, RedlineSettings::default());
    }

    #[tokio::test]
    async fn test_update_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let manager = SettingsManager::with_path(path.clone()).await;
        let mut settings = manager.get().await;
        settings.diff.pairing_window = 7;
        manager.update(settings).await.unwrap();

        let reloaded = SettingsManager::with_path(path).await;
        assert_eq!(reloaded.get().await.diff.pairing_window, 7);
    }

    #[tokio::test]
    async fn test_ensure_settings_file_writes_template_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let manager = SettingsManager::with_path(path.clone()).await;
        manager.ensure_settings_file().await.unwrap();
        assert!(path.exists());

        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        let parsed: RedlineSettings = toml::from_str(&contents).unwrap();
        assert_eq!(parsed, RedlineSettings::default());
    }
}
