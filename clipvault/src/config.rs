//! src/config.rs
//! ============================================================================
//! # Config: Application Configuration Loader and Saver
//!
//! Loads and saves settings as TOML from the platform config path using the
//! [`directories`](https://docs.rs/directories) crate. Every section is
//! optional; missing keys fall back to defaults.
//!
//! ```toml
//! [poller]
//! interval = "500ms"
//!
//! [ui]
//! tick_interval = "100ms"
//! max_preview_lines = 3
//!
//! [logging]
//! level = "info"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use clipvault_core::PollerConfig;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tokio::fs as TokioFs;
use tracing::info;

use crate::error::AppError;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "clipvault";
const APPLICATION: &str = "clipvault";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Display settings for the history view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How often the UI drains the change queue.
    #[serde(with = "humantime_serde")]
    pub tick_interval: Duration,

    /// Lines shown per history row before it is cut with an ellipsis.
    pub max_preview_lines: usize,

    /// Optional decorative banner shown above the history.
    pub banner_path: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(100),
            max_preview_lines: 3,
            banner_path: project_dirs().map(|d| d.config_dir().join("banner.txt")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub log_dir: PathBuf,

    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,

    pub file_prefix: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: project_dirs()
                .map(|d| d.data_local_dir().join("logs"))
                .unwrap_or_else(|| PathBuf::from("logs")),
            level: "info".to_string(),
            file_prefix: "clipvault".to_string(),
        }
    }
}

/// Main configuration struct for the application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub poller: PollerConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub logging: LogConfig,
}

impl Config {
    /// Loads config from the platform config dir, writing defaults if the
    /// file does not exist yet.
    pub async fn load() -> Result<Self, AppError> {
        let path = Self::config_path()?;
        if TokioFs::try_exists(&path).await? {
            Self::load_from(&path).await
        } else {
            info!(
                "No config file found at {}, using default configuration. Creating it now.",
                path.display()
            );

            let default_config = Self::default();
            default_config.save_to(&path).await?;
            Ok(default_config)
        }
    }

    pub async fn load_from(path: &Path) -> Result<Self, AppError> {
        info!("Loading config from {}", path.display());
        let text = TokioFs::read_to_string(path).await?;
        Ok(toml::from_str(&text)?)
    }

    pub async fn save_to(&self, path: &Path) -> Result<(), AppError> {
        info!("Saving config to {}", path.display());

        if let Some(parent) = path.parent() {
            TokioFs::create_dir_all(parent).await?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        TokioFs::write(path, toml_str).await?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf, AppError> {
        let dirs = project_dirs().ok_or(AppError::ConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        TokioFs::write(
            &path,
            "[poller]\ninterval = \"1s\"\n\n[ui]\nmax_preview_lines = 5\n",
        )
        .await
        .unwrap();

        let cfg = Config::load_from(&path).await.unwrap();
        assert_eq!(cfg.poller.interval, Duration::from_secs(1));
        assert_eq!(cfg.ui.max_preview_lines, 5);
        assert_eq!(cfg.ui.tick_interval, Duration::from_millis(100));
        assert_eq!(cfg.logging.level, "info");
    }

    #[tokio::test]
    async fn saved_file_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.ui.banner_path = None;
        cfg.poller.interval = Duration::from_millis(750);
        cfg.save_to(&path).await.unwrap();

        assert_eq!(Config::load_from(&path).await.unwrap(), cfg);
    }

    #[tokio::test]
    async fn invalid_toml_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        TokioFs::write(&path, "[poller\ninterval = ").await.unwrap();

        let err = Config::load_from(&path).await.unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
