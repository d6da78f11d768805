//! src/error.rs
//! ============================================================================
//! # `AppError`: Unified Error Type for the Clipboard History App
//!
//! Wraps library errors from `clipvault-core` alongside the application's own
//! failure modes (configuration, terminal, optional assets).

use std::{io, path::PathBuf};

use clipvault_core::ClipError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Clipboard or history error from the core crate.
    #[error(transparent)]
    Clip(#[from] ClipError),

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// TOML config serialization error.
    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Platform config directory could not be determined.
    #[error("Could not determine config directory")]
    ConfigDir,

    /// Optional decorative asset could not be loaded. Never fatal.
    #[error("Failed to load asset {path:?}: {source}")]
    AssetLoad {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Drawing to the terminal failed.
    #[error("Terminal error: {0}")]
    Terminal(#[source] io::Error),
}

impl AppError {
    pub fn asset_load<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::AssetLoad {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_errors_keep_path_and_source() {
        let err = AppError::asset_load("banner.txt", io::Error::from(io::ErrorKind::NotFound));
        assert!(err.to_string().contains("banner.txt"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn clip_errors_display_transparently() {
        let err = AppError::from(ClipError::NothingSelected);
        assert_eq!(err.to_string(), "No text selected.");
    }
}
