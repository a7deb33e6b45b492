//! Error types for preview rendering and settings persistence.

use std::path::PathBuf;
use thiserror::Error;

/// Message type code that is not one of the known kinds
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown message type: {0}")]
pub struct MessageKindError(pub String);

/// Theme values that cannot be turned into drawable colors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("Invalid hex color {0:?} (expected #rrggbb)")]
    InvalidColor(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}

/// Settings load/save failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    NoConfigDir,

    #[error("Failed to access settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed settings file: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Theme(#[from] ThemeError),
}

impl ConfigError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
