use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SnapError>;

#[derive(Debug, Error)]
pub enum SnapError {
    #[error("Unable to connect to the display server: {0}")]
    DisplayUnavailable(String),
    #[error("Display server query failed: {0}")]
    Display(String),
    #[error("The window manager does not publish a client list")]
    EnumerationUnsupported,
    #[error("Session storage at {} is unavailable: {source}", path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("No saved session at {}", path.display())]
    SessionMissing { path: PathBuf },
    #[error("Saved session at {} could not be parsed: {source}", path.display())]
    SessionUnparseable {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Invalid profile name {0:?}")]
    InvalidProfile(String),
    #[error("Unable to launch {command:?}: {source}")]
    ProcessLaunch {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("No window titled {title:?} appeared in time")]
    WindowMatchTimeout { title: String },
}

impl SnapError {
    pub(crate) fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StorageUnavailable {
            path: path.into(),
            source,
        }
    }
}
