//! Storage utilities for Slow Computer apps
//!
//! Per-user config directories and JSON preference files.

use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Get the config directory for Slow Computer apps
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("co", "slowcomputer", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Read and deserialize a JSON file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Serialize `value` as pretty JSON, creating parent directories as needed.
pub fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let contents = serde_json::to_string_pretty(value)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}

/// Load a preference file, falling back to `T::default()`.
///
/// A missing file is not an error: the defaults are written back so the
/// user has something to edit. A file that exists but cannot be parsed is
/// left alone and reported.
pub fn load_or_default<T>(path: &Path) -> T
where
    T: DeserializeOwned + Serialize + Default,
{
    match load_json(path) {
        Ok(value) => value,
        Err(StorageError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            let value = T::default();
            if let Err(e) = save_json(&value, path) {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "could not write default preferences"
                );
            }
            value
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable preferences");
            T::default()
        }
    }
}
