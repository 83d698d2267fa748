use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;

/// One internal project update from the static project data file.
/// Loaded once at startup, read-only thereafter.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectUpdate {
    pub title: String,
    pub status: String,
}

/// Loads the project-update list from a JSON array file.
///
/// A missing or malformed file is a configuration error: the interactive
/// variant cannot run without its update feed, so callers treat this as
/// fatal at startup.
pub fn load_updates(path: impl AsRef<Path>) -> Result<Vec<ProjectUpdate>, AppError> {
    let path = path.as_ref();

    let raw = std::fs::read_to_string(path).map_err(|e| {
        AppError::Configuration(format!(
            "Failed to read project data file '{}': {e}",
            path.display()
        ))
    })?;

    let updates: Vec<ProjectUpdate> = serde_json::from_str(&raw).map_err(|e| {
        AppError::Configuration(format!(
            "Invalid project data in '{}': {e}",
            path.display()
        ))
    })?;

    info!("Loaded {} project updates from {}", updates.len(), path.display());
    Ok(updates)
}
