use std::path::PathBuf;
use tokio::fs;
use crate::models::project::ProjectDescriptor;
use crate::utils::error::{Result, ScaffoldError};

/// Create the project directory. The parent must already exist and the
/// target must not; nothing is created on failure.
pub async fn create_directory(descriptor: &ProjectDescriptor) -> Result<PathBuf> {
    let path = descriptor.absolute_path.clone();

    fs::create_dir(&path)
        .await
        .map_err(|source| ScaffoldError::DirectoryError {
            path: path.clone(),
            source,
        })?;

    tracing::info!(path = %path.display(), "Created project directory");
    Ok(path)
}
