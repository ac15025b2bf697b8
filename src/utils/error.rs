// Common error types for cli-creator

use std::path::PathBuf;
use console::style;
use thiserror::Error;
use crate::services::scaffolder::Stage;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to create directory {}: {source}", .path.display())]
    DirectoryError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Command `{command}` failed: {detail}")]
    PackageManagerError { command: String, detail: String },

    #[error("Prompt error: {0}")]
    PromptError(String),

    #[error("Template error: {0}")]
    TemplateError(String),

    #[error("Banner error: {0}")]
    BannerError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{stage} failed: {source}")]
    StageFailed {
        stage: Stage,
        #[source]
        source: Box<ScaffoldError>,
    },
}

impl ScaffoldError {
    /// The stage that failed, if the error came out of the pipeline driver
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::StageFailed { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Error as presented to the person running the tool
#[derive(Debug)]
pub struct UserError {
    pub message: String,
    pub exit_code: i32,
}

impl UserError {
    pub fn from_scaffold_error(err: &ScaffoldError) -> Self {
        Self {
            message: err.to_string(),
            exit_code: 1,
        }
    }

    pub fn print(&self) {
        println!("{}", style(&self.message).red().bright());
    }
}
