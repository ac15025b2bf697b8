use std::path::{Path, PathBuf};
use tokio::process::Command;
use crate::models::dependency::DependencySet;
use crate::utils::error::{Result, ScaffoldError};

/// Capability to initialize a manifest and install packages in a project
#[allow(async_fn_in_trait)]
pub trait PackageManager {
    /// Create the manifest non-interactively inside `project_dir`
    async fn init(&self, project_dir: &Path) -> Result<()>;

    /// Install every package of `dependencies` inside `project_dir`
    async fn install(&self, project_dir: &Path, dependencies: &DependencySet) -> Result<()>;
}

/// Package manager backed by the npm command line
#[derive(Debug, Clone)]
pub struct NpmCli {
    program: String,
}

impl NpmCli {
    pub fn new() -> Self {
        Self::with_program("npm")
    }

    /// Use another npm-compatible program (name on PATH or explicit path)
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn resolve_program(&self, command_line: &str) -> Result<PathBuf> {
        which::which(&self.program).map_err(|e| ScaffoldError::PackageManagerError {
            command: command_line.to_string(),
            detail: format!("'{}' not found on PATH ({e})", self.program),
        })
    }

    async fn execute(&self, project_dir: &Path, args: &[String]) -> Result<String> {
        let command_line = format!("{} {}", self.program, args.join(" "));
        let program = self.resolve_program(&command_line)?;

        tracing::debug!(command = %command_line, dir = %project_dir.display(), "Running package manager");

        let output = Command::new(&program)
            .args(args)
            .current_dir(project_dir)
            .output()
            .await
            .map_err(|e| ScaffoldError::PackageManagerError {
                command: command_line.clone(),
                detail: e.to_string(),
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let detail = if stderr.is_empty() {
                format!("exited with {}", output.status)
            } else {
                stderr
            };

            Err(ScaffoldError::PackageManagerError {
                command: command_line,
                detail,
            })
        }
    }
}

impl Default for NpmCli {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageManager for NpmCli {
    async fn init(&self, project_dir: &Path) -> Result<()> {
        self.execute(project_dir, &init_args()).await?;
        Ok(())
    }

    async fn install(&self, project_dir: &Path, dependencies: &DependencySet) -> Result<()> {
        self.execute(project_dir, &install_args(dependencies)).await?;
        Ok(())
    }
}

/// Arguments for a non-interactive `init`
pub fn init_args() -> Vec<String> {
    vec!["init".to_string(), "-y".to_string()]
}

/// Arguments installing `dependencies`, saved as dev dependencies when needed
pub fn install_args(dependencies: &DependencySet) -> Vec<String> {
    let mut args = vec!["install".to_string()];
    if dependencies.is_dev() {
        args.push("--save-dev".to_string());
    }
    args.extend(dependencies.packages.iter().map(|name| (*name).to_string()));
    args
}
