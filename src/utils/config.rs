// Configuration loading: defaults, optional TOML file, environment overrides

use std::fs;
use std::path::{Path, PathBuf};
use serde::Deserialize;
use crate::utils::error::{Result, ScaffoldError};

pub const CONFIG_FILE_ENV: &str = "CLI_CREATOR_CONFIG";
pub const BASE_DIR_ENV: &str = "CLI_CREATOR_BASE_DIR";
pub const TEMPLATE_DIR_ENV: &str = "CLI_CREATOR_TEMPLATE_DIR";
pub const PACKAGE_MANAGER_ENV: &str = "CLI_CREATOR_PACKAGE_MANAGER";

pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";

/// Where the template tree is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// The tree compiled into the binary
    Embedded,
    /// A directory on disk, copied as-is
    Directory(PathBuf),
}

/// Resolved runtime settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory new projects are created in
    pub base_dir: PathBuf,
    pub template: TemplateSource,
    /// Package manager program name or path
    pub package_manager: String,
}

/// Optional keys accepted in the TOML config file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    pub base_dir: Option<PathBuf>,
    pub template_dir: Option<PathBuf>,
    pub package_manager: Option<String>,
}

impl Settings {
    /// Settings with the embedded template and the default package manager
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            template: TemplateSource::Embedded,
            package_manager: DEFAULT_PACKAGE_MANAGER.to_string(),
        }
    }

    pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template = TemplateSource::Directory(dir.into());
        self
    }

    pub fn with_package_manager(mut self, program: impl Into<String>) -> Self {
        self.package_manager = program.into();
        self
    }

    /// Resolve settings for the running process
    pub fn load() -> Result<Self> {
        let mut settings = Self::new(default_base_dir()?);

        if let Some(path) = env_value(CONFIG_FILE_ENV) {
            settings.apply_file(load_settings_file(Path::new(&path))?);
        }

        settings.apply_overrides(
            env_value(BASE_DIR_ENV),
            env_value(TEMPLATE_DIR_ENV),
            env_value(PACKAGE_MANAGER_ENV),
        );

        tracing::debug!(
            base_dir = %settings.base_dir.display(),
            template = ?settings.template,
            package_manager = %settings.package_manager,
            "Settings resolved"
        );

        Ok(settings)
    }

    fn apply_file(&mut self, file: SettingsFile) {
        if let Some(base_dir) = file.base_dir {
            self.base_dir = base_dir;
        }
        if let Some(template_dir) = file.template_dir {
            self.template = TemplateSource::Directory(template_dir);
        }
        if let Some(package_manager) = file.package_manager {
            self.package_manager = package_manager;
        }
    }

    fn apply_overrides(
        &mut self,
        base_dir: Option<String>,
        template_dir: Option<String>,
        package_manager: Option<String>,
    ) {
        self.apply_file(SettingsFile {
            base_dir: base_dir.map(PathBuf::from),
            template_dir: template_dir.map(PathBuf::from),
            package_manager,
        });
    }
}

/// Parent of the directory the executable lives in, so projects land next
/// to the tool's own installation directory
pub fn default_base_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let install_dir = exe.parent().ok_or_else(|| {
        ScaffoldError::ConfigError(format!("Executable path has no parent: {}", exe.display()))
    })?;

    Ok(install_dir
        .parent()
        .unwrap_or(install_dir)
        .to_path_buf())
}

/// Parse a settings file
pub fn load_settings_file(path: &Path) -> Result<SettingsFile> {
    let content = fs::read_to_string(path)
        .map_err(|e| ScaffoldError::ConfigError(format!("Failed to read {}: {}", path.display(), e)))?;

    parse_settings_file(&content)
}

pub fn parse_settings_file(content: &str) -> Result<SettingsFile> {
    toml::from_str(content)
        .map_err(|e| ScaffoldError::ConfigError(format!("Invalid configuration file: {e}")))
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}
