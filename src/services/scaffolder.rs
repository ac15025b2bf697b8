use std::fmt;
use crate::cli::progress::StageSpinner;
use crate::cli::prompt::NamePrompt;
use crate::cli::title::display_title;
use crate::models::dependency::{DEV_DEPENDENCIES, RUNTIME_DEPENDENCIES};
use crate::models::project::ProjectDescriptor;
use crate::services::package_manager::PackageManager;
use crate::services::project_directory::create_directory;
use crate::services::template_materializer::materialize;
use crate::utils::config::Settings;
use crate::utils::error::{Result, ScaffoldError};

/// One fallible step of the scaffolding pipeline, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    CreateDirectory,
    InitPackage,
    InstallDependencies,
    InstallDevDependencies,
    MaterializeTemplate,
}

impl Stage {
    pub const ALL: [Self; 5] = [
        Self::CreateDirectory,
        Self::InitPackage,
        Self::InstallDependencies,
        Self::InstallDevDependencies,
        Self::MaterializeTemplate,
    ];

    /// Spinner text shown while the stage runs
    pub const fn message(self) -> &'static str {
        match self {
            Self::CreateDirectory => "Creating application directory",
            Self::InitPackage => "Initializing application directory",
            Self::InstallDependencies => "Installing dependencies",
            Self::InstallDevDependencies => "Installing development dependencies",
            Self::MaterializeTemplate => "Creating template application",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Prints the banner; runs before anything touches the filesystem
pub type TitleRenderer = fn() -> Result<()>;

/// Runs the whole pipeline: title, prompt, normalization, then every stage
/// in order, stopping at the first failure. Nothing is retried or rolled back.
pub struct Scaffolder<P, Q> {
    settings: Settings,
    package_manager: P,
    prompt: Q,
    title: Option<TitleRenderer>,
}

impl<P: PackageManager, Q: NamePrompt> Scaffolder<P, Q> {
    pub fn new(settings: Settings, package_manager: P, prompt: Q) -> Self {
        Self {
            settings,
            package_manager,
            prompt,
            title: Some(display_title as TitleRenderer),
        }
    }

    /// Replace the banner renderer
    pub fn with_title(mut self, title: TitleRenderer) -> Self {
        self.title = Some(title);
        self
    }

    /// Skip the banner
    pub fn without_title(mut self) -> Self {
        self.title = None;
        self
    }

    pub fn package_manager(&self) -> &P {
        &self.package_manager
    }

    pub async fn run(&self) -> Result<ProjectDescriptor> {
        if let Some(title) = self.title {
            title()?;
        }

        let raw_name = self.prompt.ask_app_name().await?;
        let descriptor = ProjectDescriptor::new(raw_name, &self.settings.base_dir);
        tracing::info!(
            raw = %descriptor.raw_name,
            name = %descriptor.normalized_name,
            path = %descriptor.absolute_path.display(),
            "Scaffolding project"
        );

        self.run_stages(descriptor).await
    }

    /// Run every stage against `descriptor`, handing it back on success
    pub async fn run_stages(&self, descriptor: ProjectDescriptor) -> Result<ProjectDescriptor> {
        for stage in Stage::ALL {
            let spinner = StageSpinner::start(stage.message());
            tracing::info!(stage = %stage, "Stage started");

            if let Err(source) = self.run_stage(stage, &descriptor).await {
                spinner.fail();
                if stage != Stage::CreateDirectory {
                    tracing::warn!(
                        path = %descriptor.absolute_path.display(),
                        "Partially created project left on disk"
                    );
                }
                return Err(ScaffoldError::StageFailed {
                    stage,
                    source: Box::new(source),
                });
            }

            spinner.succeed();
            tracing::info!(stage = %stage, "Stage finished");
        }

        Ok(descriptor)
    }

    async fn run_stage(&self, stage: Stage, descriptor: &ProjectDescriptor) -> Result<()> {
        let project_dir = descriptor.absolute_path.as_path();

        match stage {
            Stage::CreateDirectory => create_directory(descriptor).await.map(|_| ()),
            Stage::InitPackage => self.package_manager.init(project_dir).await,
            Stage::InstallDependencies => {
                self.package_manager.install(project_dir, &RUNTIME_DEPENDENCIES).await
            }
            Stage::InstallDevDependencies => {
                self.package_manager.install(project_dir, &DEV_DEPENDENCIES).await
            }
            Stage::MaterializeTemplate => {
                materialize(descriptor, &self.settings.template).await.map(|_| ())
            }
        }
    }
}
