use console::style;
use crate::cli::prompt::TerminalPrompt;
use crate::models::project::ProjectDescriptor;
use crate::services::package_manager::NpmCli;
use crate::services::scaffolder::Scaffolder;
use crate::utils::config::Settings;
use crate::utils::error::Result;

/// Interactive scaffolding run against the real terminal and package manager
#[derive(Debug, Default)]
pub struct CreateCommand;

impl CreateCommand {
    pub async fn run(&self) -> Result<()> {
        let settings = Settings::load()?;
        let npm = NpmCli::with_program(settings.package_manager.clone());
        let scaffolder = Scaffolder::new(settings, npm, TerminalPrompt);

        let descriptor = scaffolder.run().await?;
        print_summary(&descriptor);
        Ok(())
    }
}

fn print_summary(descriptor: &ProjectDescriptor) {
    println!();
    println!(
        "Created {} at {}",
        style(&descriptor.normalized_name).green().bold(),
        descriptor.absolute_path.display()
    );
    println!("Build it with:");
    println!("  cd {}", descriptor.absolute_path.display());
    println!("  npx babel src -d lib && node lib/index.js");
}
