// CLI module for command-line interface

pub mod create;
pub mod progress;
pub mod prompt;
pub mod title;

use clap::Parser;
use crate::utils::error::Result;

use self::create::CreateCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "cli-creator")]
#[command(about = "Scaffold a ready-to-build JavaScript command-line application")]
#[command(long_about = r#"Scaffold a ready-to-build JavaScript command-line application.

Asks for an application name, then:
  • creates a directory for it next to the tool's installation directory
  • runs `npm init -y` inside it
  • installs the runtime and Babel development dependencies
  • writes .babelrc and copies the bundled template into src/

Environment:
  CLI_CREATOR_BASE_DIR          Directory new projects are created in
  CLI_CREATOR_TEMPLATE_DIR      Copy this directory instead of the bundled template
  CLI_CREATOR_PACKAGE_MANAGER   npm-compatible program to run (default: npm)
  CLI_CREATOR_CONFIG            TOML file providing the same settings"#)]
#[command(version)]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute the scaffolding run
    pub async fn execute(_cli: &Cli) -> Result<()> {
        CreateCommand.run().await
    }
}
