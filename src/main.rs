// cli-creator - JavaScript CLI project scaffolder
// Main CLI entry point

use clap::Parser;
use std::process;
use cli_creator::cli::{Cli, CliDispatcher};
use cli_creator::utils::error::UserError;
use cli_creator::utils::logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = CliDispatcher::execute(&cli).await;

    if let Err(err) = result {
        let user_error = UserError::from_scaffold_error(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
