//! Main entry point for the rolekit CLI.
//!
//! This is the command-line interface for the rolekit CI helper.
//! It provides commands for an Ansible role collection:
//! - `test`: Run molecule scenarios for roles changed between two revisions
//! - `document`: Generate Markdown pages from role argument specs
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Install the stderr logger before any library call logs
    rolekit::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    let result = match cli.command {
        cli::Command::Test(cmd) => cmd.execute(&global),
        cli::Command::Document(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            log::error!("{e}");
            std::process::exit(e.exit_code());
        }
    }
}
