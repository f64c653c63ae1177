//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, DocumentCommand, TestCommand};
use clap::{Parser, Subcommand};

/// CI helper for Ansible role collections.
#[derive(Parser)]
#[command(name = "rolekit")]
#[command(
    version,
    about = "Test changed Ansible roles and generate role documentation",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Only report errors
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Run molecule scenarios for roles changed between two revisions
    Test(TestCommand),

    /// Generate Markdown documentation from role argument specs
    Document(DocumentCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
