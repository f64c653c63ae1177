//! Library exports for rolekit-cli.
//!
//! This module exports the CLI structure so tests and tooling can inspect
//! the command definitions.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
