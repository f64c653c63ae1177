//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `test`: Run molecule scenarios for changed roles
//! - `document`: Generate role documentation pages
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod document;

pub use completions::CompletionsCommand;
pub use document::DocumentCommand;
pub use test::TestCommand;
