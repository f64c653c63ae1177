//! Utility functions for CLI operations.

use crate::error::CliError;
use std::path::{Component, Path};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Verbosity is applied once in main.rs via init_logger
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Only report errors.
    pub quiet: bool,
}

/// Check that `role` names a single directory entry.
///
/// Role names end up in file names (`role_<name>_doc.md`) and are joined
/// onto the roles and molecule directories, so separators and `..` are
/// rejected.
pub fn validate_role_name(role: &str) -> Result<(), CliError> {
    let mut components = Path::new(role).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(CliError::InvalidArguments(format!(
            "'{role}' is not a valid role name"
        ))),
    }
}
