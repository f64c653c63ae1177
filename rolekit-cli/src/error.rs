//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use std::fmt;
use rolekit::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Arguments that parsed but make no sense together.
    InvalidArguments(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: An external command (git, molecule) failed
    /// - 2: Invalid arguments (same code clap uses for usage errors)
    /// - 3: A required directory is missing or not a directory
    /// - 4: A spec, playbook or template file is missing or malformed
    /// - 5: Template rendering failed
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArguments(_) => 2,
            CliError::Library(lib_err) => match lib_err {
                LibError::ProcessFailure { .. } | LibError::Spawn { .. } => 1,
                LibError::InvalidParent { .. } | LibError::InvalidDirectory { .. } => 3,
                LibError::FileNotFound { .. }
                | LibError::Yaml { .. }
                | LibError::MissingArgumentSpec { .. }
                | LibError::Io(_) => 4,
                LibError::Template(_) => 5,
            },
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::InvalidArguments(_) => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}
