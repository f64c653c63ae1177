//! Error types for the rolekit library.
//!
//! This module provides the error hierarchy for all operations in the
//! rolekit library, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a rolekit error.
///
/// # Examples
///
/// ```
/// use rolekit::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("roles".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the rolekit library.
///
/// Variants fall into four groups: precondition failures on input
/// directories, external process failures, file failures, and template
/// failures.
#[derive(Debug, Error)]
pub enum Error {
    /// A watched parent directory does not exist or is not a directory.
    #[error("parent directory does not exist or is invalid: {}", path.display())]
    InvalidParent {
        /// The offending parent path.
        path: PathBuf,
    },

    /// A required input directory is missing or unusable.
    #[error("invalid directory {}: {reason}", path.display())]
    InvalidDirectory {
        /// The offending directory.
        path: PathBuf,
        /// Why the directory was rejected.
        reason: String,
    },

    /// An external command exited with a non-zero status.
    #[error("command `{command}` failed with {}", describe_code(*.code))]
    ProcessFailure {
        /// The command line, shell-quoted.
        command: String,
        /// The exit code, or `None` if the process was killed by a signal.
        code: Option<i32>,
        /// Captured standard output.
        stdout: String,
        /// Captured standard error.
        stderr: String,
    },

    /// An external command could not be started at all.
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        /// The program that failed to start.
        program: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A required file does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// The missing file.
        path: PathBuf,
    },

    /// A YAML file could not be parsed.
    #[error("failed to parse {}: {source}", path.display())]
    Yaml {
        /// The file being parsed.
        path: PathBuf,
        /// The underlying parser error.
        #[source]
        source: serde_yaml::Error,
    },

    /// An argument spec file has no `argument_specs.main` section.
    #[error("no argument_specs.main section in {}", path.display())]
    MissingArgumentSpec {
        /// The argument spec file.
        path: PathBuf,
    },

    /// A documentation template failed to load or render.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl Error {
    /// Check if error is a precondition failure on an input directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use rolekit::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::InvalidParent { path: PathBuf::from("roles") };
    /// assert!(err.is_precondition());
    /// ```
    #[must_use]
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::InvalidParent { .. } | Self::InvalidDirectory { .. }
        )
    }

    /// Check if error comes from an external process.
    #[must_use]
    pub fn is_process_failure(&self) -> bool {
        matches!(self, Self::ProcessFailure { .. } | Self::Spawn { .. })
    }

    /// Check if error is a file failure (missing, unreadable or malformed).
    ///
    /// # Examples
    ///
    /// ```
    /// use rolekit::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::FileNotFound { path: PathBuf::from("converge.yml") };
    /// assert!(err.is_file_failure());
    /// ```
    #[must_use]
    pub fn is_file_failure(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound { .. }
                | Self::Yaml { .. }
                | Self::MissingArgumentSpec { .. }
                | Self::Io(_)
        )
    }
}
