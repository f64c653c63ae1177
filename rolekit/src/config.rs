//! Configuration values for change detection and scenario testing.
//!
//! Environment variables are read once at the process boundary (the CLI)
//! and handed to the library as explicit values. Nothing in the library
//! reads the environment on its own.

use std::path::PathBuf;

/// Environment variable naming the revision to compare against.
pub const COMPARED_BRANCH_ENV: &str = "COMPARED_BRANCH";

/// Environment variable naming the revision under test.
pub const COMMIT_SHA_ENV: &str = "CI_COMMIT_SHA";

/// Default origin revision.
pub const DEFAULT_ORIGIN: &str = "main";

/// Default current revision.
pub const DEFAULT_CURRENT: &str = "HEAD";

/// Default scenario test program.
pub const DEFAULT_SCENARIO_PROGRAM: &str = "molecule";

/// Arguments placed before the role name by default.
pub const DEFAULT_SCENARIO_ARGS: [&str; 2] = ["test", "--scenario-name"];

/// Directories watched for changes when none are given.
pub const DEFAULT_PARENTS: [&str; 2] = ["molecule", "roles"];

/// Returns [`DEFAULT_PARENTS`] as owned paths.
#[must_use]
pub fn default_parents() -> Vec<PathBuf> {
    DEFAULT_PARENTS.iter().map(PathBuf::from).collect()
}

/// The two revisions whose difference drives change detection.
///
/// # Examples
///
/// ```
/// use rolekit::ChangeRange;
///
/// let range = ChangeRange::new("origin/main", "abc123");
/// assert_eq!(range.origin, "origin/main");
/// assert_eq!(range.current, "abc123");
///
/// let range = ChangeRange::default();
/// assert_eq!(range.origin, "main");
/// assert_eq!(range.current, "HEAD");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRange {
    /// Revision compared against (usually the target branch).
    pub origin: String,
    /// Revision under test (usually the pipeline commit).
    pub current: String,
}

impl ChangeRange {
    /// Creates a range from explicit revisions.
    pub fn new(origin: impl Into<String>, current: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            current: current.into(),
        }
    }
}

impl Default for ChangeRange {
    fn default() -> Self {
        Self::new(DEFAULT_ORIGIN, DEFAULT_CURRENT)
    }
}

/// The external scenario test command, run once per role.
///
/// # Examples
///
/// ```
/// use rolekit::ScenarioCommand;
///
/// let cmd = ScenarioCommand::default();
/// assert_eq!(cmd.program, "molecule");
/// assert_eq!(cmd.args_for("nginx"), vec!["test", "--scenario-name", "nginx"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioCommand {
    /// Program to execute.
    pub program: String,
    /// Arguments placed before the role name.
    pub args: Vec<String>,
}

impl ScenarioCommand {
    /// Creates a scenario command running `program test --scenario-name`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: DEFAULT_SCENARIO_ARGS.iter().map(|a| (*a).to_string()).collect(),
        }
    }

    /// Arguments that run the scenario named after `role`.
    #[must_use]
    pub fn args_for(&self, role: &str) -> Vec<String> {
        let mut args = self.args.clone();
        args.push(role.to_string());
        args
    }
}

impl Default for ScenarioCommand {
    fn default() -> Self {
        Self::new(DEFAULT_SCENARIO_PROGRAM)
    }
}
