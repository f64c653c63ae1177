//! External process execution.
//!
//! Every git and molecule invocation goes through a [`CommandRunner`]. The
//! trait exists so change detection and test dispatch can be exercised
//! against [`RecordingRunner`] instead of real processes.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::{Error, Result};

/// Captured output of a successful command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Standard output, decoded lossily as UTF-8.
    pub stdout: String,
    /// Standard error, decoded lossily as UTF-8.
    pub stderr: String,
}

impl CommandOutput {
    /// Output with the given stdout and empty stderr.
    pub fn with_stdout(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }
}

/// Trait for running external commands to completion.
pub trait CommandRunner {
    /// Run `program` with `args`, optionally inside `cwd`, and wait for it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProcessFailure`] when the process exits non-zero and
    /// [`Error::Spawn`] when it cannot be started.
    fn run(&self, program: &str, args: &[String], cwd: Option<&Path>) -> Result<CommandOutput>;
}

/// Runs commands as real child processes.
///
/// # Examples
///
/// ```no_run
/// use rolekit::{CommandRunner, SystemRunner};
///
/// let out = SystemRunner
///     .run("git", &["--version".to_string()], None)
///     .unwrap();
/// assert!(out.stdout.starts_with("git version"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String], cwd: Option<&Path>) -> Result<CommandOutput> {
        let command_line = shell_join(program, args);
        log::info!("running command: {command_line}");

        let mut command = Command::new(program);
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        let output = command.output().map_err(|source| Error::Spawn {
            program: program.to_string(),
            source,
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if output.status.success() {
            return Ok(CommandOutput { stdout, stderr });
        }

        log::error!("{stdout}");
        log::error!("{stderr}");
        Err(Error::ProcessFailure {
            command: command_line,
            code: output.status.code(),
            stdout,
            stderr,
        })
    }
}

/// Render a command line for logs, single-quoting words that need it.
///
/// # Examples
///
/// ```
/// use rolekit::runner::shell_join;
///
/// let args = vec!["commit".to_string(), "-m".to_string(), "it's done".to_string()];
/// assert_eq!(shell_join("git", &args), r#"git commit -m 'it'"'"'s done'"#);
/// ```
#[must_use]
pub fn shell_join(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .map(quote)
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote(word: &str) -> String {
    let safe = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "@%+=:,./-_".contains(c));
    if safe {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r#"'"'"'"#))
    }
}

/// One command seen by a [`RecordingRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program name.
    pub program: String,
    /// Arguments in order.
    pub args: Vec<String>,
    /// Working directory, if one was requested.
    pub cwd: Option<PathBuf>,
}

/// A [`CommandRunner`] that records invocations and replays scripted results.
///
/// Results are consumed in order; once the script runs out every further
/// call succeeds with empty output.
///
/// # Examples
///
/// ```
/// use rolekit::runner::RecordingRunner;
/// use rolekit::{CommandOutput, CommandRunner};
///
/// let runner = RecordingRunner::new();
/// runner.push_ok(CommandOutput::with_stdout("roles/foo/tasks/main.yml\n"));
///
/// let out = runner.run("git", &["diff-tree".to_string()], None).unwrap();
/// assert_eq!(out.stdout, "roles/foo/tasks/main.yml\n");
/// assert_eq!(runner.invocations().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordingRunner {
    script: RefCell<VecDeque<Result<CommandOutput>>>,
    calls: RefCell<Vec<Invocation>>,
}

impl RecordingRunner {
    /// Create a runner with an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful result.
    pub fn push_ok(&self, output: CommandOutput) {
        self.script.borrow_mut().push_back(Ok(output));
    }

    /// Queue a failing result.
    pub fn push_err(&self, error: Error) {
        self.script.borrow_mut().push_back(Err(error));
    }

    /// Every invocation seen so far, in call order.
    #[must_use]
    pub fn invocations(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[String], cwd: Option<&Path>) -> Result<CommandOutput> {
        self.calls.borrow_mut().push(Invocation {
            program: program.to_string(),
            args: args.to_vec(),
            cwd: cwd.map(Path::to_path_buf),
        });
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(CommandOutput::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_shell_join_plain_words() {
        assert_eq!(
            shell_join("molecule", &args(&["test", "--scenario-name", "nginx"])),
            "molecule test --scenario-name nginx"
        );
    }

    #[test]
    fn test_shell_join_quotes_spaces_and_empty() {
        assert_eq!(shell_join("echo", &args(&["a b", ""])), "echo 'a b' ''");
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_captures_stdout() {
        let out = SystemRunner
            .run("sh", &args(&["-c", "echo out; echo err >&2"]), None)
            .unwrap();
        assert_eq!(out.stdout, "out\n");
        assert_eq!(out.stderr, "err\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_reports_exit_code_and_streams() {
        let err = SystemRunner
            .run("sh", &args(&["-c", "echo partial; echo broken >&2; exit 3"]), None)
            .unwrap_err();
        match err {
            Error::ProcessFailure {
                code,
                stdout,
                stderr,
                command,
            } => {
                assert_eq!(code, Some(3));
                assert_eq!(stdout, "partial\n");
                assert_eq!(stderr, "broken\n");
                assert!(command.starts_with("sh -c"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_honours_cwd() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker"), "").unwrap();
        let out = SystemRunner.run("ls", &[], Some(dir.path())).unwrap();
        assert!(out.stdout.contains("marker"));
    }

    #[test]
    fn test_system_runner_missing_program() {
        let err = SystemRunner
            .run("rolekit-definitely-not-a-program", &[], None)
            .unwrap_err();
        assert!(matches!(err, Error::Spawn { .. }));
        assert!(err.is_process_failure());
    }

    #[test]
    fn test_recording_runner_replays_script_in_order() {
        let runner = RecordingRunner::new();
        runner.push_ok(CommandOutput::with_stdout("first"));
        runner.push_err(Error::ProcessFailure {
            command: "x".to_string(),
            code: Some(1),
            stdout: String::new(),
            stderr: String::new(),
        });

        assert_eq!(runner.run("a", &[], None).unwrap().stdout, "first");
        assert!(runner.run("b", &[], None).is_err());
        assert_eq!(runner.run("c", &[], None).unwrap(), CommandOutput::default());

        let programs: Vec<_> = runner
            .invocations()
            .into_iter()
            .map(|call| call.program)
            .collect();
        assert_eq!(programs, vec!["a", "b", "c"]);
    }
}
