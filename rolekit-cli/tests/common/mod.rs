//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - A git repository builder for change detection scenarios
//! - Role collection fixtures for documentation scenarios

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use tempfile::TempDir;

/// A minimal argument spec with one option.
#[allow(dead_code)]
pub const SIMPLE_SPEC: &str = r"---
argument_specs:
  main:
    short_description: Example role
    options:
      example_port:
        type: int
        default: 8080
        description: Port the example listens on.
";

/// Test environment rooted in a temporary directory.
///
/// Commands built from it run with the temporary directory as working
/// directory and without any rolekit-related environment variables leaking
/// in from the caller.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub root: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new, empty test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self { temp_dir, root }
    }

    /// Get a command builder for the rolekit binary, running in `root`.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("rolekit").expect("Failed to find rolekit binary");
        cmd.current_dir(&self.root)
            .env_remove("COMPARED_BRANCH")
            .env_remove("CI_COMMIT_SHA")
            .env_remove("ROLEKIT_MOLECULE")
            .env_remove("ROLEKIT_LOG_MODE");
        cmd
    }

    /// Write `contents` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Create a directory under the root.
    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let path = self.root.join(relative);
        fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }

    /// Path under the root.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Add a documented role: argument spec plus molecule converge playbook.
    pub fn add_documented_role(&self, role: &str) {
        self.write(&format!("roles/{role}/meta/argument_specs.yml"), SIMPLE_SPEC);
        self.write(
            &format!("molecule/{role}/converge.yml"),
            &format!("---\n- name: Converge\n  hosts: all\n  roles:\n    - {role}\n"),
        );
    }

    /// Initialize a git repository with a test identity.
    pub fn git_init(&self) {
        run_git(&self.root, &["init", "--quiet"]);
        run_git(&self.root, &["config", "user.name", "Test User"]);
        run_git(&self.root, &["config", "user.email", "test@example.com"]);
        run_git(&self.root, &["config", "commit.gpgsign", "false"]);
    }

    /// Stage everything and commit.
    pub fn git_commit_all(&self, message: &str) {
        run_git(&self.root, &["add", "--all"]);
        run_git(&self.root, &["commit", "--quiet", "-m", message]);
    }
}

/// Run git in `dir`, panicking with its stderr on failure.
pub fn run_git(dir: &Path, args: &[&str]) {
    let output = process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}
