//! Common test utilities for integration tests.
//!
//! This module provides a fixture builder for laying out a small role
//! collection on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A minimal argument spec with one option.
#[allow(dead_code)]
pub const SIMPLE_SPEC: &str = r"---
argument_specs:
  main:
    short_description: Example role
    options:
      example_enabled:
        type: bool
        default: true
        description: Turn the example on.
";

/// A minimal molecule converge playbook for `role`.
#[allow(dead_code)]
pub fn converge_playbook(role: &str) -> String {
    format!("---\n- name: Converge\n  hosts: all\n  roles:\n    - {role}\n")
}

/// A role collection rooted in a temporary directory.
///
/// The layout is `roles/`, `molecule/` and (not created) `docs/`.
#[allow(dead_code)]
pub struct CollectionFixture {
    temp_dir: TempDir,
}

#[allow(dead_code)]
impl CollectionFixture {
    /// Creates an empty collection with `roles/` and `molecule/` directories.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join("roles")).expect("Failed to create roles dir");
        fs::create_dir_all(temp_dir.path().join("molecule"))
            .expect("Failed to create molecule dir");
        Self { temp_dir }
    }

    /// Root of the collection.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The `roles/` directory.
    pub fn roles_dir(&self) -> PathBuf {
        self.root().join("roles")
    }

    /// The `molecule/` directory.
    pub fn molecule_dir(&self) -> PathBuf {
        self.root().join("molecule")
    }

    /// The `docs/` output directory.
    pub fn doc_dir(&self) -> PathBuf {
        self.root().join("docs")
    }

    /// Writes `roles/<role>/meta/argument_specs.yml`.
    pub fn with_spec(self, role: &str, spec: &str) -> Self {
        let meta = self.roles_dir().join(role).join("meta");
        fs::create_dir_all(&meta).expect("Failed to create meta dir");
        fs::write(meta.join("argument_specs.yml"), spec).expect("Failed to write spec");
        self
    }

    /// Writes `molecule/<role>/converge.yml`.
    pub fn with_playbook(self, role: &str) -> Self {
        let scenario = self.molecule_dir().join(role);
        fs::create_dir_all(&scenario).expect("Failed to create scenario dir");
        fs::write(scenario.join("converge.yml"), converge_playbook(role))
            .expect("Failed to write playbook");
        self
    }

    /// Adds a fully documented role (spec and playbook).
    pub fn with_role(self, role: &str) -> Self {
        self.with_spec(role, SIMPLE_SPEC).with_playbook(role)
    }
}
