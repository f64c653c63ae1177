//! Role documentation generation.
//!
//! Each role under the roles directory that ships a
//! `meta/argument_specs.yml` gets a Markdown page built from that spec and
//! the role's molecule `converge.yml` playbook.
//!
//! # Layout
//!
//! ```text
//! <roles_dir>/<role>/meta/argument_specs.yml   spec (argument_specs.main)
//! <molecule_dir>/<role>/converge.yml           example playbook
//! <doc_dir>/role_<role>_doc.md                 generated page
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use rolekit::{DocGenerator, DocRenderer};
//!
//! let generator = DocGenerator::new("roles", "molecule", "docs", DocRenderer::builtin()?);
//! for page in generator.generate(None)? {
//!     println!("wrote {}", page.display());
//! }
//! # Ok::<(), rolekit::Error>(())
//! ```

pub mod render;
pub mod schema;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use render::{
    escape_cell, option_rows, render_option_descriptions, DocContext, DocRenderer, OptionRow,
};
pub use schema::{ArgumentSpecFile, Description, OptionSpec, RoleSpec};

use crate::{Error, Result};

/// Spec file location inside a role directory.
pub const SPEC_RELATIVE_PATH: &str = "meta/argument_specs.yml";

/// Example playbook file inside a molecule scenario directory.
pub const PLAYBOOK_FILE: &str = "converge.yml";

/// Name of the generated page for `role`.
///
/// # Examples
///
/// ```
/// assert_eq!(rolekit::docs::doc_file_name("nginx"), "role_nginx_doc.md");
/// ```
#[must_use]
pub fn doc_file_name(role: &str) -> String {
    format!("role_{role}_doc.md")
}

/// Read a file, reporting a missing file as [`Error::FileNotFound`].
pub(crate) fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })
}

fn require_dir(path: &Path, what: &str) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(Error::InvalidDirectory {
            path: path.to_path_buf(),
            reason: format!("{what} does not exist or is not a directory"),
        })
    }
}

/// Names of the roles under `roles_dir` that have an argument spec, sorted.
///
/// # Errors
///
/// Returns [`Error::InvalidDirectory`] if `roles_dir` is not a directory or
/// cannot be expressed as a glob pattern, and [`Error::Io`] if a directory
/// cannot be read while scanning.
pub fn discover_roles(roles_dir: &Path) -> Result<Vec<String>> {
    require_dir(roles_dir, "roles directory")?;

    let root = roles_dir.to_str().ok_or_else(|| Error::InvalidDirectory {
        path: roles_dir.to_path_buf(),
        reason: "path is not valid UTF-8".to_string(),
    })?;
    let pattern = format!("{}/*/{SPEC_RELATIVE_PATH}", glob::Pattern::escape(root));
    let entries = glob::glob(&pattern).map_err(|e| Error::InvalidDirectory {
        path: roles_dir.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut roles = Vec::new();
    for entry in entries {
        let spec = entry.map_err(std::io::Error::from)?;
        let role = spec
            .parent()
            .and_then(Path::parent)
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned());
        if let Some(role) = role {
            roles.push(role);
        }
    }
    roles.sort();
    log::debug!("found {} documented role(s) in {}", roles.len(), roles_dir.display());
    Ok(roles)
}

/// Load the `argument_specs.main` section of a spec file.
///
/// # Errors
///
/// Returns [`Error::FileNotFound`] if the file is missing, [`Error::Yaml`]
/// if it does not parse, and [`Error::MissingArgumentSpec`] if it has no
/// `main` entry point.
pub fn load_role_spec(path: &Path) -> Result<RoleSpec> {
    let contents = read_file(path)?;
    let mut file: ArgumentSpecFile =
        serde_yaml::from_str(&contents).map_err(|source| Error::Yaml {
            path: path.to_path_buf(),
            source,
        })?;

    file.argument_specs
        .shift_remove("main")
        .ok_or_else(|| Error::MissingArgumentSpec {
            path: path.to_path_buf(),
        })
}

/// Load the example playbook at `path`.
///
/// # Errors
///
/// Returns [`Error::FileNotFound`] if the file is missing.
pub fn load_playbook(path: &Path) -> Result<String> {
    read_file(path)
}

/// Generates one Markdown page per role.
pub struct DocGenerator {
    roles_dir: PathBuf,
    molecule_dir: PathBuf,
    doc_dir: PathBuf,
    renderer: DocRenderer,
}

impl DocGenerator {
    /// Create a generator reading from `roles_dir` and `molecule_dir` and
    /// writing into `doc_dir`.
    pub fn new(
        roles_dir: impl Into<PathBuf>,
        molecule_dir: impl Into<PathBuf>,
        doc_dir: impl Into<PathBuf>,
        renderer: DocRenderer,
    ) -> Self {
        Self {
            roles_dir: roles_dir.into(),
            molecule_dir: molecule_dir.into(),
            doc_dir: doc_dir.into(),
            renderer,
        }
    }

    /// Spec file of `role`.
    #[must_use]
    pub fn spec_path(&self, role: &str) -> PathBuf {
        self.roles_dir.join(role).join(SPEC_RELATIVE_PATH)
    }

    /// Example playbook of `role`.
    #[must_use]
    pub fn playbook_path(&self, role: &str) -> PathBuf {
        self.molecule_dir.join(role).join(PLAYBOOK_FILE)
    }

    /// Output page of `role`.
    #[must_use]
    pub fn doc_path(&self, role: &str) -> PathBuf {
        self.doc_dir.join(doc_file_name(role))
    }

    /// Generate pages for `roles`, or for every discovered role when `None`.
    ///
    /// Roles are processed in order and the first failure stops the run.
    /// Pages already written for earlier roles are kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDirectory`] if the roles or molecule directory
    /// is missing, or the first per-role error.
    pub fn generate(&self, roles: Option<&[String]>) -> Result<Vec<PathBuf>> {
        require_dir(&self.roles_dir, "roles directory")?;
        require_dir(&self.molecule_dir, "molecule directory")?;

        let roles = match roles {
            Some(roles) => roles.to_vec(),
            None => discover_roles(&self.roles_dir)?,
        };

        if !self.doc_dir.exists() {
            fs::create_dir_all(&self.doc_dir)?;
        }

        let mut written = Vec::with_capacity(roles.len());
        for role in &roles {
            written.push(self.generate_role(role)?);
        }
        log::info!(
            "generated {} role page(s) in {}",
            written.len(),
            self.doc_dir.display()
        );
        Ok(written)
    }

    /// Generate the page for a single role.
    ///
    /// The page is fully rendered before anything is written, so a failure
    /// leaves no file behind for this role.
    ///
    /// # Errors
    ///
    /// Returns an error if the spec or playbook is missing or malformed, if
    /// rendering fails, or if the page cannot be written.
    pub fn generate_role(&self, role: &str) -> Result<PathBuf> {
        log::info!("generating documentation for role {role}");
        let spec = load_role_spec(&self.spec_path(role))?;
        let playbook = load_playbook(&self.playbook_path(role))?;
        let page = self.renderer.render(&DocContext::new(role, &spec, &playbook))?;

        let target = self.doc_path(role);
        fs::write(&target, page)?;
        log::debug!("wrote {}", target.display());
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_follow_layout() {
        let generator = DocGenerator::new("r", "m", "d", DocRenderer::builtin().unwrap());
        assert_eq!(
            generator.spec_path("web"),
            PathBuf::from("r/web/meta/argument_specs.yml")
        );
        assert_eq!(
            generator.playbook_path("web"),
            PathBuf::from("m/web/converge.yml")
        );
        assert_eq!(generator.doc_path("web"), PathBuf::from("d/role_web_doc.md"));
    }

    #[test]
    fn test_load_role_spec_without_main() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("argument_specs.yml");
        fs::write(&path, "argument_specs:\n  other:\n    options: {}\n").unwrap();

        let err = load_role_spec(&path).unwrap_err();
        assert!(matches!(err, Error::MissingArgumentSpec { .. }));
    }

    #[test]
    fn test_load_role_spec_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("argument_specs.yml");
        fs::write(&path, "argument_specs: [unclosed\n").unwrap();

        let err = load_role_spec(&path).unwrap_err();
        assert!(matches!(err, Error::Yaml { .. }));
        assert!(err.is_file_failure());
    }

    #[test]
    fn test_load_playbook_missing() {
        let err = load_playbook(Path::new("/nonexistent/rolekit/converge.yml")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_discover_roles_requires_directory() {
        let err = discover_roles(Path::new("/nonexistent/rolekit/roles")).unwrap_err();
        assert!(err.is_precondition());
    }
}
