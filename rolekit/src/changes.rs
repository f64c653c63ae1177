//! Mapping changed files onto role names.
//!
//! A role is identified by the first directory below one of the watched
//! parent directories: `roles/nginx/tasks/main.yml` and
//! `molecule/nginx/converge.yml` both belong to role `nginx` when `roles`
//! and `molecule` are watched.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use crate::config::ChangeRange;
use crate::runner::CommandRunner;
use crate::{Error, Result};

/// Unique role names, iterated in sorted order.
pub type RoleSet = BTreeSet<String>;

/// Return the paths changed between `range.origin` and `range.current`.
///
/// Runs `git diff-tree --name-only -r <origin> <current>` and yields one path
/// per non-empty output line, in the order git printed them.
///
/// # Errors
///
/// Returns an error if git cannot be started or exits non-zero.
pub fn get_diff(runner: &dyn CommandRunner, range: &ChangeRange) -> Result<Vec<PathBuf>> {
    let args = vec![
        "diff-tree".to_string(),
        "--name-only".to_string(),
        "-r".to_string(),
        range.origin.clone(),
        range.current.clone(),
    ];
    let output = runner.run("git", &args, None)?;

    Ok(output
        .stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(PathBuf::from)
        .collect())
}

/// Name of the top-level entry of `child` below `parent`.
///
/// Both paths are compared lexically after dropping `.` components, so
/// `roles/`, `./roles` and `roles` are the same parent. Returns `None` when
/// `child` is not below `parent`, or is `parent` itself.
///
/// # Examples
///
/// ```
/// use rolekit::relative_role;
/// use std::path::Path;
///
/// assert_eq!(
///     relative_role(Path::new("roles/nginx/tasks/main.yml"), Path::new("roles/")),
///     Some("nginx".to_string())
/// );
/// assert_eq!(relative_role(Path::new("docs/index.md"), Path::new("roles")), None);
/// assert_eq!(relative_role(Path::new("roles"), Path::new("roles")), None);
/// ```
#[must_use]
pub fn relative_role(child: &Path, parent: &Path) -> Option<String> {
    let child = lexical(child);
    let parent = lexical(parent);
    let rest = child.strip_prefix(&parent).ok()?;

    match rest.components().next()? {
        Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
        _ => None,
    }
}

fn lexical(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Names of the direct subdirectories of any parent that contain at least
/// one of `potential_children`.
///
/// Every child is checked against every parent, so a child can contribute a
/// name through several parents. The result does not depend on the order of
/// either input.
#[must_use]
pub fn get_subdirs(parents: &[PathBuf], potential_children: &[PathBuf]) -> RoleSet {
    let mut roles = RoleSet::new();
    for child in potential_children {
        for parent in parents {
            match relative_role(child, parent) {
                Some(role) => {
                    roles.insert(role);
                }
                None => log::info!(
                    "{} is not under (parent) {}",
                    child.display(),
                    parent.display()
                ),
            }
        }
    }
    roles
}

/// Fail unless every parent exists and is a directory.
///
/// # Errors
///
/// Returns [`Error::InvalidParent`] naming the first offending parent.
pub fn validate_parents(parents: &[PathBuf]) -> Result<()> {
    match parents.iter().find(|parent| !parent.is_dir()) {
        Some(parent) => Err(Error::InvalidParent {
            path: parent.clone(),
        }),
        None => Ok(()),
    }
}

/// Roles touched between the two revisions of `range`.
///
/// Parents are validated before git is invoked, so a bad parent never
/// costs a diff.
///
/// # Errors
///
/// Returns [`Error::InvalidParent`] for a missing parent, or the runner's
/// error if the diff fails.
pub fn changed_roles(
    runner: &dyn CommandRunner,
    parents: &[PathBuf],
    range: &ChangeRange,
) -> Result<RoleSet> {
    let watched: Vec<String> = parents.iter().map(|p| p.display().to_string()).collect();
    log::info!(
        "inspect for change based on directories: {}",
        watched.join(", ")
    );
    validate_parents(parents)?;

    let changed = get_diff(runner, range)?;
    log::debug!(
        "{} changed file(s) between {} and {}",
        changed.len(),
        range.origin,
        range.current
    );
    Ok(get_subdirs(parents, &changed))
}
