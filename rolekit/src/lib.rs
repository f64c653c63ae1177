#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # rolekit
//!
//! A library for running CI chores over an Ansible role collection.
//!
//! It maps the files changed between two git revisions onto the roles that
//! own them, runs molecule scenarios for exactly those roles, and renders
//! Markdown documentation for each role from its argument specs.
//!
//! ## Core Types
//!
//! - [`CommandRunner`] and [`SystemRunner`]: external process execution
//! - [`ChangeRange`] and [`RoleSet`]: change detection inputs and outputs
//! - [`ScenarioCommand`]: the per-role scenario test invocation
//! - [`DocGenerator`] and [`DocRenderer`]: role documentation
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use std::path::PathBuf;
//! use rolekit::changes::get_subdirs;
//!
//! let parents = vec![PathBuf::from("r/f")];
//! let children = vec![
//!     PathBuf::from("r/f/good/foo"),
//!     PathBuf::from("t/"),
//!     PathBuf::from("r/b/"),
//! ];
//! let roles = get_subdirs(&parents, &children);
//! assert_eq!(roles.into_iter().collect::<Vec<_>>(), vec!["good".to_string()]);
//! ```

pub mod changes;
pub mod config;
pub mod dispatch;
pub mod docs;
pub mod error;
pub mod logging;
pub mod runner;

// Re-export key types at crate root for convenience
pub use changes::{changed_roles, get_diff, get_subdirs, relative_role, RoleSet};
pub use config::{ChangeRange, ScenarioCommand};
pub use dispatch::run_molecule_tests;
pub use docs::{DocGenerator, DocRenderer, RoleSpec};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use runner::{CommandOutput, CommandRunner, SystemRunner};
