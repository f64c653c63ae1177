//! Document command implementation.
//!
//! This module implements the `document` command, which renders one
//! Markdown page per role from its argument specs and molecule playbook.

use crate::error::CliError;
use crate::utils::{validate_role_name, GlobalOptions};
use clap::Args;
use rolekit::{DocGenerator, DocRenderer};
use std::path::PathBuf;

/// Generate Markdown documentation from role argument specs.
#[derive(Args)]
pub struct DocumentCommand {
    /// Directory containing the roles
    #[arg(short = 'r', long, value_name = "PATH")]
    pub roles_dir: PathBuf,

    /// Directory containing the molecule scenarios
    #[arg(short = 'm', long, value_name = "PATH")]
    pub molecule_dir: PathBuf,

    /// Directory the pages are written to
    #[arg(short = 'd', long, value_name = "PATH", default_value = "docs")]
    pub doc_dir: PathBuf,

    /// Jinja template to use instead of the built-in one
    #[arg(short = 't', long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Only document this role (repeatable)
    #[arg(long = "role", value_name = "NAME")]
    pub roles: Vec<String>,
}

impl DocumentCommand {
    /// Execute the document command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        for role in &self.roles {
            validate_role_name(role)?;
        }

        let renderer = match &self.template {
            Some(path) => DocRenderer::from_file(path)?,
            None => DocRenderer::builtin()?,
        };

        let generator =
            DocGenerator::new(self.roles_dir, self.molecule_dir, self.doc_dir, renderer);
        let selected = (!self.roles.is_empty()).then_some(self.roles.as_slice());
        for page in generator.generate(selected)? {
            log::debug!("  - {}", page.display());
        }
        Ok(())
    }
}
