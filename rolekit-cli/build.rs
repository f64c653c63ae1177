//! Build script for rolekit-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs and
/// src/commands/.
fn build_cli() -> Command {
    Command::new("rolekit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Test changed Ansible roles and generate role documentation")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Only report errors")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("test")
                .about("Run molecule scenarios for roles changed between two revisions")
                .arg(
                    Arg::new("parent")
                        .short('p')
                        .long("parent")
                        .value_name("PATH")
                        .action(ArgAction::Append)
                        .help("Parent directory on which we should check for changes"),
                )
                .arg(
                    Arg::new("origin")
                        .long("origin")
                        .value_name("REV")
                        .env("COMPARED_BRANCH")
                        .default_value("main")
                        .help("Revision to compare against"),
                )
                .arg(
                    Arg::new("current")
                        .long("current")
                        .value_name("REV")
                        .env("CI_COMMIT_SHA")
                        .default_value("HEAD")
                        .help("Revision under test"),
                )
                .arg(
                    Arg::new("molecule")
                        .long("molecule")
                        .value_name("PROGRAM")
                        .env("ROLEKIT_MOLECULE")
                        .default_value("molecule")
                        .help("Scenario test program"),
                ),
            Command::new("document")
                .about("Generate Markdown documentation from role argument specs")
                .arg(
                    Arg::new("roles-dir")
                        .short('r')
                        .long("roles-dir")
                        .value_name("PATH")
                        .required(true)
                        .help("Directory containing the roles"),
                )
                .arg(
                    Arg::new("molecule-dir")
                        .short('m')
                        .long("molecule-dir")
                        .value_name("PATH")
                        .required(true)
                        .help("Directory containing the molecule scenarios"),
                )
                .arg(
                    Arg::new("doc-dir")
                        .short('d')
                        .long("doc-dir")
                        .value_name("PATH")
                        .default_value("docs")
                        .help("Directory the pages are written to"),
                )
                .arg(
                    Arg::new("template")
                        .short('t')
                        .long("template")
                        .value_name("PATH")
                        .help("Jinja template to use instead of the built-in one"),
                )
                .arg(
                    Arg::new("role")
                        .long("role")
                        .value_name("NAME")
                        .action(ArgAction::Append)
                        .help("Only document this role"),
                ),
            Command::new("completions").about("Generate shell completion scripts"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("rolekit.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
