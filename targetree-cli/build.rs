//! Build script for targetree-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("targetree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve backup targets into a single tree")
        .long_about(
            "Command-line tool for inspecting how a set of backup target paths is merged into one tree",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read the user configuration from this file")
                .value_name("PATH")
                .global(true)
                .env("TARGETREE_CONFIG"),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Resolve targets and print the tree")
                .long_about("Merge every target into a tree and print it as text, JSON or YAML"),
            Command::new("root")
                .about("Print the root boundary of a target")
                .long_about("Show the directory, drive or share a target is anchored to"),
            Command::new("components")
                .about("Print the components of a target")
                .long_about("Show the names leading from a target's root down to the target"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a targetree configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("targetree.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
