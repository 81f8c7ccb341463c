//! Build script for bbconf-cli.
//!
//! Generates the `bbconf.1` man page into OUT_DIR with clap_mangen.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared here as well.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("bbconf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and edit sectioned JSON config files")
        .long_about(
            "Command-line tool for reading and editing JSON config files whose keys are \
             grouped under // SECTION comment headers, preserving their layout",
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
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the directory holding the user settings file")
                .value_name("PATH")
                .global(true)
                .env("BBCONF_DATA_DIR"),
        )
        .subcommands(vec![
            Command::new("show")
                .about("Show every section with labelled values")
                .long_about("Display sections, labels and values in human or JSON form"),
            Command::new("sections")
                .about("List section names with their key counts"),
            Command::new("get")
                .about("Print the value of one key"),
            Command::new("set")
                .about("Change leaf values and write the file back")
                .long_about(
                    "Parse new values as the type each key already holds and rewrite the file, \
                     keeping a timestamped backup unless disabled",
                ),
            Command::new("format")
                .about("Rewrite a file in canonical layout")
                .long_about("Re-serialize a file, or with --check report whether it would change"),
            Command::new("validate")
                .about("Check that a file parses"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();
    fs::write(man_dir.join("bbconf.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
