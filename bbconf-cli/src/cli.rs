//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, FormatCommand, GetCommand, SectionsCommand, SetCommand, ShowCommand,
    ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect and edit JSON config files organised by comment section headers.
#[derive(Parser)]
#[command(name = "bbconf")]
#[command(version, about = "Inspect and edit sectioned JSON config files", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the directory holding the user settings file
    #[arg(long, value_name = "PATH", global = true, env = "BBCONF_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show every section with labelled values
    Show(ShowCommand),

    /// List section names with their key counts
    Sections(SectionsCommand),

    /// Print the value of one key
    Get(GetCommand),

    /// Change leaf values and write the file back
    Set(SetCommand),

    /// Rewrite a file in canonical layout
    Format(FormatCommand),

    /// Check that a file parses
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
