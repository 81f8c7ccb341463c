//! Format command implementation.
//!
//! Re-serializes a file without edits, or with `--check` reports whether
//! it is already in canonical layout.

use crate::error::CliError;
use crate::utils::{
    is_canonical, load_settings, read_session, write_output, GlobalOptions, WriteTarget,
};
use clap::Args;
use std::path::PathBuf;

/// Rewrite a file in canonical layout.
#[derive(Args)]
pub struct FormatCommand {
    /// Config file to format
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write to this file instead of rewriting FILE
    #[arg(long, short, value_name = "PATH", conflicts_with = "check")]
    pub output: Option<PathBuf>,

    /// Only check the layout; exit 1 if the file would change
    #[arg(long)]
    pub check: bool,

    /// Do not back up FILE before rewriting it
    #[arg(long)]
    pub no_backup: bool,
}

impl FormatCommand {
    /// Execute the format command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (source, session) = read_session(&self.file)?;
        let text = session.to_text();
        let canonical = is_canonical(&source, &text);

        if self.check {
            if canonical {
                if !global.quiet {
                    println!("{} is formatted", self.file.display());
                }
                return Ok(());
            }
            return Err(CliError::SemanticFailure(format!(
                "{} is not formatted",
                self.file.display()
            )));
        }

        if canonical && self.output.is_none() {
            log::info!("{} already formatted", self.file.display());
            return Ok(());
        }

        let settings = load_settings(global)?;
        let target = WriteTarget {
            source: &self.file,
            output: self.output.as_deref(),
            no_backup: self.no_backup,
        };
        let backup = write_output(&target, &text, &settings)?;

        if !global.quiet {
            eprintln!(
                "Formatted {}",
                target.output.unwrap_or(&self.file).display()
            );
            if let Some(path) = backup {
                eprintln!("Backup: {}", path.display());
            }
        }
        Ok(())
    }
}
