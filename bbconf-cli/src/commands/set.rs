//! Set command implementation.
//!
//! Edits leaf values and writes the re-serialized file, either in place
//! (with a timestamped backup unless disabled) or to `--output`.

use crate::error::CliError;
use crate::utils::{
    load_settings, normalize_key, read_session, write_output, GlobalOptions, WriteTarget,
};
use clap::Args;
use std::path::PathBuf;

/// Change leaf values and write the file back.
#[derive(Args)]
pub struct SetCommand {
    /// Config file to edit
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Key to change (the leading `$` is optional)
    #[arg(value_name = "KEY", requires = "value")]
    pub key: Option<String>,

    /// New value, parsed as the type the key already holds
    #[arg(value_name = "VALUE")]
    pub value: Option<String>,

    /// Additional KEY=VALUE edits
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub assignments: Vec<String>,

    /// Write to this file instead of rewriting FILE
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Do not back up FILE before rewriting it
    #[arg(long)]
    pub no_backup: bool,

    /// Print the result instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl SetCommand {
    /// Execute the set command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let edits = self.edits()?;
        if edits.is_empty() {
            return Err(CliError::InvalidArguments(
                "nothing to set (give KEY VALUE or --set KEY=VALUE)".to_string(),
            ));
        }

        let settings = load_settings(global)?;
        let (_, mut session) = read_session(&self.file)?;

        for (key, value) in &edits {
            session.set_from_input(key, value)?;
        }

        let text = session.to_text();
        if self.dry_run {
            println!("{text}");
            return Ok(());
        }

        if !session.is_modified() && self.output.is_none() {
            if !global.quiet {
                eprintln!("No changes to {}", self.file.display());
            }
            return Ok(());
        }

        let target = WriteTarget {
            source: &self.file,
            output: self.output.as_deref(),
            no_backup: self.no_backup,
        };
        let backup = write_output(&target, &text, &settings)?;

        if !global.quiet {
            eprintln!(
                "Updated {} key(s) in {}",
                edits.len(),
                target.output.unwrap_or(&self.file).display()
            );
            if let Some(path) = backup {
                eprintln!("Backup: {}", path.display());
            }
        }
        Ok(())
    }

    /// Positional edit first, then `--set` edits in order.
    fn edits(&self) -> Result<Vec<(String, String)>, CliError> {
        let mut edits = Vec::new();
        if let (Some(key), Some(value)) = (&self.key, &self.value) {
            edits.push((normalize_key(key), value.clone()));
        }
        for assignment in &self.assignments {
            let (key, value) = assignment.split_once('=').ok_or_else(|| {
                CliError::InvalidArguments(format!("expected KEY=VALUE, got '{assignment}'"))
            })?;
            edits.push((normalize_key(key.trim()), value.to_string()));
        }
        Ok(edits)
    }
}
