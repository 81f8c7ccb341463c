//! Command to list the sections of a config file.

use crate::error::CliError;
use crate::utils::{read_session, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// List section names with their key counts.
#[derive(Args)]
pub struct SectionsCommand {
    /// Config file to read
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

impl SectionsCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let (_, session) = read_session(&self.file)?;
        for (name, keys) in session.sections().iter() {
            println!("{name}\t{}", keys.len());
        }
        Ok(())
    }
}
