//! Show command implementation.
//!
//! Displays every section of a config file with labelled values, in the
//! format chosen by `--format` or the `output_format` setting.

use crate::error::CliError;
use crate::utils::{load_settings, read_session, GlobalOptions};
use bbconf::OutputFormat;
use clap::Args;
use std::path::PathBuf;

/// Show every section with labelled values.
#[derive(Args)]
pub struct ShowCommand {
    /// Config file to read
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format (human or json)
    #[arg(long, value_parser = OutputFormat::parse)]
    pub format: Option<OutputFormat>,

    /// Hide the `General` section
    #[arg(long)]
    pub skip_general: bool,
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let settings = load_settings(global)?;
        let format = self.format.unwrap_or_else(|| settings.output_format());

        let (_, session) = read_session(&self.file)?;
        let mut views = session.display_rows();
        if self.skip_general {
            views.retain(|view| view.name != bbconf::text::GENERAL_SECTION);
        }

        let output = format.create_formatter().format(&views)?;
        println!("{output}");
        Ok(())
    }
}
