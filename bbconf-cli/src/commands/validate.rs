//! Command to validate a config file.

use crate::error::CliError;
use crate::utils::{read_config, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// Check that a file parses.
#[derive(Args)]
pub struct ValidateCommand {
    /// Config file to validate
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let contents = read_config(&self.file)?;

        match bbconf::parse(&contents) {
            Ok(parsed) => {
                if !global.quiet {
                    println!(
                        "Config is valid ({} keys, {} sections)",
                        parsed.data.len(),
                        parsed.sections.len()
                    );
                }
                Ok(())
            }
            Err(e) => {
                eprintln!("Parse error: {e}");
                Err(CliError::SemanticFailure(
                    "Config file is invalid".to_string(),
                ))
            }
        }
    }
}
