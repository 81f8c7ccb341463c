//! Command to print the value of one key.

use crate::error::CliError;
use crate::utils::{normalize_key, read_session, GlobalOptions};
use bbconf::Error as LibError;
use clap::Args;
use std::path::PathBuf;

/// Print the encoded value of one key.
#[derive(Args)]
pub struct GetCommand {
    /// Config file to read
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Key to look up (the leading `$` is optional)
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Print strings without quotes
    #[arg(long)]
    pub raw: bool,
}

impl GetCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let (_, session) = read_session(&self.file)?;
        let key = normalize_key(&self.key);
        let value = session
            .get(&key)
            .ok_or_else(|| LibError::UnknownKey { key: key.clone() })?;

        if self.raw {
            println!("{}", value.to_plain_string());
        } else {
            println!("{}", value.encode());
        }
        Ok(())
    }
}
