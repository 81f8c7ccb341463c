//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Installed binary name.
const BIN_NAME: &str = "bbconf";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            Self::print_instructions(self.shell);
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }

    // Instructions go to stderr so stdout stays a valid script.
    fn print_instructions(shell: Shell) {
        eprintln!("# Generating {shell} completion script");
        match shell {
            Shell::Bash => {
                eprintln!("#   bbconf completions bash > ~/.local/share/bash-completion/completions/bbconf");
                eprintln!("# Or in ~/.bashrc:  eval \"$(bbconf completions bash)\"");
            }
            Shell::Zsh => {
                eprintln!("#   bbconf completions zsh > ~/.zsh/completions/_bbconf");
                eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
            }
            Shell::Fish => {
                eprintln!("#   bbconf completions fish > ~/.config/fish/completions/bbconf.fish");
            }
            Shell::PowerShell => {
                eprintln!("#   bbconf completions powershell | Out-String | Invoke-Expression");
            }
            _ => {}
        }
        eprintln!();
    }
}
