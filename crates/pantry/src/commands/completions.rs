//! Completions command implementation.
//!
//! Generates shell completion scripts for the pantry CLI.

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use super::Result;
use crate::cli::Cli;

/// Executes the completions command, writing the script to stdout.
pub fn execute(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    generate(shell, &mut command, "pantry", &mut io::stdout());
    Ok(())
}
