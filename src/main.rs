//! memeval-fixtures entry point
//!
//! Parses arguments, writes the fixture set, and on failure prints a
//! user-friendly error and exits with status 1.

use anyhow::Result;
use clap::Parser;
use memeval_fixtures::cli;
use memeval_fixtures::core::user_friendly_error;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    // Generate the fixtures
    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            // Report the filesystem failure with context and a suggestion
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
