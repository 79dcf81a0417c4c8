//! Command-line interface for the fixture generator.
//!
//! There are no subcommands and nothing to configure: invoking the binary
//! writes the fixture set into the working directory and prints where it went.
//! The environment is never consulted.
//!
//! # Global Options
//!
//! - `--verbose` - Enable debug logging on stderr (diagnostics only; the files
//!   and the confirmation message are unchanged)
//!
//! # Examples
//!
//! ```bash
//! memeval-fixtures
//! memeval-fixtures --verbose
//! ```

use crate::fixture::{FixtureGenerator, FixtureLayout};
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Log filter for a default run.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Log filter with `--verbose`.
pub const VERBOSE_LOG_LEVEL: &str = "debug";

/// Runtime settings derived from the parsed flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Log filter for the stderr subscriber.
    pub log_level: &'static str,
}

impl CliConfig {
    /// Configuration equivalent to running with no flags.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
        }
    }

    /// Install the global tracing subscriber.
    ///
    /// The filter comes from [`log_level`](Self::log_level) alone; `RUST_LOG`
    /// is ignored. Logs go to stderr so stdout only ever carries the
    /// confirmation message. Later calls are ignored.
    pub fn init_logging(&self) {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(self.log_level))
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Root command.
#[derive(Parser, Debug)]
#[command(
    name = "memeval-fixtures",
    about = "Generate the data and lock marker fixtures for the memory evaluation",
    version,
    long_about = "Writes data.txt, data2.txt and lockfile.lock into the current directory. \
                  Existing files are overwritten with identical content on every run."
)]
pub struct Cli {
    /// Enable debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Build the configuration and run.
    pub fn execute(self) -> Result<()> {
        self.build_config().init_logging();
        Self::generate()
    }

    /// Map the parsed flags onto a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            VERBOSE_LOG_LEVEL
        } else {
            DEFAULT_LOG_LEVEL
        };

        CliConfig {
            log_level,
        }
    }

    /// Generate the fixtures in the working directory and print the confirmation.
    pub fn generate() -> Result<()> {
        let generated = FixtureGenerator::new(FixtureLayout::current_dir()).generate()?;
        println!("{}", generated.confirmation());
        Ok(())
    }
}
