//! Test utilities for memeval-fixtures
//!
//! Helpers shared by the unit tests and the `integration` test target
//! (enabled there through the `test-utils` feature).
//!
//! # Example
//!
//! ```rust,ignore
//! use memeval_fixtures::test_utils::{init_test_logging, read_fixture_lines};
//!
//! init_test_logging(None);
//! let lines = read_fixture_lines(std::path::Path::new("data.txt")).unwrap();
//! assert_eq!(lines.len(), 50);
//! ```

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has any effect. Uses `level` if given, otherwise
/// `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}

/// Read a generated data file as lines, failing if it is not valid UTF-8.
pub fn read_fixture_lines(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read fixture {}", path.display()))?;
    Ok(content.lines().map(str::to_string).collect())
}
