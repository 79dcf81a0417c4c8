//! memeval-fixtures - fixture generator for the zero-copy memory evaluation
//!
//! Writes the three inputs the evaluation programs read:
//! - `data.txt` - 50 lines of the values `0..1000` concatenated without separators
//! - `data2.txt` - the same with every value doubled
//! - `lockfile.lock` - a single null byte
//!
//! Output is fully deterministic and overwritten on every run.
//!
//! # Modules
//!
//! - [`cli`] - Argument parsing and logging setup
//! - [`constants`] - File names and fixture dimensions
//! - [`core`] - Error types and user-facing error reporting
//! - [`fixture`] - Line rendering and the file writers

pub mod cli;
pub mod constants;
pub mod core;
pub mod fixture;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
