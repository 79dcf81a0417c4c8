//! Core error types for the fixture generator
//!
//! - [`error`] - [`FixtureError`], [`ErrorContext`] and [`user_friendly_error`]
//! - [`file_error`] - [`FileOperationError`] capturing which fixture file failed

pub mod error;
pub mod file_error;

pub use error::{ErrorContext, FixtureError, user_friendly_error};
pub use file_error::{FileOperation, FileOperationError, FileResultExt};
