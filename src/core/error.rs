//! Error handling for the fixture generator
//!
//! Two layers:
//! - [`FixtureError`] - strongly-typed failure cases
//! - [`ErrorContext`] - wrapper adding details and a suggestion for the terminal
//!
//! Every failure in this crate is a filesystem failure. [`user_friendly_error`]
//! inspects an [`anyhow::Error`] chain, recovers the [`FileOperationError`]
//! inside it, and classifies it by [`std::io::ErrorKind`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use memeval_fixtures::core::{FixtureError, user_friendly_error};
//!
//! let err = anyhow::Error::from(FixtureError::StorageFull {
//!     path: "data.txt".to_string(),
//! });
//! user_friendly_error(err).display();
//! ```

use crate::core::file_error::FileOperationError;
use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for fixture generation
#[derive(Error, Debug)]
pub enum FixtureError {
    /// File system error
    #[error("File system error: {operation} '{path}'")]
    FileSystemError {
        /// The file system operation that failed
        operation: String,
        /// Path where the file system error occurred
        path: String,
    },

    /// Permission denied
    #[error("Permission denied: {operation} '{path}'")]
    PermissionDenied {
        /// The operation that was denied
        operation: String,
        /// Path where permission was denied
        path: String,
    },

    /// Device ran out of space mid-write
    #[error("No space left on device while writing '{path}'")]
    StorageFull {
        /// Path being written when the device filled up
        path: String,
    },

    /// Other error
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

/// Error wrapper carrying optional details and a suggestion for the user
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: FixtureError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a context with no details or suggestion.
    #[must_use]
    pub const fn new(error: FixtureError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Attach a suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attach details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with colored labels.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

fn from_file_operation_error(err: &FileOperationError) -> ErrorContext {
    let path = err.file_path.display().to_string();
    let operation = format!("{} {}", err.operation, err.purpose);

    match err.kind() {
        std::io::ErrorKind::PermissionDenied | std::io::ErrorKind::ReadOnlyFilesystem => {
            ErrorContext::new(FixtureError::PermissionDenied {
                operation,
                path,
            })
            .with_suggestion(
                "Run the generator from a writable directory",
            )
            .with_details(err.user_message())
        }
        std::io::ErrorKind::StorageFull => ErrorContext::new(FixtureError::StorageFull {
            path,
        })
        .with_suggestion("Free some disk space and run the generator again")
        .with_details(err.user_message()),
        std::io::ErrorKind::NotFound => ErrorContext::new(FixtureError::FileSystemError {
            operation,
            path,
        })
        .with_suggestion("Check that the working directory still exists and is reachable")
        .with_details(err.user_message()),
        _ => ErrorContext::new(FixtureError::FileSystemError {
            operation,
            path,
        })
        .with_details(err.user_message()),
    }
}

/// Convert any error into an [`ErrorContext`] suitable for terminal display.
///
/// Recognizes a [`FileOperationError`] anywhere in the chain and a
/// [`FixtureError`] passed straight through. Anything else becomes
/// [`FixtureError::Other`] with the cause chain appended.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(file_error) = error.chain().find_map(|e| e.downcast_ref::<FileOperationError>()) {
        return from_file_operation_error(file_error);
    }

    let error = match error.downcast::<FixtureError>() {
        Ok(fixture_error) => return ErrorContext::new(fixture_error),
        Err(error) => error,
    };

    let mut message = error.to_string();
    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(FixtureError::Other {
        message,
    })
}
