//! Structured file system error handling for fixture generation
//!
//! Captures the operation and path at the call site so a failed write reports
//! which fixture file was being produced, instead of a bare `io::Error`.

use std::path::PathBuf;
use thiserror::Error;

/// Types of file operations performed while producing fixtures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    /// Creating (or truncating) a file
    Create,
    /// Writing bytes into an open file
    Write,
    /// Flushing buffered bytes to the file
    Flush,
}

impl std::fmt::Display for FileOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileOperation::Create => write!(f, "creating"),
            FileOperation::Write => write!(f, "writing"),
            FileOperation::Flush => write!(f, "flushing"),
        }
    }
}

/// Error type for a failed file operation with its context attached
#[derive(Error, Debug)]
#[error("File operation failed: {operation} {}", file_path.display())]
pub struct FileOperationError {
    /// The operation that failed
    pub operation: FileOperation,
    /// The file being produced
    pub file_path: PathBuf,
    /// What the file is for (e.g. "lock marker")
    pub purpose: String,
    /// The underlying I/O error
    #[source]
    pub source: std::io::Error,
}

impl FileOperationError {
    /// Create a new error from an operation context and its I/O failure.
    pub fn new(
        operation: FileOperation,
        file_path: impl Into<PathBuf>,
        purpose: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self {
            operation,
            file_path: file_path.into(),
            purpose: purpose.into(),
            source,
        }
    }

    /// Kind of the underlying I/O error.
    pub fn kind(&self) -> std::io::ErrorKind {
        self.source.kind()
    }

    /// Human-readable description including a hint for common failure kinds.
    pub fn user_message(&self) -> String {
        let mut message = format!(
            "Failed {} {} '{}': {}",
            self.operation,
            self.purpose,
            self.file_path.display(),
            self.source
        );

        match self.source.kind() {
            std::io::ErrorKind::PermissionDenied => {
                message.push_str(&format!(
                    "\n\nPermission denied. Check that the directory containing '{}' is writable.",
                    self.file_path.display()
                ));
            }
            std::io::ErrorKind::StorageFull => {
                message.push_str("\n\nThe device has no space left for the fixture files.");
            }
            std::io::ErrorKind::NotFound => {
                message.push_str("\n\nThe directory for this file does not exist.");
            }
            _ => {}
        }

        message
    }
}

/// Extension trait attaching file context to `io::Result` values
pub trait FileResultExt<T> {
    /// Convert an I/O error into a [`FileOperationError`] naming the file.
    fn with_file_context(
        self,
        operation: FileOperation,
        file_path: impl Into<PathBuf>,
        purpose: impl Into<String>,
    ) -> Result<T, FileOperationError>;
}

impl<T> FileResultExt<T> for Result<T, std::io::Error> {
    fn with_file_context(
        self,
        operation: FileOperation,
        file_path: impl Into<PathBuf>,
        purpose: impl Into<String>,
    ) -> Result<T, FileOperationError> {
        self.map_err(|io_error| FileOperationError::new(operation, file_path, purpose, io_error))
    }
}
