//! Lock marker file.
//!
//! The marker is a placeholder: a file holding a single null byte. It is not an
//! OS-level lock and nothing here opens it exclusively or calls `flock`.

use crate::constants::LOCK_MARKER_BYTE;
use crate::core::file_error::{FileOperation, FileOperationError, FileResultExt};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

const LOCK_MARKER_PURPOSE: &str = "lock marker";

/// Write the single-byte lock marker, truncating any existing file.
///
/// # Errors
///
/// Returns a [`FileOperationError`] if the file cannot be created or written.
pub fn write_lock_marker(path: &Path) -> Result<(), FileOperationError> {
    let mut file = File::create(path).with_file_context(
        FileOperation::Create,
        path,
        LOCK_MARKER_PURPOSE,
    )?;

    file.write_all(&[LOCK_MARKER_BYTE]).with_file_context(
        FileOperation::Write,
        path,
        LOCK_MARKER_PURPOSE,
    )?;

    debug!("Wrote lock marker {}", path.display());
    Ok(())
}
