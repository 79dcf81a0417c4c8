//! Interleaved writer for the two data files.
//!
//! Both files are opened up front (the primary first, so a failure opening the
//! companion leaves an empty primary behind) and every line of both is built in
//! the same pass over the values.

use crate::constants::{LINE_BREAK, LINE_COUNT, VALUES_PER_LINE};
use crate::core::file_error::{FileOperation, FileOperationError, FileResultExt};
use crate::fixture::content::ValueTransform;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

const DATA_FILE_PURPOSE: &str = "data file";

/// One open data file and the transform that feeds it.
struct DataSink<'a> {
    path: &'a Path,
    transform: ValueTransform,
    writer: BufWriter<File>,
    line: String,
    bytes_written: u64,
}

impl<'a> DataSink<'a> {
    fn create(path: &'a Path, transform: ValueTransform) -> Result<Self, FileOperationError> {
        let file = File::create(path).with_file_context(
            FileOperation::Create,
            path,
            DATA_FILE_PURPOSE,
        )?;

        debug!("Opened {} for writing", path.display());

        Ok(Self {
            path,
            transform,
            writer: BufWriter::new(file),
            line: String::with_capacity(transform.line_len() + 1),
            bytes_written: 0,
        })
    }

    fn push(&mut self, value: u32) {
        self.transform.push_value(&mut self.line, value);
    }

    fn end_line(&mut self) -> Result<(), FileOperationError> {
        self.line.push(char::from(LINE_BREAK));
        self.writer.write_all(self.line.as_bytes()).with_file_context(
            FileOperation::Write,
            self.path,
            DATA_FILE_PURPOSE,
        )?;
        self.bytes_written += self.line.len() as u64;
        self.line.clear();
        Ok(())
    }

    fn finish(mut self) -> Result<u64, FileOperationError> {
        self.writer.flush().with_file_context(FileOperation::Flush, self.path, DATA_FILE_PURPOSE)?;
        debug!("Wrote {} bytes to {}", self.bytes_written, self.path.display());
        Ok(self.bytes_written)
    }
}

/// Byte counts for the two data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataFileStats {
    /// Bytes written to the primary data file
    pub data_bytes: u64,
    /// Bytes written to the doubled-value companion file
    pub doubled_bytes: u64,
}

/// Write both data files, truncating any existing content.
///
/// Each of the [`LINE_COUNT`] lines holds every value in `0..VALUES_PER_LINE`
/// (doubled for the companion file) followed by a line break. The writers are
/// flushed explicitly before returning so a late write failure is reported
/// instead of being swallowed when the buffer is dropped.
///
/// # Errors
///
/// Returns a [`FileOperationError`] naming the file whose create, write or
/// flush failed. Anything already written stays on disk.
pub fn write_data_files(
    data_path: &Path,
    doubled_path: &Path,
) -> Result<DataFileStats, FileOperationError> {
    let mut data = DataSink::create(data_path, ValueTransform::Identity)?;
    let mut doubled = DataSink::create(doubled_path, ValueTransform::Doubled)?;

    for _ in 0..LINE_COUNT {
        for value in 0..VALUES_PER_LINE {
            data.push(value);
            doubled.push(value);
        }
        data.end_line()?;
        doubled.end_line()?;
    }

    let data_bytes = data.finish()?;
    let doubled_bytes = doubled.finish()?;

    Ok(DataFileStats {
        data_bytes,
        doubled_bytes,
    })
}
