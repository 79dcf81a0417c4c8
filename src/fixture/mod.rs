//! Fixture generation for the zero-copy memory evaluation.
//!
//! A run produces three files and nothing else:
//!
//! | File | Content |
//! |------|---------|
//! | `data.txt` | 50 lines, each `0123…999` with no separators |
//! | `data2.txt` | 50 lines, each `0246…1998` (every value doubled) |
//! | `lockfile.lock` | a single `0x00` byte |
//!
//! Existing files are truncated. The two data files are written first and
//! closed; the lock marker is only attempted after both succeeded. Nothing is
//! cleaned up on failure.
//!
//! # Examples
//!
//! ```rust,no_run
//! use memeval_fixtures::fixture::{FixtureGenerator, FixtureLayout};
//!
//! # fn example() -> anyhow::Result<()> {
//! let generated = FixtureGenerator::new(FixtureLayout::current_dir()).generate()?;
//! println!("{}", generated.confirmation());
//! # Ok(())
//! # }
//! ```

pub mod content;
pub mod data;
pub mod lock;

pub use content::ValueTransform;
pub use data::{DataFileStats, write_data_files};
pub use lock::write_lock_marker;

use crate::constants::{DATA_FILE_NAME, DOUBLED_DATA_FILE_NAME, LOCK_FILE_NAME};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Paths of the three fixture files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureLayout {
    /// Digit-sequence data file
    pub data: PathBuf,
    /// Doubled-value companion file
    pub doubled_data: PathBuf,
    /// Lock marker
    pub lock: PathBuf,
}

impl FixtureLayout {
    /// Bare relative file names, resolved against the working directory.
    #[must_use]
    pub fn current_dir() -> Self {
        Self {
            data: PathBuf::from(DATA_FILE_NAME),
            doubled_data: PathBuf::from(DOUBLED_DATA_FILE_NAME),
            lock: PathBuf::from(LOCK_FILE_NAME),
        }
    }

    /// The standard file names inside `dir`.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            data: dir.join(DATA_FILE_NAME),
            doubled_data: dir.join(DOUBLED_DATA_FILE_NAME),
            lock: dir.join(LOCK_FILE_NAME),
        }
    }
}

impl Default for FixtureLayout {
    fn default() -> Self {
        Self::current_dir()
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFixtures {
    /// Where the files were written
    pub layout: FixtureLayout,
    /// Byte counts of the data files
    pub stats: DataFileStats,
}

impl GeneratedFixtures {
    /// Message listing the produced files, one per line.
    #[must_use]
    pub fn confirmation(&self) -> String {
        format!(
            "Generated test files:\n - {}\n - {}\n - {}",
            self.layout.data.display(),
            self.layout.doubled_data.display(),
            self.layout.lock.display()
        )
    }
}

/// Writes the fixture set for a [`FixtureLayout`].
#[derive(Debug, Clone, Default)]
pub struct FixtureGenerator {
    layout: FixtureLayout,
}

impl FixtureGenerator {
    /// Create a generator targeting `layout`.
    #[must_use]
    pub const fn new(layout: FixtureLayout) -> Self {
        Self {
            layout,
        }
    }

    /// Target paths.
    #[must_use]
    pub const fn layout(&self) -> &FixtureLayout {
        &self.layout
    }

    /// Write both data files, then the lock marker.
    ///
    /// # Errors
    ///
    /// Fails on the first filesystem error. The error chain carries a
    /// [`FileOperationError`](crate::core::FileOperationError) naming the file.
    pub fn generate(&self) -> Result<GeneratedFixtures> {
        debug!(
            "Generating fixtures: {}, {}, {}",
            self.layout.data.display(),
            self.layout.doubled_data.display(),
            self.layout.lock.display()
        );

        let stats = write_data_files(&self.layout.data, &self.layout.doubled_data)
            .context("Failed to write data files")?;

        write_lock_marker(&self.layout.lock).context("Failed to write lock marker")?;

        info!(
            "Generated fixtures ({} + {} bytes of data, 1 byte lock marker)",
            stats.data_bytes, stats.doubled_bytes
        );

        Ok(GeneratedFixtures {
            layout: self.layout.clone(),
            stats,
        })
    }
}
