//! Fixed names and dimensions of the generated fixtures.
//!
//! None of these are configurable; the evaluation programs that consume the
//! fixtures expect exactly this layout.

/// Digit-sequence data file.
pub const DATA_FILE_NAME: &str = "data.txt";

/// Doubled-value companion data file.
pub const DOUBLED_DATA_FILE_NAME: &str = "data2.txt";

/// Single-byte lock marker.
pub const LOCK_FILE_NAME: &str = "lockfile.lock";

/// Number of lines written to each data file.
pub const LINE_COUNT: usize = 50;

/// Values per line; each line covers `0..VALUES_PER_LINE`.
pub const VALUES_PER_LINE: u32 = 1000;

/// Factor applied to every value in the companion file.
pub const DOUBLING_FACTOR: u32 = 2;

/// Line terminator for both data files.
pub const LINE_BREAK: u8 = b'\n';

/// Contents of the lock marker file.
pub const LOCK_MARKER_BYTE: u8 = 0x00;
