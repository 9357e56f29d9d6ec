//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read file contents with standardized error handling.
///
/// Wraps `fs::read_to_string`. Bytes that are not valid UTF-8 surface as
/// `Error::internal_decode`, everything else as `Error::internal_io`.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::InvalidData {
            Error::internal_decode(e.to_string(), Some(operation.to_string()))
        } else {
            Error::internal_io(e.to_string(), Some(operation.to_string()))
        }
    })
}

/// Write content to file with standardized error handling.
///
/// Plain in-place overwrite: no temp file, no backup.
pub fn write_file(path: &Path, content: &str, operation: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}
