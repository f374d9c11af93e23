//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read a whole file as UTF-8 text.
///
/// Content that is not valid UTF-8 surfaces as `file.invalid_encoding`;
/// every other failure is `internal.io_error`. The content is returned
/// untouched: a leading BOM and CRLF line endings survive as-is.
pub fn read_text(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::InvalidData {
            Error::file_invalid_encoding(path.display().to_string(), e.to_string())
        } else {
            Error::internal_io(e.to_string(), Some(operation.to_string()))
        }
    })
}

/// Overwrite a file in place with standardized error handling.
///
/// Plain truncate-and-write; a crash mid-write can leave the file partial.
pub fn write_text(path: &Path, content: &str, operation: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}
