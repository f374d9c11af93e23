//! Path argument expansion.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Expand a leading `~` in a user-supplied path.
pub fn expand(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).to_string())
}

/// Resolve the project root: the given directory, or the current one.
pub fn resolve_root(raw: Option<&str>) -> Result<PathBuf> {
    let root = match raw {
        Some(r) => expand(r),
        None => std::env::current_dir()
            .map_err(|e| Error::internal_io(e.to_string(), Some("read current dir".to_string())))?,
    };

    if !root.is_dir() {
        return Err(Error::validation_invalid_argument(
            "root",
            format!("Not a directory: {}", root.display()),
        ));
    }

    Ok(root)
}
