#![deny(warnings)]

// Write content to a file, creating parent directories

use crate::error::{FileIoError, Result};
use std::fs;
use std::path::Path;

/// Write `content` to the file at `path` as UTF-8 text, truncating any
/// existing content. Missing parent directories are created first;
/// already-existing directories are not an error.
pub fn write_file(path: &str, content: &str) -> Result<()> {
    let path_obj = Path::new(path);

    // Create parent directories if they don't exist
    if let Some(parent) = path_obj.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            FileIoError::from_io_error("create parent directories for", path, e)
        })?;
    }

    fs::write(path_obj, content)
        .map_err(|e| FileIoError::from_io_error("write file", path, e))?;

    Ok(())
}
