#![deny(warnings)]

// Read a whole file into memory as UTF-8 text

use crate::error::{FileIoError, Result};
use std::fs;

/// Read the entire contents of the file at `path` as UTF-8 text.
///
/// The path is used as-is; no expansion or sandboxing. A missing file, a
/// directory, or non-UTF-8 content all surface as distinct failure kinds.
pub fn read_file(path: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| FileIoError::from_io_error("read file", path, e).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FileIoBridgeError;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_read_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "hello world").unwrap();
        let path = file.path().to_str().unwrap();

        let content = read_file(path).unwrap();
        assert_eq!(content, "hello world");
    }

    #[test]
    fn test_read_file_preserves_newlines() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "line 1\nline 2\n").unwrap();
        let path = file.path().to_str().unwrap();

        let content = read_file(path).unwrap();
        assert_eq!(content, "line 1\nline 2\n");
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.txt").to_str().unwrap().to_string();

        let err = read_file(&path).unwrap_err();
        assert!(matches!(
            err,
            FileIoBridgeError::FileIo(FileIoError::NotFound(_))
        ));
        assert!(err.to_string().starts_with("NotFound: "));
    }

    #[test]
    fn test_read_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().to_str().unwrap();

        // Exact kind differs by platform; the call must fail either way.
        let err = read_file(path).unwrap_err();
        assert!(matches!(err, FileIoBridgeError::FileIo(_)));
    }

    #[test]
    fn test_read_non_utf8_is_invalid_encoding() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0xfd]).unwrap();
        let path = file.path().to_str().unwrap();

        let err = read_file(path).unwrap_err();
        assert!(matches!(
            err,
            FileIoBridgeError::FileIo(FileIoError::InvalidEncoding(_))
        ));
    }
}
