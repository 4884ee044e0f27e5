//! UTF-8 file reading

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads whole input files as text
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// File size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;
        Ok(metadata.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.txt");
        fs::write(&path, "Dr. Smith left. He returned.").unwrap();

        assert_eq!(
            FileReader::read_text(&path).unwrap(),
            "Dr. Smith left. He returned."
        );
        assert_eq!(FileReader::file_size(&path).unwrap(), 28);
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = FileReader::read_text(Path::new("/nonexistent/input.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
        assert!(err.to_string().contains("/nonexistent/input.txt"));
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.txt");
        fs::write(&path, [0x63, 0x61, 0x66, 0xe9]).unwrap();

        assert!(FileReader::read_text(&path).is_err());
    }

    #[test]
    fn test_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        assert_eq!(FileReader::read_text(&path).unwrap(), "");
        assert_eq!(FileReader::file_size(&path).unwrap(), 0);
    }
}
