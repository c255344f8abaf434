//! File input utilities

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;
use wordfreq_core::Input;

/// Builds counter inputs from the filesystem and standard input
pub struct FileReader;

impl FileReader {
    /// Open a file and wrap the handle in a line-oriented input
    pub fn open(path: &Path) -> Result<Input> {
        let file = fs::File::open(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Ok(Input::from_named_reader(path.display().to_string(), file))
    }

    /// Create an input that reads standard input
    pub fn stdin() -> Input {
        Input::from_named_reader("stdin", io::stdin())
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;
    use wordfreq_core::WordCounter;

    #[test]
    fn test_open_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");
        fs::write(&file_path, "Hello, world!\nHello again.").unwrap();

        let input = FileReader::open(&file_path).unwrap();
        let table = WordCounter::new().count(input).unwrap();
        assert_eq!(table.count_of("Hello"), 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_open_holds_the_handle() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("held.txt");
        fs::write(&file_path, "kept words kept").unwrap();

        let input = FileReader::open(&file_path).unwrap();
        assert_eq!(input.label(), file_path.display().to_string());
        fs::remove_file(&file_path).unwrap();

        let table = WordCounter::new().count(input).unwrap();
        assert_eq!(table.count_of("kept"), 2);
        assert_eq!(table.count_of("words"), 1);
    }

    #[test]
    fn test_open_nonexistent_file() {
        let path = Path::new("/nonexistent/file.txt");
        let err = FileReader::open(path).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_stdin_label() {
        assert_eq!(FileReader::stdin().label(), "stdin");
    }

    #[test]
    fn test_file_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("sized.txt");
        fs::write(&file_path, "a".repeat(1024)).unwrap();

        assert_eq!(FileReader::file_size(&file_path).unwrap(), 1024);
    }

    #[test]
    fn test_file_size_nonexistent() {
        let err = FileReader::file_size(Path::new("/nonexistent/file.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to get metadata"));
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");
        File::create(&file_path).unwrap();

        let table = WordCounter::new()
            .count(FileReader::open(&file_path).unwrap())
            .unwrap();
        assert!(table.is_empty());
        assert_eq!(FileReader::file_size(&file_path).unwrap(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_open_permission_denied() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("no_read.txt");
        fs::write(&file_path, "content").unwrap();

        let mut permissions = fs::metadata(&file_path).unwrap().permissions();
        permissions.set_mode(0o000);
        fs::set_permissions(&file_path, permissions).unwrap();

        // Root can read anything, so only check the error when it occurs
        if let Err(err) = FileReader::open(&file_path) {
            assert!(err.to_string().contains("Failed to read file"));
        }

        let mut permissions = fs::metadata(&file_path).unwrap().permissions();
        permissions.set_mode(0o644);
        fs::set_permissions(&file_path, permissions).unwrap();
    }
}
