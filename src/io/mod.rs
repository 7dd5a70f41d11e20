pub mod output;
pub mod writers;

pub use output::{create_writer, Advice, OutputFormat, OutputWriter};

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Read a file, or stdin when the path is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        read_file(path)
    }
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("answers.json");
        assert!(!file_exists(&path));
        write_file(&path, "{}").unwrap();
        assert!(file_exists(&path));
        assert_eq!(read_input(&path).unwrap(), "{}");
    }

    #[test]
    fn test_missing_file_error_names_path() {
        let err = read_file(Path::new("/nonexistent/answers.json")).unwrap_err();
        assert!(err.to_string().contains("answers.json"));
    }
}
