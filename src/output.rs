//! Output writing. The target file is created or truncated, never appended to.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn write(path: &Path, document: &str) -> Result<()> {
    fs::write(path, document)
        .with_context(|| format!("Failed to write output: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_overwrites_longer_content() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("compose.yaml");
        fs::write(&path, "a much longer previous document\n".repeat(10))?;

        write(&path, "short\n")?;
        assert_eq!(fs::read_to_string(&path)?, "short\n");
        Ok(())
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("compose.yaml");

        let err = write(&path, "x").unwrap_err();
        assert!(err.to_string().contains("Failed to write output"));
    }
}
