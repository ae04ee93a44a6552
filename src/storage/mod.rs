//! Output file writing
//!
//! Writes rendered entity files to disk. Directory creation is idempotent,
//! so concurrent writers producing sibling files do not conflict.

use std::path::Path;

use tracing::debug;

use crate::export::RenderedFile;

/// Error writing rendered files
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Cannot create directory {path}: {reason}")]
    CreateDir { path: String, reason: String },
    #[error("Cannot write {path}: {reason}")]
    WriteFile { path: String, reason: String },
}

/// Writes rendered files under their own paths, creating parent directories
/// as needed.
#[derive(Debug, Default)]
pub struct FileWriter;

impl FileWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write every file, returning how many were written.
    pub fn write_all(&self, files: &[RenderedFile]) -> Result<usize, StorageError> {
        for file in files {
            self.write(file)?;
        }
        Ok(files.len())
    }

    pub fn write(&self, file: &RenderedFile) -> Result<(), StorageError> {
        if let Some(parent) = file.path.parent() {
            create_dir_idempotent(parent)?;
        }
        std::fs::write(&file.path, &file.contents).map_err(|e| StorageError::WriteFile {
            path: file.path.display().to_string(),
            reason: e.to_string(),
        })?;
        debug!(path = %file.path.display(), "wrote entity file");
        Ok(())
    }
}

fn create_dir_idempotent(path: &Path) -> Result<(), StorageError> {
    std::fs::create_dir_all(path).map_err(|e| StorageError::CreateDir {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(root: &Path, rel: &str) -> RenderedFile {
        RenderedFile {
            path: root.join(rel),
            contents: "package com.example\n".to_string(),
        }
    }

    #[test]
    fn test_write_all_creates_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![
            rendered(dir.path(), "com/example/entity/User.kt"),
            rendered(dir.path(), "com/example/entity/Order.kt"),
        ];
        let written = FileWriter::new().write_all(&files).unwrap();
        assert_eq!(written, 2);
        for file in &files {
            assert_eq!(
                std::fs::read_to_string(&file.path).unwrap(),
                "package com.example\n"
            );
        }
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let file = rendered(dir.path(), "a/B.kt");
        let writer = FileWriter::new();
        writer.write(&file).unwrap();
        writer.write(&file).unwrap();
        assert!(file.path.exists());
    }

    #[test]
    fn test_directory_creation_through_a_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        std::fs::write(&blocker, "x").unwrap();
        let file = RenderedFile {
            path: blocker.join("sub/X.kt"),
            contents: String::new(),
        };
        assert!(matches!(
            FileWriter::new().write(&file),
            Err(StorageError::CreateDir { .. })
        ));
    }
}
