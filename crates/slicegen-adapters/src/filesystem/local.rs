//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use slicegen_core::{application::ports::Filesystem, error::SlicegenResult};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> SlicegenResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> SlicegenResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write_file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> SlicegenResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }

    fn remove_file(&self, path: &Path) -> SlicegenResult<()> {
        std::fs::remove_file(path).map_err(|e| map_io_error(path, e, "remove file"))
    }

    fn list_dirs(&self, path: &Path) -> SlicegenResult<Vec<PathBuf>> {
        let entries = std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;

        let mut dirs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(path, e, "read directory entry"))?;
            let entry_path = entry.path();
            if entry_path.is_dir() {
                dirs.push(entry_path);
            }
        }
        Ok(dirs)
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> slicegen_core::error::SlicegenError {
    use slicegen_core::application::ApplicationError;

    ApplicationError::WriteFailed {
        path: path.to_path_buf(),
        reason: format!("failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_lists_directories() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();

        let dir = temp.path().join("Order");
        fs.create_dir_all(&dir).unwrap();
        fs.write_file(&dir.join("routes.php"), "<?php").unwrap();

        assert!(fs.exists(&dir));
        let dirs = fs.list_dirs(temp.path()).unwrap();
        assert_eq!(dirs, vec![dir.clone()]);

        fs.remove_dir_all(&dir).unwrap();
        assert!(!fs.exists(&dir));
    }

    #[test]
    fn remove_file_only_removes_the_file() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();

        let file = temp.path().join("a.php");
        fs.write_file(&file, "x").unwrap();
        fs.remove_file(&file).unwrap();

        assert!(!fs.exists(&file));
        assert!(temp.path().exists());
    }
}
