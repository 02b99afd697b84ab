//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use slicegen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::SlicegenResult,
};

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    /// When set, `write_file` fails once this many files exist.
    fail_after: Option<usize>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files, sorted (testing helper).
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    /// Number of files currently stored.
    pub fn file_count(&self) -> usize {
        self.inner.read().unwrap().files.len()
    }

    /// Make every subsequent `write_file` fail (testing helper for the
    /// rollback path).
    pub fn fail_writes_after(&self, allowed: usize) {
        let mut inner = self.inner.write().unwrap();
        inner.fail_after = Some(allowed);
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
        inner.fail_after = None;
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> SlicegenResult<()> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::LockPoisoned)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> SlicegenResult<()> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::LockPoisoned)?;

        if let Some(allowed) = inner.fail_after {
            if inner.files.len() >= allowed {
                return Err(ApplicationError::WriteFailed {
                    path: path.to_path_buf(),
                    reason: "simulated write failure".into(),
                }
                .into());
            }
        }

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::WriteFailed {
                    path: path.to_path_buf(),
                    reason: "parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn remove_dir_all(&self, path: &Path) -> SlicegenResult<()> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::LockPoisoned)?;

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }

    fn remove_file(&self, path: &Path) -> SlicegenResult<()> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::LockPoisoned)?;
        inner.files.remove(path);
        Ok(())
    }

    fn list_dirs(&self, path: &Path) -> SlicegenResult<Vec<PathBuf>> {
        let inner = self.inner.read().map_err(|_| ApplicationError::LockPoisoned)?;

        let mut dirs: Vec<_> = inner
            .directories
            .iter()
            .filter(|p| p.parent() == Some(path))
            .cloned()
            .collect();
        dirs.sort();
        Ok(dirs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("a/b.php"), "x").is_err());

        fs.create_dir_all(Path::new("a")).unwrap();
        assert!(fs.write_file(Path::new("a/b.php"), "x").is_ok());
        assert_eq!(fs.read_file(Path::new("a/b.php")).unwrap(), "x");
    }

    #[test]
    fn remove_dir_all_removes_subtree() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("root/sub")).unwrap();
        fs.write_file(Path::new("root/sub/f.php"), "x").unwrap();

        fs.remove_dir_all(Path::new("root")).unwrap();
        assert!(!fs.exists(Path::new("root")));
        assert!(!fs.exists(Path::new("root/sub/f.php")));
    }

    #[test]
    fn list_dirs_returns_immediate_children_only() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("root/a/deep")).unwrap();
        fs.create_dir_all(Path::new("root/b")).unwrap();

        let dirs = fs.list_dirs(Path::new("root")).unwrap();
        assert_eq!(dirs, vec![PathBuf::from("root/a"), PathBuf::from("root/b")]);
    }

    #[test]
    fn simulated_write_failures() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("d")).unwrap();
        fs.fail_writes_after(1);

        assert!(fs.write_file(Path::new("d/one.php"), "x").is_ok());
        assert!(fs.write_file(Path::new("d/two.php"), "x").is_err());
    }
}
