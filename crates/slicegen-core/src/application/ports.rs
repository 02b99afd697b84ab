//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `slicegen-adapters` implement
//! these.

use std::path::{Path, PathBuf};

use crate::error::SlicegenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `slicegen_adapters::filesystem::LocalFilesystem` (production)
/// - `slicegen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// All writes the service performs go through this trait, so tests can
/// assert the exact write sequence (and its absence on the rejection path).
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SlicegenResult<()>;

    /// Write content to a file, creating or truncating it.
    fn write_file(&self, path: &Path, content: &str) -> SlicegenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> SlicegenResult<()>;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> SlicegenResult<()>;

    /// List the immediate child directories of `path`.
    fn list_dirs(&self, path: &Path) -> SlicegenResult<Vec<PathBuf>>;
}
