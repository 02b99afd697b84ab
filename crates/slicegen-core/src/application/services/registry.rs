//! Explicit slice registry.
//!
//! The reference application auto-registered every slice's ServiceProvider
//! by globbing the slice tree inside framework bootstrap. Here discovery is
//! explicit and happens once: [`SliceRegistry::discover`] enumerates the
//! slice directories under the slices root and records, per slice, the
//! registration artifacts an application bootstrap would consume. Nothing
//! scans the filesystem implicitly after that.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{application::ports::Filesystem, error::SlicegenResult};

/// One discovered slice and its registration artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SliceEntry {
    /// Slice directory name (PascalCase).
    pub name: String,
    /// Expected ServiceProvider path.
    pub provider: PathBuf,
    /// Expected route file path.
    pub routes: PathBuf,
    /// True when both provider and routes file exist on disk. An incomplete
    /// slice is listed but flagged; the bootstrap should skip it.
    pub complete: bool,
}

/// Snapshot of the slices present under a slices root.
#[derive(Debug, Clone, Default)]
pub struct SliceRegistry {
    entries: Vec<SliceEntry>,
}

impl SliceRegistry {
    /// Enumerate slice directories under `slices_root`.
    ///
    /// A missing root is an empty registry, not an error: a fresh
    /// application simply has no slices yet. Entries are sorted by name so
    /// registration order is stable across runs.
    #[instrument(skip(fs))]
    pub fn discover(fs: &dyn Filesystem, slices_root: &Path) -> SlicegenResult<Self> {
        if !fs.exists(slices_root) {
            debug!(root = %slices_root.display(), "slices root does not exist, empty registry");
            return Ok(Self::default());
        }

        let mut entries: Vec<SliceEntry> = fs
            .list_dirs(slices_root)?
            .into_iter()
            .filter_map(|dir| {
                let name = dir.file_name()?.to_str()?.to_string();
                let provider = dir
                    .join("Providers")
                    .join(format!("{name}ServiceProvider.php"));
                let routes = dir.join("Http").join("routes.php");
                let complete = fs.exists(&provider) && fs.exists(&routes);
                Some(SliceEntry {
                    name,
                    provider,
                    routes,
                    complete,
                })
            })
            .collect();

        entries.sort_by(|a, b| a.name.cmp(&b.name));

        debug!(count = entries.len(), "slices discovered");
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[SliceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
