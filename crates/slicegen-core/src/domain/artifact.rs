//! Rendered artifacts ready for materialization.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{common::RelativePath, error::DomainError};

/// Final artifact set ready for materialization.
///
/// This is the output of rendering a blueprint: an ordered list of
/// directories and files, all relative to `root`. It contains no business
/// logic, only data; the application layer decides how (and whether) to
/// write it.
#[derive(Debug, Clone)]
pub struct ArtifactSet {
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<FsEntry>,
}

impl ArtifactSet {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    /// The target root directory (e.g. `app/Slices/CreateOrder`).
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn add_file(&mut self, path: RelativePath, content: String) {
        self.entries.push(FsEntry::File(FileToWrite { path, content }));
    }

    pub fn add_directory(&mut self, path: RelativePath) {
        self.entries.push(FsEntry::Directory(DirectoryToCreate { path }));
    }

    pub fn with_file(mut self, path: RelativePath, content: String) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn with_directory(mut self, path: RelativePath) -> Self {
        self.add_directory(path);
        self
    }

    /// Check artifact-set invariants: non-empty, no duplicate paths.
    ///
    /// Relative-path safety is already guaranteed by [`RelativePath`].
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyArtifactSet);
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = entry.path().as_str();
            if !seen.insert(path.to_string()) {
                return Err(DomainError::DuplicatePath {
                    path: path.to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn entries(&self) -> impl Iterator<Item = &FsEntry> {
        self.entries.iter()
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone)]
pub enum FsEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

impl FsEntry {
    pub fn path(&self) -> &RelativePath {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: RelativePath,
    pub content: String,
}

impl FileToWrite {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

#[derive(Debug, Clone)]
pub struct DirectoryToCreate {
    pub path: RelativePath,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_set_builds_correctly() {
        let set = ArtifactSet::new("app/Slices/Order")
            .with_directory("Http".into())
            .with_file("Http/routes.php".into(), "<?php".into());

        assert_eq!(set.entry_count(), 2);
        assert_eq!(set.files().count(), 1);
        assert_eq!(set.directories().count(), 1);
        assert!(set.validate().is_ok());
    }

    #[test]
    fn duplicate_paths_rejected() {
        let set = ArtifactSet::new("out")
            .with_file("a.php".into(), String::new())
            .with_file("a.php".into(), String::new());

        assert!(matches!(
            set.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn empty_set_rejected() {
        let set = ArtifactSet::new("out");
        assert!(matches!(set.validate(), Err(DomainError::EmptyArtifactSet)));
    }
}
