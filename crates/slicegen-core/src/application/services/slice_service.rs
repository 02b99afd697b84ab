//! Slice generation service - main application orchestrator.
//!
//! Workflow:
//! 1. Validate the slice name
//! 2. Check the sole precondition (target root must not exist)
//! 3. Render the entire artifact set in memory
//! 4. Commit everything through the filesystem port, rolling back on failure
//!
//! Nothing touches the filesystem until every artifact has rendered and
//! validated, so a rendering failure can never leave a partial tree behind.

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{
        ArtifactSet, FsEntry, SliceBlueprint, SliceContext, SliceName, migration_filename,
        next_sequence,
    },
    error::{SlicegenError, SlicegenResult},
};

/// Options for a single generation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Also emit a timestamped migration artifact.
    pub migration: bool,

    /// Render and validate, but write nothing.
    pub dry_run: bool,
}

/// Outcome of a generation run, for display by the caller.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    /// PascalCase slice name (also the target directory name).
    pub pascal: String,
    /// Route slug.
    pub kebab: String,
    /// Storage table name.
    pub table: String,
    /// Target root directory.
    pub root: PathBuf,
    /// Directories created (or that would be, for dry runs).
    pub directories: Vec<PathBuf>,
    /// Files written (or that would be, for dry runs).
    pub files: Vec<PathBuf>,
    /// Migration file path, if one was requested.
    pub migration: Option<PathBuf>,
    /// Whether this was a dry run.
    pub dry_run: bool,
}

/// Main slice generation service.
///
/// Owns the blueprint and the two output roots; each [`generate`] call is
/// independent and holds no state across invocations.
///
/// [`generate`]: SliceService::generate
pub struct SliceService {
    filesystem: Box<dyn Filesystem>,
    blueprint: SliceBlueprint,
    slices_root: PathBuf,
    migrations_root: PathBuf,
}

impl SliceService {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        blueprint: SliceBlueprint,
        slices_root: impl Into<PathBuf>,
        migrations_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            filesystem,
            blueprint,
            slices_root: slices_root.into(),
            migrations_root: migrations_root.into(),
        }
    }

    /// Generate a slice.
    ///
    /// # Errors
    ///
    /// - `DomainError` variants if the name fails validation (no writes)
    /// - [`ApplicationError::SliceExists`] if the target root exists (no writes)
    /// - [`ApplicationError::WriteFailed`] if the commit fails; already
    ///   written artifacts are rolled back best-effort
    #[instrument(skip_all, fields(name = raw_name))]
    pub fn generate(
        &self,
        raw_name: &str,
        options: GenerateOptions,
    ) -> SlicegenResult<GenerateReport> {
        // 1. Validate the name; everything downstream derives from it.
        let name = SliceName::parse(raw_name).map_err(SlicegenError::Domain)?;
        let root = self.slices_root.join(name.pascal());

        debug!(
            pascal = %name.pascal(),
            kebab = %name.kebab(),
            table = %name.table(),
            root = %root.display(),
            "slice name resolved"
        );

        // 2. Sole precondition: the target root must not exist. Rejection
        //    is idempotent, never an overwrite.
        if self.filesystem.exists(&root) {
            return Err(ApplicationError::SliceExists { path: root }.into());
        }

        // 3. Stage: render everything in memory before any write.
        let ctx = SliceContext::new(&name);
        let set = self
            .blueprint
            .render(&ctx, &root)
            .map_err(SlicegenError::Domain)?;

        let migration = if options.migration {
            let content = self.blueprint.render_migration(&ctx).ok_or_else(|| {
                ApplicationError::UnsupportedOption {
                    blueprint: self.blueprint.name.to_string(),
                    feature: "migration",
                }
            })?;
            let filename = migration_filename(&name, Local::now().naive_local(), next_sequence());
            Some((self.migrations_root.join(filename), content))
        } else {
            None
        };

        let report = GenerateReport {
            pascal: name.pascal(),
            kebab: name.kebab(),
            table: name.table(),
            root: root.clone(),
            directories: set.directories().map(|d| root.join(d.path.as_path())).collect(),
            files: set.files().map(|f| root.join(f.path.as_path())).collect(),
            migration: migration.as_ref().map(|(p, _)| p.clone()),
            dry_run: options.dry_run,
        };

        if options.dry_run {
            info!(slice = %report.pascal, "dry run, nothing written");
            return Ok(report);
        }

        // 4. Commit with rollback on failure.
        match self.commit(&set, migration.as_ref()) {
            Ok(()) => {
                info!(
                    slice = %report.pascal,
                    files = report.files.len(),
                    migration = report.migration.is_some(),
                    "slice created"
                );
                Ok(report)
            }
            Err(e) => {
                warn!(slice = %report.pascal, "commit failed, rolling back");
                self.rollback(&root, migration.as_ref().map(|(p, _)| p.as_path()));
                Err(e)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Internal helpers
    // -------------------------------------------------------------------------

    /// Write all staged artifacts: root, directories, files, then migration.
    fn commit(
        &self,
        set: &ArtifactSet,
        migration: Option<&(PathBuf, String)>,
    ) -> SlicegenResult<()> {
        self.filesystem.create_dir_all(set.root())?;

        for entry in set.entries() {
            let path = set.root().join(entry.path().as_path());
            match entry {
                FsEntry::Directory(_) => self.filesystem.create_dir_all(&path)?,
                FsEntry::File(file) => {
                    // Blueprint ordering puts directories first, but a stub
                    // may still name a parent no directory entry declared.
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                    self.filesystem.write_file(&path, &file.content)?;
                }
            }
        }

        if let Some((path, content)) = migration {
            self.filesystem.create_dir_all(&self.migrations_root)?;
            // Cross-process same-second collision: refuse rather than
            // silently overwrite another run's migration.
            if self.filesystem.exists(path) {
                return Err(ApplicationError::WriteFailed {
                    path: path.clone(),
                    reason: "migration file already exists".into(),
                }
                .into());
            }
            self.filesystem.write_file(path, content)?;
        }

        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path, migration: Option<&Path>) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(error = %e, path = %root.display(), "rollback failed");
        }
        if let Some(path) = migration {
            if self.filesystem.exists(path) {
                if let Err(e) = self.filesystem.remove_file(path) {
                    warn!(error = %e, path = %path.display(), "migration rollback failed");
                }
            }
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FileStub, StubContent};
    use mockall::mock;

    mock! {
        Fs {}
        impl Filesystem for Fs {
            fn create_dir_all(&self, path: &Path) -> SlicegenResult<()>;
            fn write_file(&self, path: &Path, content: &str) -> SlicegenResult<()>;
            fn exists(&self, path: &Path) -> bool;
            fn remove_dir_all(&self, path: &Path) -> SlicegenResult<()>;
            fn remove_file(&self, path: &Path) -> SlicegenResult<()>;
            fn list_dirs(&self, path: &Path) -> SlicegenResult<Vec<PathBuf>>;
        }
    }

    fn blueprint() -> SliceBlueprint {
        SliceBlueprint {
            name: "test",
            directories: vec!["Http"],
            files: vec![FileStub::new(
                "Http/{{SLICE_PASCAL}}Controller.php",
                StubContent::Parameterized("class {{SLICE_PASCAL}}Controller {}".into()),
            )],
            migration: Some(StubContent::Parameterized(
                "Schema::create('{{SLICE_TABLE}}')".into(),
            )),
        }
    }

    fn service(fs: MockFs) -> SliceService {
        SliceService::new(Box::new(fs), blueprint(), "app/Slices", "database/migrations")
    }

    #[test]
    fn existing_target_performs_zero_writes() {
        let mut fs = MockFs::new();
        fs.expect_exists()
            .withf(|p| p == Path::new("app/Slices/Order"))
            .return_const(true);
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let err = service(fs)
            .generate("Order", GenerateOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            SlicegenError::Application(ApplicationError::SliceExists { .. })
        ));
    }

    #[test]
    fn invalid_name_never_touches_filesystem() {
        let mut fs = MockFs::new();
        fs.expect_exists().never();
        fs.expect_write_file().never();

        let err = service(fs)
            .generate("../evil", GenerateOptions::default())
            .unwrap_err();
        assert!(matches!(err, SlicegenError::Domain(_)));
    }

    #[test]
    fn dry_run_renders_but_writes_nothing() {
        let mut fs = MockFs::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let report = service(fs)
            .generate(
                "create-order",
                GenerateOptions {
                    migration: true,
                    dry_run: true,
                },
            )
            .unwrap();

        assert!(report.dry_run);
        assert_eq!(report.pascal, "CreateOrder");
        assert_eq!(report.kebab, "create-order");
        assert_eq!(report.table, "create_orders");
        assert_eq!(report.files.len(), 1);
        assert!(report.migration.is_some());
    }

    #[test]
    fn write_failure_triggers_rollback() {
        let mut fs = MockFs::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|path, _| {
            Err(ApplicationError::WriteFailed {
                path: path.to_path_buf(),
                reason: "disk full".into(),
            }
            .into())
        });
        fs.expect_remove_dir_all()
            .withf(|p| p == Path::new("app/Slices/Order"))
            .times(1)
            .returning(|_| Ok(()));

        let err = service(fs)
            .generate("Order", GenerateOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            SlicegenError::Application(ApplicationError::WriteFailed { .. })
        ));
    }

    #[test]
    fn successful_generate_reports_created_paths() {
        let mut fs = MockFs::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));

        let report = service(fs)
            .generate("Order", GenerateOptions::default())
            .unwrap();

        assert_eq!(report.root, PathBuf::from("app/Slices/Order"));
        assert_eq!(
            report.files,
            vec![PathBuf::from("app/Slices/Order/Http/OrderController.php")]
        );
        assert!(report.migration.is_none());
    }
}
