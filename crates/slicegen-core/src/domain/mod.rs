//! Core domain layer for slicegen.
//!
//! This module contains pure business logic with ZERO I/O:
//!
//! - **No async**: domain logic is synchronous
//! - **No filesystem**: rendering produces an in-memory [`ArtifactSet`];
//!   the application layer materializes it through a port
//! - **No external crates** beyond `thiserror` and `chrono`
//! - **Immutable values**: a [`SliceName`] and its derived forms never
//!   change after construction

pub mod artifact;
pub mod common;
pub mod error;
pub mod migration;
pub mod name;
pub mod stub;

// Re-exports for convenience
pub use artifact::{ArtifactSet, DirectoryToCreate, FileToWrite, FsEntry};
pub use common::RelativePath;
pub use error::{DomainError, ErrorCategory};
pub use migration::{migration_filename, next_sequence};
pub use name::SliceName;
pub use stub::{FileStub, SliceBlueprint, SliceContext, StubContent, StubSource};
