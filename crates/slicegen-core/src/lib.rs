//! slicegen core - hexagonal architecture implementation.
//!
//! This crate provides the domain and application layers for the slicegen
//! vertical-slice generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          slicegen-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (SliceService, SliceRegistry)       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     Application Ports (Filesystem)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    slicegen-adapters (Infrastructure)   │
//! │  (LocalFilesystem, MemoryFilesystem,    │
//! │   built-in Laravel blueprint)           │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │ (SliceName, SliceBlueprint, ArtifactSet)│
//! │        No I/O, fully deterministic      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use slicegen_core::application::{GenerateOptions, SliceService};
//!
//! # fn demo(filesystem: Box<dyn slicegen_core::application::Filesystem>,
//! #         blueprint: slicegen_core::domain::SliceBlueprint) {
//! let service = SliceService::new(filesystem, blueprint, "app/Slices", "database/migrations");
//! let report = service
//!     .generate("create-order", GenerateOptions { migration: true, dry_run: false })
//!     .unwrap();
//! assert_eq!(report.pascal, "CreateOrder");
//! # }
//! ```

// Domain layer (stable, well-defined API)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Filesystem, GenerateOptions, GenerateReport, SliceEntry, SliceRegistry, SliceService,
    };
    pub use crate::domain::{
        ArtifactSet, FileStub, SliceBlueprint, SliceContext, SliceName, StubContent, StubSource,
    };
    pub use crate::error::{SlicegenError, SlicegenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
