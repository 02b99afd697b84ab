//! Application layer for slicegen.
//!
//! This layer contains:
//! - **Services**: use case orchestration ([`SliceService`], [`SliceRegistry`])
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{GenerateOptions, GenerateReport, SliceEntry, SliceRegistry, SliceService};

// Re-export port traits (for adapter implementation)
pub use ports::Filesystem;

pub use error::ApplicationError;
