//! Infrastructure adapters for slicegen.
//!
//! This crate implements the ports defined in
//! `slicegen-core::application::ports` and ships the built-in Laravel slice
//! blueprint. It contains all external dependencies and I/O operations.

pub mod builtin;
pub mod filesystem;

// Re-export commonly used adapters
pub use builtin::laravel_blueprint;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
