//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The target slice root already exists. No writes were performed.
    #[error("slice already exists at {path}")]
    SliceExists { path: PathBuf },

    /// A directory or file write was rejected by the underlying storage.
    #[error("write failed at {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    /// A filesystem read failed (registry discovery, existence probing).
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Rollback failed (best-effort cleanup failed).
    #[error("rollback failed for {path}: {reason}")]
    RollbackFailed { path: PathBuf, reason: String },

    /// The blueprint cannot satisfy the requested options.
    #[error("blueprint '{blueprint}' does not support: {feature}")]
    UnsupportedOption {
        blueprint: String,
        feature: &'static str,
    },

    /// Internal lock poisoned (in-memory adapters).
    #[error("filesystem state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SliceExists { path } => vec![
                format!("A slice already exists at: {}", path.display()),
                "Choose a different slice name".into(),
                "Or remove the existing slice directory first".into(),
            ],
            Self::WriteFailed { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
                "Partially written files were cleaned up".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that the directory exists and is readable".into(),
            ],
            Self::RollbackFailed { path, .. } => vec![
                format!("Cleanup failed; remove {} manually before retrying", path.display()),
            ],
            Self::UnsupportedOption { feature, .. } => vec![
                format!("The active blueprint has no {feature} stub"),
            ],
            Self::LockPoisoned => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SliceExists { .. } => ErrorCategory::Validation,
            Self::UnsupportedOption { .. } => ErrorCategory::Configuration,
            Self::WriteFailed { .. }
            | Self::FilesystemError { .. }
            | Self::RollbackFailed { .. }
            | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
