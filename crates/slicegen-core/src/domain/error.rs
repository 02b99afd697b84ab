use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers may retry with a corrected name)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Name validation
    // ========================================================================
    #[error("slice name cannot be empty")]
    EmptyName,

    #[error("slice name '{name}' contains a path separator")]
    PathSeparatorInName { name: String },

    #[error("invalid slice name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    // ========================================================================
    // Artifact set invariants
    // ========================================================================
    #[error("duplicate path in artifact set: {path}")]
    DuplicatePath { path: String },

    #[error("absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("artifact set is empty")]
    EmptyArtifactSet,

    // ========================================================================
    // Stub rendering
    // ========================================================================
    #[error("invalid stub '{stub}': {reason}")]
    InvalidStub { stub: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyName => vec![
                "Provide a slice name, e.g. slicegen make CreateOrder".into(),
            ],
            Self::PathSeparatorInName { name } => vec![
                format!("'{}' looks like a path, not a name", name),
                "Slice names become a single directory; use --slices-root to change where".into(),
            ],
            Self::InvalidName { name, .. } => vec![
                format!("'{}' cannot be turned into an identifier", name),
                "Use letters, digits, hyphens, or underscores".into(),
                "Examples: Order, create-order, order_item".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("The stub set produces '{}' twice", path),
                "This is a bug in the stub set definition; please report it".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyName | Self::PathSeparatorInName { .. } | Self::InvalidName { .. } => {
                ErrorCategory::Validation
            }
            Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::EmptyArtifactSet
            | Self::InvalidStub { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
