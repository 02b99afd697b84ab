//! Stub templates and the rendering context.
//!
//! A [`SliceBlueprint`] is the declarative description of everything one
//! slice contains: the directories to create, the file stubs to render, and
//! the optional migration content. Blueprints are *data* — no I/O, no code
//! in templates — so each stub can be unit-tested by rendering it against a
//! [`SliceContext`] and inspecting the output string.
//!
//! ## Variables
//!
//! Stub paths and contents may contain `{{VARIABLE}}` placeholders. The
//! context derives the standard set from a [`SliceName`]:
//!
//! | Variable       | Example (`create-order`) |
//! |----------------|--------------------------|
//! | `SLICE_PASCAL` | `CreateOrder`            |
//! | `SLICE_KEBAB`  | `create-order`           |
//! | `SLICE_SNAKE`  | `create_order`           |
//! | `SLICE_TABLE`  | `create_orders`          |

use std::collections::HashMap;
use std::path::PathBuf;

use crate::domain::{
    artifact::ArtifactSet,
    common::RelativePath,
    error::DomainError,
    name::SliceName,
};

/// Variable substitution context for stub rendering.
///
/// Immutable after creation; `with_variable` returns a new context. All
/// transformations happen once at construction, so rendering is a plain
/// scan-and-replace over a small fixed variable set.
#[derive(Debug, Clone)]
pub struct SliceContext {
    variables: HashMap<String, String>,
}

impl SliceContext {
    /// Build the standard context from a validated slice name.
    pub fn new(name: &SliceName) -> Self {
        let mut vars = HashMap::new();
        vars.insert("SLICE_PASCAL".to_string(), name.pascal());
        vars.insert("SLICE_KEBAB".to_string(), name.kebab());
        vars.insert("SLICE_SNAKE".to_string(), name.snake());
        vars.insert("SLICE_TABLE".to_string(), name.table());
        Self { variables: vars }
    }

    /// Add a custom variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// Unknown placeholders are left as-is rather than erroring; a literal
    /// `{{` in generated source (Blade syntax, say) must survive rendering.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}

/// Source of stub content: either compile-time or runtime.
///
/// Built-in blueprints reference static strings with zero allocation;
/// `Owned` exists for stubs loaded from disk or constructed in tests.
#[derive(Debug, Clone)]
pub enum StubSource {
    /// Compile-time string literal.
    Static(&'static str),

    /// Runtime-owned string (heap-allocated).
    Owned(String),
}

impl From<&'static str> for StubSource {
    fn from(s: &'static str) -> Self {
        Self::Static(s)
    }
}

impl From<String> for StubSource {
    fn from(s: String) -> Self {
        Self::Owned(s)
    }
}

impl StubSource {
    /// Get string slice regardless of storage type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s,
        }
    }
}

/// Content specification for a file stub.
#[derive(Debug, Clone)]
pub enum StubContent {
    /// Content used exactly as provided.
    Literal(StubSource),

    /// Content with `{{VARIABLE}}` placeholders to be substituted.
    Parameterized(StubSource),
}

impl StubContent {
    fn render(&self, ctx: &SliceContext) -> String {
        match self {
            Self::Literal(source) => source.as_str().to_string(),
            Self::Parameterized(source) => ctx.render(source.as_str()),
        }
    }
}

/// A single file stub: a path template plus a content template.
#[derive(Debug, Clone)]
pub struct FileStub {
    /// Relative path from the slice root, may contain placeholders
    /// (e.g. `Http/{{SLICE_PASCAL}}Controller.php`).
    pub path: &'static str,

    /// Content specification.
    pub content: StubContent,
}

impl FileStub {
    pub fn new(path: &'static str, content: StubContent) -> Self {
        Self { path, content }
    }
}

/// Declarative description of a complete slice.
///
/// ## Invariants (enforced by `validate()` and at render time)
///
/// 1. at least one file stub
/// 2. rendered paths are unique and relative
///
/// Directory entries are created before any file is written, so a stub may
/// rely on its parent directory existing.
#[derive(Debug, Clone)]
pub struct SliceBlueprint {
    /// Blueprint identifier for logs and display (e.g. "laravel-slice").
    pub name: &'static str,

    /// Subdirectories created under the slice root, in order.
    pub directories: Vec<&'static str>,

    /// File stubs rendered under the slice root, in order.
    pub files: Vec<FileStub>,

    /// Optional migration content, parameterized by `SLICE_TABLE`. The
    /// migration lives outside the slice root; its filename is derived by
    /// [`crate::domain::migration::migration_filename`].
    pub migration: Option<StubContent>,
}

impl SliceBlueprint {
    /// Validate blueprint invariants that hold before rendering.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::InvalidStub {
                stub: self.name.to_string(),
                reason: "blueprint has no file stubs".into(),
            });
        }
        Ok(())
    }

    /// Render every directory and file stub into an [`ArtifactSet`] rooted
    /// at `root`. Pure: the only inputs are the blueprint, the context, and
    /// the root path.
    pub fn render(&self, ctx: &SliceContext, root: impl Into<PathBuf>) -> Result<ArtifactSet, DomainError> {
        self.validate()?;

        let mut set = ArtifactSet::new(root);

        for dir in &self.directories {
            let path = RelativePath::try_new(ctx.render(dir))?;
            set.add_directory(path);
        }

        for stub in &self.files {
            let path = RelativePath::try_new(ctx.render(stub.path))?;
            set.add_file(path, stub.content.render(ctx));
        }

        set.validate()?;
        Ok(set)
    }

    /// Render the migration content for this blueprint, if it has one.
    pub fn render_migration(&self, ctx: &SliceContext) -> Option<String> {
        self.migration.as_ref().map(|content| content.render(ctx))
    }
}
