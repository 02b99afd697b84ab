//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `--config FILE` (must exist and parse)
//! 3. `.slicegen.toml` in the current directory
//! 4. The platform config directory (e.g. `~/.config/slicegen/config.toml`)
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where slices and migrations are generated.
    pub paths: PathsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Root directory slices are generated under.
    pub slices_root: PathBuf,
    /// Directory migrations are written to.
    pub migrations_root: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            slices_root: PathBuf::from("app/Slices"),
            migrations_root: PathBuf::from("database/migrations"),
        }
    }
}

impl AppConfig {
    /// Load configuration.
    ///
    /// An explicit `--config` path must exist; the fallback locations are
    /// optional and silently skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        if let Some(path) = config_file {
            return Self::from_file(path);
        }

        let local = Path::new(".slicegen.toml");
        if local.exists() {
            return Self::from_file(local);
        }

        let default_path = Self::config_path();
        if default_path.exists() {
            return Self::from_file(&default_path);
        }

        Ok(Self::default())
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.slicegen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "slicegen", "slicegen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".slicegen.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_roots() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.paths.slices_root, PathBuf::from("app/Slices"));
        assert_eq!(
            cfg.paths.migrations_root,
            PathBuf::from("database/migrations")
        );
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn parses_partial_toml() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [paths]
            slices_root = "src/Slices"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.paths.slices_root, PathBuf::from("src/Slices"));
        // Unspecified keys fall back to defaults.
        assert_eq!(
            cfg.paths.migrations_root,
            PathBuf::from("database/migrations")
        );
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let missing = PathBuf::from("/nonexistent/slicegen.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[output]\nno_color = true\n[paths]\nmigrations_root = \"db/mig\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert!(cfg.output.no_color);
        assert_eq!(cfg.paths.migrations_root, PathBuf::from("db/mig"));
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
