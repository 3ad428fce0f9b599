//! Unified path management for apod files.
//!
//! All locations are resolved through the `dirs` crate so the layout follows
//! each platform's conventions (XDG on Linux, `~/Library` on macOS,
//! `%APPDATA%` on Windows).

use std::path::{Path, PathBuf};

const APP_DIR: &str = "apod";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform directory could not be determined.
    DirNotFound(&'static str),
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::DirNotFound(kind) => write!(f, "Cannot find {} directory", kind),
        }
    }
}

impl std::error::Error for PathError {}

/// Path resolver for apod.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/apod/              # Config directory
/// └── config.toml              # Application configuration
///
/// ~/.cache/apod/               # Cache directory
/// └── records/                 # One JSON file per stored date
///     └── 2024-01-01.json
/// ```
///
/// A base path replaces both platform roots, which keeps tests and portable
/// installs inside a single directory.
#[derive(Debug, Clone, Default)]
pub struct ApodPaths {
    base_path: Option<PathBuf>,
}

impl ApodPaths {
    pub fn new(base_path: Option<&Path>) -> Self {
        Self {
            base_path: base_path.map(Path::to_path_buf),
        }
    }

    /// Returns the apod configuration directory.
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_path {
            Some(base) => Ok(base.join("config")),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::DirNotFound("config")),
        }
    }

    /// Returns the apod cache directory.
    pub fn cache_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_path {
            Some(base) => Ok(base.join("cache")),
            None => dirs::cache_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::DirNotFound("cache")),
        }
    }

    /// Returns the path to `config.toml`.
    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Returns the default record store directory.
    pub fn records_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.cache_dir()?.join("records"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_path_overrides_platform_dirs() {
        let paths = ApodPaths::new(Some(Path::new("/tmp/apod-test")));
        assert_eq!(
            paths.config_file().unwrap(),
            PathBuf::from("/tmp/apod-test/config/config.toml")
        );
        assert_eq!(
            paths.records_dir().unwrap(),
            PathBuf::from("/tmp/apod-test/cache/records")
        );
    }

    #[test]
    fn test_default_paths_end_with_app_dir() {
        let paths = ApodPaths::default();
        if let Ok(config_file) = paths.config_file() {
            assert!(config_file.ends_with("apod/config.toml"));
        }
        if let Ok(records) = paths.records_dir() {
            assert!(records.ends_with("apod/records"));
        }
    }
}
