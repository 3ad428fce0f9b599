//! Configuration loading.
//!
//! Reads `config.toml`, then lets the environment override the values that
//! commonly differ between machines.

use std::path::{Path, PathBuf};

use apod_core::config::ApodConfig;
use apod_core::error::{ApodError, Result};

use crate::paths::ApodPaths;
use crate::storage::AtomicFile;

/// Environment variable overriding `api.key`.
pub const ENV_API_KEY: &str = "NASA_API_KEY";
/// Environment variable overriding `storage.cache_dir`.
pub const ENV_CACHE_DIR: &str = "APOD_CACHE_DIR";

/// Loads and saves [`ApodConfig`].
///
/// # Example
///
/// ```ignore
/// use apod_infrastructure::ConfigService;
///
/// let service = ConfigService::new(None)?;
/// let config = service.load()?;
/// let records_dir = service.records_dir(&config)?;
/// ```
#[derive(Debug, Clone)]
pub struct ConfigService {
    paths: ApodPaths,
    config_file: PathBuf,
}

impl ConfigService {
    /// Creates a service using the platform config location, or `base_path`
    /// for both config and cache when given.
    pub fn new(base_path: Option<&Path>) -> Result<Self> {
        let paths = ApodPaths::new(base_path);
        let config_file = paths
            .config_file()
            .map_err(|e| ApodError::config(format!("Failed to get config path: {}", e)))?;
        Ok(Self { paths, config_file })
    }

    /// Creates a service reading an explicit config file.
    pub fn with_path(config_file: impl Into<PathBuf>) -> Self {
        Self {
            paths: ApodPaths::default(),
            config_file: config_file.into(),
        }
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    fn file(&self) -> AtomicFile<ApodConfig> {
        AtomicFile::toml(self.config_file.clone())
    }

    /// Reads the config file only; a missing file yields defaults.
    pub fn load_file(&self) -> Result<ApodConfig> {
        Ok(self.file().load()?.unwrap_or_default())
    }

    /// Reads the config file and applies environment overrides.
    pub fn load(&self) -> Result<ApodConfig> {
        let config = self.load_file()?;
        Ok(apply_overrides(config, |name| std::env::var(name).ok()))
    }

    /// Writes `config` to the config file atomically.
    pub fn save(&self, config: &ApodConfig) -> Result<()> {
        self.file().save(config)?;
        tracing::info!(path = %self.config_file.display(), "Saved config");
        Ok(())
    }

    /// Writes a default config file unless one exists.
    ///
    /// Returns `true` when a new file was written.
    pub fn init(&self) -> Result<bool> {
        if self.config_file.exists() {
            return Ok(false);
        }
        self.save(&ApodConfig::default())?;
        Ok(true)
    }

    /// Directory for the record store: the configured one, else the platform
    /// cache directory.
    pub fn records_dir(&self, config: &ApodConfig) -> Result<PathBuf> {
        match &config.storage.cache_dir {
            Some(dir) => Ok(dir.clone()),
            None => self
                .paths
                .records_dir()
                .map_err(|e| ApodError::config(format!("Failed to get records dir: {}", e))),
        }
    }
}

/// Applies environment overrides using `lookup` to read variables.
///
/// Blank values are ignored so an exported-but-empty variable doesn't wipe
/// the configured key.
pub fn apply_overrides<F>(mut config: ApodConfig, lookup: F) -> ApodConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = lookup(ENV_API_KEY).filter(|v| !v.trim().is_empty()) {
        config.api.key = key.trim().to_string();
    }
    if let Some(dir) = lookup(ENV_CACHE_DIR).filter(|v| !v.trim().is_empty()) {
        config.storage.cache_dir = Some(PathBuf::from(dir));
    }
    config
}
