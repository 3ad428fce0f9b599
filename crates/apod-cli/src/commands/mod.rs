use std::sync::Arc;

use anyhow::{Context, Result};
use apod_application::Resolver;
use apod_core::config::ApodConfig;
use apod_core::resolution::ResolutionObserver;
use apod_infrastructure::{ConfigService, FileRecordStore};
use apod_interaction::ApodApiClient;

pub mod browse;
pub mod cache;
pub mod config;
pub mod show;

/// Loaded config plus the service it came from.
pub struct AppContext {
    pub config_service: ConfigService,
    pub config: ApodConfig,
}

impl AppContext {
    pub fn load(config_service: ConfigService) -> Result<Self> {
        let config = config_service.load().with_context(|| {
            format!(
                "Failed to load config from {}",
                config_service.config_file().display()
            )
        })?;
        Ok(Self {
            config_service,
            config,
        })
    }

    pub fn record_store(&self) -> Result<FileRecordStore> {
        let root = self.config_service.records_dir(&self.config)?;
        Ok(FileRecordStore::with_path(root))
    }

    /// Wires the file store and the HTTP client into a resolver.
    pub fn resolver(&self, observer: Arc<dyn ResolutionObserver>) -> Result<Resolver> {
        let store = self.record_store()?;
        let remote = ApodApiClient::from_config(&self.config.api)?;
        tracing::debug!(
            records = %store.root().display(),
            endpoint = %remote.base_url(),
            "Resolver ready"
        );
        Ok(Resolver::new(Arc::new(store), Arc::new(remote), observer))
    }
}
