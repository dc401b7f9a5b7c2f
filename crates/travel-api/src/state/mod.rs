//! Application state
//!
//! Holds the shared state for the Axum application including
//! the service context and configuration.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use travel_common::{AppConfig, SessionConfig};
use travel_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
    /// Directory the image store writes its `uploads/` tree into
    storage_root: Arc<PathBuf>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        let storage_root = PathBuf::from(&config.storage.root_dir);
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            storage_root: Arc::new(storage_root),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Cookie name, lifetime and flags for session tokens
    pub fn session_config(&self) -> &SessionConfig {
        &self.config.session
    }

    pub fn storage_root(&self) -> &Path {
        &self.storage_root
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .field("storage_root", &self.storage_root)
            .finish()
    }
}
