//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, Environment, File};
use roster_core::RosterError;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Configuration loader with runtime refresh support.
///
/// Configuration is loaded from multiple sources in order:
/// 1. Struct defaults (embedded in source)
/// 2. `config/default.toml`
/// 3. `config/{environment}.toml`
/// 4. Environment variables with `ROSTER_` prefix (`__` as separator)
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader reading from `config_dir`.
    pub fn new(config_dir: impl Into<String>) -> Result<Self, RosterError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, RosterError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Reloads the configuration from disk.
    pub async fn reload(&self) -> Result<(), RosterError> {
        let new_config = Self::load_config(&self.config_dir)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded");
        Ok(())
    }

    fn load_config(config_dir: &str) -> Result<AppConfig, RosterError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {}", e);
        }

        let environment =
            std::env::var("ROSTER_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        debug!("Loading configuration for environment: {}", environment);

        // Seed with struct defaults so partial files and env overrides
        // merge on top of a complete configuration
        let defaults = Config::try_from(&AppConfig::default())
            .map_err(|e| RosterError::Configuration(e.to_string()))?;
        let mut builder = Config::builder().add_source(defaults);

        let default_path = format!("{}/default.toml", config_dir);
        if Path::new(&default_path).exists() {
            builder = builder.add_source(File::with_name(&default_path).required(false));
        }

        let env_path = format!("{}/{}.toml", config_dir, environment);
        if Path::new(&env_path).exists() {
            builder = builder.add_source(File::with_name(&env_path).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix("ROSTER")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| RosterError::Configuration(e.to_string()))?;

        settings
            .try_deserialize::<AppConfig>()
            .map_err(|e| RosterError::Configuration(e.to_string()))
    }
}

impl std::fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("config_dir", &self.config_dir)
            .finish_non_exhaustive()
    }
}
