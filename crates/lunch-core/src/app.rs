use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::ValidationResult;
use crate::Config;

/// Application lifecycle: loads and validates configuration, exposes the
/// resolved backing file locations to the front end.
pub struct App {
    config: Config,
    validation: ValidationResult,
}

impl App {
    /// Create a new application instance from the user config (or an explicit file).
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let (config, validation) = Config::load_validated(config_path)?;
        Ok(Self::with_config(config, validation))
    }

    /// Create an application instance from an already loaded config.
    pub fn with_config(config: Config, validation: ValidationResult) -> Self {
        tracing::info!(
            restaurants = %config.storage.restaurants_path.display(),
            ratings = %config.storage.ratings_path.display(),
            "Application configured"
        );
        Self { config, validation }
    }

    /// Override the backing file locations (command-line flags win over config).
    pub fn override_paths(&mut self, restaurants: Option<PathBuf>, ratings: Option<PathBuf>) {
        if let Some(path) = restaurants {
            tracing::debug!("Restaurants file overridden: {}", path.display());
            self.config.storage.restaurants_path = path;
        }
        if let Some(path) = ratings {
            tracing::debug!("Ratings file overridden: {}", path.display());
            self.config.storage.ratings_path = path;
        }
    }

    pub fn shutdown(&mut self) {
        tracing::info!("Shutting down");
    }

    /// Get reference to application config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Warnings raised while validating the config
    pub fn config_warnings(&self) -> &ValidationResult {
        &self.validation
    }

    pub fn restaurants_path(&self) -> &Path {
        &self.config.storage.restaurants_path
    }

    pub fn ratings_path(&self) -> &Path {
        &self.config.storage.ratings_path
    }
}
