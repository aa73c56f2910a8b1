use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// Prefix for environment overrides, e.g. `LUNCH_WEATHER__LATITUDE=37.4`.
const ENV_PREFIX: &str = "LUNCH";

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backing files and startup behavior
    pub storage: StorageConfig,

    /// Weather panel settings
    pub weather: WeatherConfig,
}

/// What to do when the restaurant file cannot be read at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoadFailurePolicy {
    /// Warn and carry on with an empty table.
    #[default]
    Continue,
    /// Report the failure and stop before handling the command.
    Halt,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Restaurant table backing file
    pub restaurants_path: PathBuf,

    /// Rating aggregate backing file
    pub ratings_path: PathBuf,

    pub on_load_failure: LoadFailurePolicy,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            restaurants_path: PathBuf::from("restaurants.json"),
            ratings_path: PathBuf::from("ratings.json"),
            on_load_failure: LoadFailurePolicy::Continue,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// Show the weather panel at all
    pub enabled: bool,

    /// Open-Meteo base URL
    pub base_url: String,

    pub latitude: f64,
    pub longitude: f64,

    /// Human-readable name of the fixed origin, also used for distances
    pub location_label: String,

    /// IANA timezone passed to the forecast endpoint
    pub timezone: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "https://api.open-meteo.com".to_string(),
            // 테헤란로 231, Gangnam-gu, Seoul
            latitude: 37.5036,
            longitude: 127.0448,
            location_label: "테헤란로 231".to_string(),
            timezone: "Asia/Seoul".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Config {
    /// Load configuration from the user config directory, creating it with
    /// defaults if it doesn't exist. `LUNCH_*` environment variables win over
    /// the file.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Self::default();
            if let Err(e) = config.save_to(&config_path) {
                // A read-only home shouldn't stop lunch.
                tracing::warn!("Could not write default config: {:#}", e);
            }
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit file, layered with environment overrides.
    /// A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        settings
            .try_deserialize::<Config>()
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings.
    /// Returns an error if validation fails with critical errors.
    pub fn load_validated(path: Option<&Path>) -> Result<(Self, ValidationResult)> {
        let config = match path {
            Some(path) => Self::load_from(path)?,
            None => Self::load()?,
        };
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if self.storage.restaurants_path.as_os_str().is_empty() {
            result.add_error("storage.restaurants_path", "Path must not be empty");
        }
        if self.storage.ratings_path.as_os_str().is_empty() {
            result.add_error("storage.ratings_path", "Path must not be empty");
        }
        if self.storage.restaurants_path == self.storage.ratings_path {
            result.add_error(
                "storage.ratings_path",
                "Ratings and restaurants cannot share a file",
            );
        }

        self.validate_url(&self.weather.base_url, "weather.base_url", &mut result);

        if !(-90.0..=90.0).contains(&self.weather.latitude) {
            result.add_error("weather.latitude", "Latitude must be within [-90, 90]");
        }
        if !(-180.0..=180.0).contains(&self.weather.longitude) {
            result.add_error("weather.longitude", "Longitude must be within [-180, 180]");
        }

        if self.weather.timeout_secs == 0 {
            result.add_error("weather.timeout_secs", "Timeout must be greater than 0");
        } else if self.weather.timeout_secs > 60 {
            result.add_warning(
                "weather.timeout_secs",
                "Timeout is more than a minute; the page will feel stuck",
            );
        }

        if self.weather.timezone.trim().is_empty() {
            result.add_warning("weather.timezone", "Empty timezone, the service will use GMT");
        }

        result
    }

    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Save configuration to the given file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("lunch");

        Ok(config_dir.join("config.toml"))
    }
}
