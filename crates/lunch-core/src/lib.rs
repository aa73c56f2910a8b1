pub mod app;
pub mod config;
pub mod error;

pub use app::App;
pub use config::{Config, LoadFailurePolicy, StorageConfig, ValidationResult, WeatherConfig};
pub use error::{
    AppError, ConfigError, NetworkError, ReqwestErrorExt, StorageError, WeatherError,
};

use anyhow::Result;

/// Initialize logging.
///
/// Events go to stderr so command output on stdout stays clean. `RUST_LOG`
/// overrides the default `warn` filter.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    tracing::debug!("Lunch core initialized");
    Ok(())
}
