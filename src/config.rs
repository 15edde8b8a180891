//! Configuration management for the bookshop server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::{env, time::Duration};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON file holding the ISBN -> book mapping; the built-in catalog is used when unset
    pub books_file: Option<String>,
    /// Artificial delay applied by the `/async` endpoints
    pub async_delay_ms: u64,
}

impl CatalogConfig {
    pub fn async_delay(&self) -> Duration {
        Duration::from_millis(self.async_delay_ms)
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Environment variables, e.g. BOOKSHOP_CATALOG__ASYNC_DELAY_MS
            .add_source(
                Environment::with_prefix("BOOKSHOP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            // Override the books file from BOOKS_FILE env var if present
            .set_override_option("catalog.books_file", env::var("BOOKS_FILE").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            books_file: None,
            async_delay_ms: 100,
        }
    }
}
