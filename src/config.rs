//! Configuration management for the kiosk server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Backend selection for the visitor document store
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Remote document store over HTTP
    Http,
    /// In-process store, for development and tests
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub base_url: String,
    /// Collection holding visitor documents
    pub collection: String,
    pub timeout_secs: u64,
}

/// Tenant scope supplied by the external identity provider.
///
/// The school id is optional here so a misconfigured deployment degrades to
/// the explicit missing-scope error on each write instead of failing to boot.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct TenantConfig {
    pub school_id: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub tenant: TenantConfig,
    pub logging: LoggingConfig,
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
            // Add environment variables (with prefix KIOSK_)
            .add_source(
                Environment::with_prefix("KIOSK")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override store URL from STORE_BASE_URL env var if present
            .set_override_option("store.base_url", env::var("STORE_BASE_URL").ok())?
            // Override tenant scope from SCHOOL_ID env var if present
            .set_override_option("tenant.school_id", env::var("SCHOOL_ID").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Http,
            base_url: "http://localhost:8890".to_string(),
            collection: "visitors".to_string(),
            timeout_secs: 10,
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
