//! # Batch Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     PETRO_CUSTOMER_FILE=./data/clientes.txt                            │
//! │     PETRO_ORDERS_FILE / PETRO_CUSTOMERS_FILE / PETRO_LOG               │
//! │                                                                         │
//! │  2. TOML Config File (path in PETRO_CONFIG)                            │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     clientes.txt, built-in demo data, "info,petro=debug"               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [store]
//! customer_file = "clientes.txt"
//!
//! [input]
//! orders_file = "pedidos.json"
//! customers_file = "clientes.json"
//!
//! [logging]
//! filter = "info,petro=debug"
//! ```
//!
//! Nothing is required: with no file and no variables every default applies.

use std::path::{Path, PathBuf};

use petro_store::DEFAULT_CUSTOMER_FILE;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variable naming the TOML config file.
pub const CONFIG_PATH_VAR: &str = "PETRO_CONFIG";

// =============================================================================
// Sections
// =============================================================================

/// Customer store settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Append-only customer file.
    #[serde(default = "default_customer_file")]
    pub customer_file: PathBuf,
}

fn default_customer_file() -> PathBuf {
    PathBuf::from(DEFAULT_CUSTOMER_FILE)
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            customer_file: default_customer_file(),
        }
    }
}

/// Input data settings. Unset files fall back to the built-in demo data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSettings {
    /// JSON array of orders.
    #[serde(default)]
    pub orders_file: Option<PathBuf>,

    /// JSON array of customer registrations.
    #[serde(default)]
    pub customers_file: Option<PathBuf>,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "info,petro=debug".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: default_log_filter(),
        }
    }
}

// =============================================================================
// Batch Config
// =============================================================================

/// Complete batch runner configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub input: InputSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl BatchConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file named by `PETRO_CONFIG`, if it exists
    /// 3. Environment variables
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Same as [`BatchConfig::load`] with an explicit variable lookup.
    pub fn load_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        config.apply_env_overrides(&lookup);
        config.validate()?;
        Ok(config)
    }

    /// Reads a TOML config file, or returns defaults when it does not exist.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.customer_file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue(
                "store.customer_file must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    fn apply_env_overrides<F>(&mut self, lookup: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("PETRO_CUSTOMER_FILE") {
            debug!(path = %path, "Overriding customer file from environment");
            self.store.customer_file = PathBuf::from(path);
        }

        if let Some(path) = lookup("PETRO_ORDERS_FILE") {
            self.input.orders_file = Some(PathBuf::from(path));
        }

        if let Some(path) = lookup("PETRO_CUSTOMERS_FILE") {
            self.input.customers_file = Some(PathBuf::from(path));
        }

        if let Some(filter) = lookup("PETRO_LOG") {
            self.logging.filter = filter;
        }
    }
}

// =============================================================================
// Config Error
// =============================================================================

/// Configuration and input loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid input file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = BatchConfig::load_with(env(&[])).unwrap();
        assert_eq!(config.store.customer_file, PathBuf::from("clientes.txt"));
        assert_eq!(config.input, InputSettings::default());
        assert_eq!(config.logging.filter, "info,petro=debug");
    }

    #[test]
    fn test_env_overrides() {
        let config = BatchConfig::load_with(env(&[
            ("PETRO_CUSTOMER_FILE", "/tmp/c.txt"),
            ("PETRO_ORDERS_FILE", "pedidos.json"),
            ("PETRO_LOG", "warn"),
        ]))
        .unwrap();
        assert_eq!(config.store.customer_file, PathBuf::from("/tmp/c.txt"));
        assert_eq!(config.input.orders_file, Some(PathBuf::from("pedidos.json")));
        assert_eq!(config.input.customers_file, None);
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn test_file_then_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("petro.toml");
        std::fs::write(
            &path,
            "[store]\ncustomer_file = \"from_file.txt\"\n\n[input]\ncustomers_file = \"c.json\"\n",
        )
        .unwrap();

        let path_str = path.to_string_lossy().to_string();
        let config = BatchConfig::load_with(env(&[(CONFIG_PATH_VAR, path_str.as_str())])).unwrap();
        assert_eq!(config.store.customer_file, PathBuf::from("from_file.txt"));
        assert_eq!(config.input.customers_file, Some(PathBuf::from("c.json")));
        assert_eq!(config.logging.filter, "info,petro=debug");

        let config = BatchConfig::load_with(env(&[
            (CONFIG_PATH_VAR, path_str.as_str()),
            ("PETRO_CUSTOMER_FILE", "from_env.txt"),
        ]))
        .unwrap();
        assert_eq!(config.store.customer_file, PathBuf::from("from_env.txt"));
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let config =
            BatchConfig::load_with(env(&[(CONFIG_PATH_VAR, "/definitely/not/here.toml")])).unwrap();
        assert_eq!(config, BatchConfig::default());
    }

    #[test]
    fn test_malformed_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("petro.toml");
        std::fs::write(&path, "[store\ncustomer_file = ").unwrap();

        let err = BatchConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_empty_customer_file_rejected() {
        let err = BatchConfig::load_with(env(&[("PETRO_CUSTOMER_FILE", "")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }
}
