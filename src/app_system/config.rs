//! # Application Configuration
//!
//! ## Load Order (later overrides earlier)
//! 1. Default values
//! 2. TOML config file (`--config path`)
//! 3. Environment variables
//!    - `QR_INVENTORY_LOG` - log filter used when `RUST_LOG` is unset
//!    - `QR_INVENTORY_BUFFER_SIZE` - actor mailbox size
//!    - `QR_INVENTORY_ADMIN_USER` / `QR_INVENTORY_ADMIN_PASSWORD`
//!
//! ## Configuration File Format
//! ```toml
//! [actor]
//! buffer_size = 64
//!
//! [logging]
//! filter = "qr_inventory=debug,info"
//!
//! [admin]
//! username = "admin"
//! password = "change-me"
//!
//! [[products]]
//! name = "Widget"
//! location = "Aisle 4"
//! quantity = 3
//! price = 12.5
//! checkInDate = "2024-01-10"
//! checkOutDate = "2024-02-10"
//! scanLimit = 2
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::ProductCreate;

pub const ENV_LOG: &str = "QR_INVENTORY_LOG";
pub const ENV_BUFFER_SIZE: &str = "QR_INVENTORY_BUFFER_SIZE";
pub const ENV_ADMIN_USER: &str = "QR_INVENTORY_ADMIN_USER";
pub const ENV_ADMIN_PASSWORD: &str = "QR_INVENTORY_ADMIN_PASSWORD";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub actor: ActorConfig,
    pub logging: LoggingConfig,
    pub admin: AdminConfig,
    /// Products added at startup.
    pub products: Vec<ProductCreate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorConfig {
    pub buffer_size: usize,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self { buffer_size: 32 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: "info".to_string() }
    }
}

/// Administrator credentials. With none configured every login is rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl AppConfig {
    /// Loads defaults, then the file at `path` (if any), then environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::from_toml(&contents)?
            }
            None => {
                debug!("No config file given, using defaults");
                Self::default()
            }
        };

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.actor.buffer_size == 0 {
            return Err(ConfigError::InvalidValue(
                "actor.buffer_size must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from any key/value source.
    ///
    /// # Errors
    /// Fails on a value that doesn't parse, leaving earlier overrides applied.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(filter) = lookup(ENV_LOG) {
            debug!(%filter, "Overriding log filter from environment");
            self.logging.filter = filter;
        }

        if let Some(size) = lookup(ENV_BUFFER_SIZE) {
            self.actor.buffer_size = size.parse().map_err(|_| {
                ConfigError::InvalidValue(format!(
                    "{} must be a positive integer, got {:?}",
                    ENV_BUFFER_SIZE, size
                ))
            })?;
        }

        if let Some(username) = lookup(ENV_ADMIN_USER) {
            self.admin.username = Some(username);
        }

        if let Some(password) = lookup(ENV_ADMIN_PASSWORD) {
            self.admin.password = Some(password);
        }

        Ok(())
    }
}
