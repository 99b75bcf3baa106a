//! Configuration types and loading
//!
//! The gateway only needs to know which chaincode to address. Everything
//! about peers, orderers and identities belongs to the ledger client.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default chaincode id
pub const DEFAULT_CHAINCODE_ID: &str = "bcins";
/// Default chaincode version
pub const DEFAULT_CHAINCODE_VERSION: &str = "1.0";

/// Prefix for environment overrides in `GatewayConfig::load`
/// (`INS_CHAINCODE__ID`, `INS_CHAINCODE__VERSION`)
pub const ENV_PREFIX: &str = "INS";

/// Main gateway configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GatewayConfig {
    /// Chaincode settings
    #[serde(default)]
    pub chaincode: ChaincodeConfig,
}

/// Chaincode every call is addressed to
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChaincodeConfig {
    /// Chaincode name as installed on the channel
    pub id: String,
    /// Installed chaincode version
    pub version: String,
}

impl Default for ChaincodeConfig {
    fn default() -> Self {
        Self {
            id: DEFAULT_CHAINCODE_ID.to_string(),
            version: DEFAULT_CHAINCODE_VERSION.to_string(),
        }
    }
}

impl ChaincodeConfig {
    /// Address a specific chaincode id and version
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
        }
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A setting is present but unusable
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
    /// The config source could not be read or deserialized
    #[error("Config file error: {0}")]
    FileError(String),
}

impl From<::config::ConfigError> for ConfigError {
    fn from(err: ::config::ConfigError) -> Self {
        ConfigError::FileError(err.to_string())
    }
}

impl GatewayConfig {
    /// Load configuration from `CHAINCODE_ID` / `CHAINCODE_VERSION`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(id) = lookup("CHAINCODE_ID") {
            config.chaincode.id = id;
        }
        if let Some(version) = lookup("CHAINCODE_VERSION") {
            config.chaincode.version = version;
        }

        config.validate()?;
        Ok(config)
    }

    /// Layer defaults, an optional config file (toml, json or yaml, by
    /// extension) and `INS_`-prefixed environment variables, in that order.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ::config::Config::builder()
            .set_default("chaincode.id", DEFAULT_CHAINCODE_ID)?
            .set_default("chaincode.version", DEFAULT_CHAINCODE_VERSION)?;

        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path).required(true));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        );

        let config: GatewayConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        tracing::debug!(
            chaincode_id = %config.chaincode.id,
            chaincode_version = %config.chaincode.version,
            "loaded gateway configuration"
        );
        Ok(config)
    }

    /// Reject empty chaincode id or version
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chaincode.id.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "chaincode.id".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.chaincode.version.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "chaincode.version".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
