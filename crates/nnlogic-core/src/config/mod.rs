//! Configuration for nnlogic.
//! TOML-based; every key is optional and falls back to `defaults`.

pub mod defaults;
pub mod observability_config;
pub mod policy;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use observability_config::ObservabilityConfig;
pub use policy::Policy;

/// Top-level configuration aggregating the policy and observability settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NnLogicConfig {
    pub policy: Policy,
    pub observability: ObservabilityConfig,
}

impl NnLogicConfig {
    /// Load configuration from a TOML string and validate it.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: NnLogicConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            source_name: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.policy.validate()?;
        match self.observability.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("unknown level {other:?}"),
            }),
        }
    }
}
