//! Configuration for the Dropstab SDK
//!
//! Values are layered with figment: built-in defaults, then a TOML file, then
//! `DROPSTAB_`-prefixed environment variables.
//!
//! List values in the environment use figment's array syntax, so
//! `DROPSTAB_LOG_LEVELS="[info, debug]"` enables two levels while the bare
//! `DROPSTAB_LOG_LEVELS=info,debug` is rejected.

use crate::client::DEFAULT_TIMEOUT_SECS;
use crate::endpoints::DEFAULT_API_URL;
use crate::error::{ApiError, Result};
use crate::logging::{LogLevel, LogLevels};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "dropstab.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "DROPSTAB_";

/// SDK configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropstabConfig {
    /// Base URL for the Dropstab API
    pub base_url: String,

    /// Severities the SDK emits
    pub log_levels: Vec<LogLevel>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for DropstabConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            log_levels: vec![LogLevel::Info, LogLevel::Error],
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl DropstabConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; without one, `dropstab.toml` is merged
    /// only if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ApiError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                figment = figment.merge(Toml::file(path));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    figment = figment.merge(Toml::file(default_path));
                }
            }
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX));

        let config: Self = figment
            .extract()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from environment (and `dropstab.toml` if present)
    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }

    pub fn validate(&self) -> Result<()> {
        normalize_base_url(&self.base_url)?;
        if self.timeout_secs == 0 {
            return Err(ApiError::Config("timeout_secs must be greater than 0".into()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn levels(&self) -> LogLevels {
        self.log_levels.iter().collect()
    }
}

/// Validate a base URL and strip trailing slashes
pub(crate) fn normalize_base_url(base_url: &str) -> Result<String> {
    let parsed = url::Url::parse(base_url)
        .map_err(|e| ApiError::Config(format!("Invalid base URL '{base_url}': {e}")))?;

    match parsed.scheme() {
        "http" | "https" => Ok(base_url.trim_end_matches('/').to_string()),
        scheme => Err(ApiError::Config(format!(
            "Unsupported base URL scheme '{scheme}' in '{base_url}'"
        ))),
    }
}
