use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Environment variable holding a JSON [`HandlerConfig`] document.
pub const CONFIG_VAR: &str = "ERRXPECT_CONFIG";

/// Environment variable overriding [`HandlerConfig::show_location`].
pub const SHOW_LOCATION_VAR: &str = "ERRXPECT_SHOW_LOCATION";

/// Environment variable overriding [`HandlerConfig::log_failures`].
pub const LOG_FAILURES_VAR: &str = "ERRXPECT_LOG_FAILURES";

/// Settings for [`PanicHandler`](crate::PanicHandler).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlerConfig {
    /// Append the blamed source location to the panic message.
    pub show_location: bool,
    /// Emit a `tracing` error event before panicking.
    pub log_failures: bool,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            show_location: true,
            log_failures: true,
        }
    }
}

impl HandlerConfig {
    /// Reads `ERRXPECT_CONFIG`, then applies `ERRXPECT_SHOW_LOCATION` and
    /// `ERRXPECT_LOG_FAILURES` on top.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) with variables resolved by
    /// `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = match lookup(CONFIG_VAR) {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json)?,
            _ => Self::default(),
        };
        base.with_overrides(lookup)
    }

    /// Parses a JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Applies overrides looked up by variable name.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(SHOW_LOCATION_VAR) {
            self.show_location = parse_flag(SHOW_LOCATION_VAR, value)?;
        }
        if let Some(value) = lookup(LOG_FAILURES_VAR) {
            self.log_failures = parse_flag(LOG_FAILURES_VAR, value)?;
        }
        Ok(self)
    }
}

fn parse_flag(var: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { var, value }),
    }
}
