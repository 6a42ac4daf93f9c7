//! Environment-driven configuration for the command-line tool.
//!
//! # Environment variables
//! - `UNIQUE_ID_NAMESPACE` = namespace used when `--namespace` is omitted (optional)
//! - `UNIQUE_ID_LOG`       = log filter used when `RUST_LOG` is unset (default `warn`)
//!
//! Values may come from a `.env` file; empty or whitespace-only values count as unset.

use thiserror::Error;

pub const NAMESPACE_VAR: &str = "UNIQUE_ID_NAMESPACE";
pub const LOG_VAR: &str = "UNIQUE_ID_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Required setting is absent from both the command line and the environment.
    #[error("[Unique ID Tool] missing required setting: {0}")]
    MissingVar(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    /// Fallback namespace for `generate`.
    pub default_namespace: Option<String>,
    /// Fallback `EnvFilter` directive string.
    pub log_filter: String,
}

impl ToolConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Self {
            default_namespace: non_empty(NAMESPACE_VAR),
            log_filter: non_empty(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned()),
        }
    }

    /// Picks the namespace: command line first, then `UNIQUE_ID_NAMESPACE`.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingVar`] if neither is set.
    pub fn namespace<'a>(&'a self, from_cli: Option<&'a str>) -> Result<&'a str, ConfigError> {
        from_cli
            .or(self.default_namespace.as_deref())
            .ok_or(ConfigError::MissingVar("--namespace or UNIQUE_ID_NAMESPACE"))
    }
}
