//! Pager configuration
//!
//! Page-size defaults and limits, loaded from YAML with optional
//! environment overrides.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding [`PagerConfig::default_limit`]
pub const ENV_DEFAULT_LIMIT: &str = "TODO_PAGER_DEFAULT_LIMIT";

/// Environment variable overriding [`PagerConfig::max_limit`]
pub const ENV_MAX_LIMIT: &str = "TODO_PAGER_MAX_LIMIT";

/// Page-size configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagerConfig {
    /// Page size used when the request has no `limit`
    #[serde(default = "default_limit", alias = "default_limit")]
    pub default_limit: usize,

    /// Largest page size a request may ask for
    #[serde(default = "default_max_limit", alias = "max_limit")]
    pub max_limit: usize,
}

fn default_limit() -> usize {
    2
}

fn default_max_limit() -> usize {
    100
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

impl PagerConfig {
    /// Create a config with explicit limits
    pub fn new(default_limit: usize, max_limit: usize) -> Self {
        Self {
            default_limit,
            max_limit,
        }
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Apply `TODO_PAGER_*` environment overrides and re-validate
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable source
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(value) = lookup(ENV_DEFAULT_LIMIT) {
            self.default_limit = parse_limit(ENV_DEFAULT_LIMIT, &value)?;
        }
        if let Some(value) = lookup(ENV_MAX_LIMIT) {
            self.max_limit = parse_limit(ENV_MAX_LIMIT, &value)?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Check that `1 <= default_limit <= max_limit`
    pub fn validate(&self) -> Result<()> {
        if self.max_limit == 0 {
            return Err(Error::invalid_config("max_limit", "must be at least 1"));
        }
        if self.default_limit == 0 {
            return Err(Error::invalid_config("default_limit", "must be at least 1"));
        }
        if self.default_limit > self.max_limit {
            return Err(Error::invalid_config(
                "default_limit",
                format!(
                    "{} exceeds max_limit {}",
                    self.default_limit, self.max_limit
                ),
            ));
        }
        Ok(())
    }

    /// Resolve a requested page size into `[1, max_limit]`
    pub fn clamp_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_limit)
            .clamp(1, self.max_limit.max(1))
    }
}

fn parse_limit(field: &str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse()
        .map_err(|e| Error::invalid_config(field, format!("'{value}' is not a page size: {e}")))
}
