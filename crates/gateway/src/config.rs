//! Gateway configuration.
//!
//! ```toml
//! # checkpost.toml
//! fail_fast = false
//! ```
//!
//! The same switch can come from the environment as `CHECKPOST_FAIL_FAST`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GatewayError, GatewayResult, ValidationMode};

/// Settings a [`ValidationGateway`](crate::ValidationGateway) is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GatewayConfig {
    /// Stop at the first violation instead of collecting all of them.
    pub fail_fast: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self { fail_fast: true }
    }
}

impl GatewayConfig {
    /// Environment variable read by [`from_env`](Self::from_env).
    pub const ENV_FAIL_FAST: &'static str = "CHECKPOST_FAIL_FAST";

    /// Parses TOML text.
    pub fn from_toml_str(source: &str) -> GatewayResult<Self> {
        let config: Self = toml::from_str(source)
            .map_err(|error| GatewayError::configuration(format!("invalid TOML: {error}")))?;
        debug!(fail_fast = config.fail_fast, "loaded gateway config");
        Ok(config)
    }

    /// Reads and parses a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> GatewayResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|error| {
            GatewayError::configuration(format!("cannot read {}: {error}", path.display()))
        })?;
        Self::from_toml_str(&source)
    }

    /// Reads [`ENV_FAIL_FAST`](Self::ENV_FAIL_FAST); unset means default.
    pub fn from_env() -> GatewayResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> GatewayResult<Self> {
        let Some(raw) = lookup(Self::ENV_FAIL_FAST) else {
            return Ok(Self::default());
        };

        let fail_fast = parse_flag(&raw).ok_or_else(|| {
            GatewayError::configuration(format!(
                "{} must be a boolean, got `{raw}`",
                Self::ENV_FAIL_FAST
            ))
        })?;
        debug!(fail_fast, "loaded gateway config from environment");
        Ok(Self { fail_fast })
    }

    /// The mode this configuration selects.
    #[must_use]
    pub const fn mode(&self) -> ValidationMode {
        ValidationMode::from_fail_fast(self.fail_fast)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
