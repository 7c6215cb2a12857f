//! Canonicalizer configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Namespace used when the caller does not supply one.
pub const DEFAULT_BASE: &str = "http://tinyname.org#";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanonicalizerConfig {
    /// Namespace every generated IRI starts with. Used verbatim: include the
    /// trailing `#` or `/`.
    pub base: String,
}

impl Default for CanonicalizerConfig {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE.to_string(),
        }
    }
}

impl CanonicalizerConfig {
    pub fn with_base(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Parse a JSON object; missing fields take their defaults.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid canonicalizer config")
    }
}
