// File: src/config.rs
// Purpose: Configuration parsing from intake.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::payload::DEFAULT_ID_PREFIX;

/// Intake engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IntakeConfig {
    #[serde(default)]
    pub submit: SubmitConfig,
}

/// Submit lifecycle configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitConfig {
    /// Delay before a successful submit resets the form (milliseconds)
    #[serde(default = "default_reset_delay_ms")]
    pub reset_delay_ms: u64,

    /// Prefix stamped onto generated request ids
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,
}

impl SubmitConfig {
    /// Reset delay as a Duration
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}

// Default values
fn default_reset_delay_ms() -> u64 {
    3000
}

fn default_id_prefix() -> String {
    DEFAULT_ID_PREFIX.to_string()
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            reset_delay_ms: default_reset_delay_ms(),
            id_prefix: default_id_prefix(),
        }
    }
}

impl IntakeConfig {
    /// Load configuration from a toml file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing or empty file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: IntakeConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from the default path (./intake.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("intake.toml")
    }
}
