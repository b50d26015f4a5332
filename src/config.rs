//! Terminal configuration loaded from `opstation.toml`.
//!
//! [`TerminalConfig`] holds every tunable parameter. Values missing from the
//! file fall back to defaults. The `OPSTATION_OPERATORS` environment
//! variable takes precedence over the file for the operators path.

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

/// Top-level configuration loaded from `opstation.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct TerminalConfig {
    /// Quiet period for slider debouncing, in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Path to the operator seed file (JSON array of operators).
    #[serde(default = "default_operators_file")]
    pub operators_file: String,

    /// Settings tab opened when none is requested.
    #[serde(default = "default_settings_tab")]
    pub default_settings_tab: String,
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_operators_file() -> String {
    "operators.json".to_string()
}

fn default_settings_tab() -> String {
    "general".to_string()
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            operators_file: default_operators_file(),
            default_settings_tab: default_settings_tab(),
        }
    }
}

impl TerminalConfig {
    /// Load the configuration from `opstation.toml` in the current directory.
    /// Uses defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        let path = Path::new("opstation.toml");
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<TerminalConfig>(&contents)?
        } else {
            Self::default()
        };

        // Environment variable takes precedence over the config file.
        if let Ok(path) = std::env::var("OPSTATION_OPERATORS")
            && !path.is_empty()
        {
            config.operators_file = path;
        }

        Ok(config)
    }
}
