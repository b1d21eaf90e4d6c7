//! Configuration type definitions.

use crate::constants::DEFAULT_THRESHOLD_SECS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default settings.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Default run settings, overridable from the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Gap threshold between observations in the same event, in seconds.
    pub threshold_secs: f64,

    /// Default input observations file.
    pub input: Option<PathBuf>,

    /// Default output destination.
    pub output: Option<PathBuf>,

    /// Prefix CSV output with a UTF-8 BOM for Excel compatibility.
    pub csv_bom: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            threshold_secs: DEFAULT_THRESHOLD_SECS,
            input: None,
            output: None,
            csv_bom: true,
        }
    }
}
