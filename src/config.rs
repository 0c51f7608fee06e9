use crate::error::{Result, VastPluginError};
use serde::{Deserialize, Serialize};

/// Default number of seconds before the skip button becomes enabled
pub const DEFAULT_SKIP_SECONDS: i32 = 5;

/// Plugin activation options, handed over by the host framework
///
/// Hosts typically configure plugins with a JSON-shaped options object;
/// [`PluginOptions::from_json`] accepts one directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginOptions {
    /// VAST ad tag URL. Required — activation without it emits `adtimeout`
    /// and aborts.
    #[serde(default)]
    pub url: Option<String>,

    /// Seconds before the skip button becomes enabled. Negative disables
    /// skipping. The countdown threshold itself is driven by the tracker's
    /// `skip-countdown` payload; this option records the configured offset.
    #[serde(default = "default_skip")]
    pub skip: i32,
}

fn default_skip() -> i32 {
    DEFAULT_SKIP_SECONDS
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            url: None,
            skip: DEFAULT_SKIP_SECONDS,
        }
    }
}

impl PluginOptions {
    /// Options with an ad tag URL and default skip offset
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Parse options from a host-provided JSON object
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| VastPluginError::InvalidOptions(e.to_string()))
    }

    /// Whether skipping is disabled by configuration
    pub fn skip_disabled(&self) -> bool {
        self.skip < 0
    }
}
