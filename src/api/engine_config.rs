use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ClockError, ClockResult};
use crate::extensions::ClockLabelsConfig;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format. The era/event datasets
/// are immutable in-crate constants and deliberately not part of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    #[serde(default = "default_install_clock_labels")]
    pub install_clock_labels: bool,
    #[serde(default = "default_clock_labels")]
    pub clock_labels: ClockLabelsConfig,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            install_clock_labels: default_install_clock_labels(),
            clock_labels: default_clock_labels(),
        }
    }

    /// Controls whether the built-in clock-labels overlay is installed.
    #[must_use]
    pub fn with_clock_labels(mut self, install: bool) -> Self {
        self.install_clock_labels = install;
        self
    }

    /// Overrides the clock-labels overlay tuning.
    #[must_use]
    pub fn with_clock_labels_config(mut self, config: ClockLabelsConfig) -> Self {
        self.clock_labels = config;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ClockResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ClockError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ClockResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ClockError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

fn default_install_clock_labels() -> bool {
    true
}

fn default_clock_labels() -> ClockLabelsConfig {
    ClockLabelsConfig::default()
}
