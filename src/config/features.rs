//! Feature flags configuration

use serde::Deserialize;

/// Runtime switches for error detail and logging output.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Include storage error details in 500 responses
    #[serde(default)]
    pub verbose_errors: bool,

    /// Attach the HTTP trace layer
    #[serde(default = "default_enable_tracing")]
    pub enable_tracing: bool,

    /// Emit logs as JSON lines
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            verbose_errors: false,
            enable_tracing: default_enable_tracing(),
            json_logs: false,
        }
    }
}

fn default_enable_tracing() -> bool {
    true
}
