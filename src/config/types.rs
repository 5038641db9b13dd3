// Configuration types module
// Defines the deserialized shape of the handler configuration

use serde::{Deserialize, Serialize};

use crate::envelope::Headers;

/// Main configuration structure
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    /// Headers sent with every response
    #[serde(default)]
    pub default_headers: Headers,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Lowest level written: "info", "warn" or "error"
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Info log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            access_log_file: None,
            error_log_file: None,
        }
    }
}
