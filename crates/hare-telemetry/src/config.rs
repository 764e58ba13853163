//! Telemetry configuration.

use std::env;

/// Environment variable holding the log filter directives.
pub const LOG_FILTER_ENV: &str = "HARE_LOG";

/// Telemetry bootstrap parameters.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name attached to every log line.
    pub service_name: String,
    /// `tracing_subscriber::EnvFilter` directives, e.g. `info,hare_broker=debug`.
    pub log_filter: String,
    /// Emit JSON log lines instead of human-readable ones.
    pub json_logs: bool,
}

impl TelemetryConfig {
    /// Build a configuration from the environment.
    ///
    /// | Variable | Default | Description |
    /// |----------|---------|-------------|
    /// | `HARE_SERVICE_NAME` | `hare-node` | Service name in log lines |
    /// | `HARE_LOG` | `info` | Log filter directives |
    /// | `HARE_JSON_LOGS` | unset | Any value enables JSON output |
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            service_name: env::var("HARE_SERVICE_NAME").unwrap_or(defaults.service_name),
            log_filter: env::var(LOG_FILTER_ENV).unwrap_or(defaults.log_filter),
            json_logs: env::var("HARE_JSON_LOGS").is_ok(),
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "hare-node".to_string(),
            log_filter: "info".to_string(),
            json_logs: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TelemetryConfig::default();
        assert_eq!(config.service_name, "hare-node");
        assert_eq!(config.log_filter, "info");
        assert!(!config.json_logs);
    }
}
