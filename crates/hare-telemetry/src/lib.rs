//! # Hare Telemetry
//!
//! Observability bootstrap for the hare subsystem.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hare_telemetry::{init_telemetry, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! let _guard = init_telemetry(&config).expect("failed to init telemetry");
//!
//! // Application code; logs flow through the configured subscriber.
//! ```

mod config;
mod logging;

pub use config::{TelemetryConfig, LOG_FILTER_ENV};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured log filter directives do not parse.
    #[error("invalid log filter: {0}")]
    InvalidFilter(String),

    /// A global subscriber is already installed.
    #[error("failed to install log subscriber: {0}")]
    SubscriberInit(String),
}

/// Guard that keeps telemetry active. Hold for the lifetime of the process.
pub struct TelemetryGuard {
    service_name: String,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::debug!(service = %self.service_name, "telemetry shutting down");
    }
}

/// Initialize logging and return the guard keeping it alive.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    logging::init_logging(config)?;
    tracing::info!(service = %config.service_name, "telemetry initialized");
    Ok(TelemetryGuard {
        service_name: config.service_name.clone(),
    })
}
