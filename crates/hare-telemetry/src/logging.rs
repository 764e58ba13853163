//! Structured logging setup.
//!
//! Configures a `tracing-subscriber` pipeline: env-filtered, either
//! human-readable or JSON formatted. JSON lines carry consistent fields
//! (`timestamp`, `level`, `target`, `message` plus structured context) so a
//! log shipper can forward them unparsed.

use crate::{TelemetryConfig, TelemetryError};
use tracing_subscriber::EnvFilter;

/// Install the global log subscriber.
///
/// Fails if the filter directives do not parse or a subscriber is already
/// installed for this process.
pub fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .map_err(|e| TelemetryError::InvalidFilter(e.to_string()))?;

    if config.json_logs {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init()
            .map_err(|e| TelemetryError::SubscriberInit(e.to_string()))?;
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
            .map_err(|e| TelemetryError::SubscriberInit(e.to_string()))?;
    }

    Ok(())
}
