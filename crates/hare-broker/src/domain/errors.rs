//! Broker error types.
//!
//! Only lifecycle failures surface to callers. Per-message failures are
//! absorbed by the dispatcher: each one produces a negative verdict to the
//! gossip layer and a log line, and processing continues.

use thiserror::Error;

/// Broker lifecycle errors.
#[derive(Debug, Error)]
pub enum BrokerError {
    /// `start` was called on a broker that is already running.
    #[error("broker already started")]
    AlreadyStarted,

    /// The supplied configuration cannot run.
    #[error("invalid broker configuration: {0}")]
    InvalidConfig(String),
}
