//! # Broker Metrics
//!
//! Prometheus metrics for monitoring the ingress pipeline.
//!
//! ## Usage
//!
//! Enable with the `metrics` feature:
//! ```toml
//! hare-broker = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `hare_broker_messages_dispatched_total` - Counter of accepted messages
//! - `hare_broker_messages_rejected_total` - Counter of rejections (by reason)
//! - `hare_broker_messages_parked_total` - Counter of messages parked for a
//!   not-yet-registered instance
//! - `hare_broker_validation_latency_seconds` - Histogram of semantic
//!   validation times

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{
    register_counter_vec, register_histogram, register_int_counter, CounterVec, Histogram,
    IntCounter,
};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Messages that passed the full pipeline and were reported valid
    pub static ref MESSAGES_DISPATCHED: IntCounter = register_int_counter!(
        "hare_broker_messages_dispatched_total",
        "Total number of gossip messages accepted by the broker"
    )
    .expect("Failed to create MESSAGES_DISPATCHED metric");

    /// Messages rejected before routing, labeled by rejection reason
    pub static ref MESSAGES_REJECTED: CounterVec = register_counter_vec!(
        "hare_broker_messages_rejected_total",
        "Total number of gossip messages rejected by the broker",
        &["reason"]
    )
    .expect("Failed to create MESSAGES_REJECTED metric");

    /// Messages parked for an instance that has not registered yet
    pub static ref MESSAGES_PARKED: IntCounter = register_int_counter!(
        "hare_broker_messages_parked_total",
        "Total number of messages parked for a near-future instance"
    )
    .expect("Failed to create MESSAGES_PARKED metric");

    /// Histogram of semantic validation latency
    pub static ref VALIDATION_LATENCY: Histogram = register_histogram!(
        "hare_broker_validation_latency_seconds",
        "Time spent in the semantic validator per message in seconds",
        vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]
    )
    .expect("Failed to create VALIDATION_LATENCY metric");
}

/// Record an accepted message
#[cfg(feature = "metrics")]
pub fn record_message_dispatched() {
    MESSAGES_DISPATCHED.inc();
}

/// Record a rejected message with reason
#[cfg(feature = "metrics")]
pub fn record_message_rejected(reason: &str) {
    MESSAGES_REJECTED.with_label_values(&[reason]).inc();
}

/// Record a parked message
#[cfg(feature = "metrics")]
pub fn record_message_parked() {
    MESSAGES_PARKED.inc();
}

/// Record semantic validation latency
#[cfg(feature = "metrics")]
pub fn record_validation_latency(seconds: f64) {
    VALIDATION_LATENCY.observe(seconds);
}

// No-op implementations when metrics feature is disabled

#[cfg(not(feature = "metrics"))]
pub fn record_message_dispatched() {}

#[cfg(not(feature = "metrics"))]
pub fn record_message_rejected(_reason: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_message_parked() {}

#[cfg(not(feature = "metrics"))]
pub fn record_validation_latency(_seconds: f64) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_noop_when_disabled() {
        // These should compile and run without panic even without metrics feature
        record_message_dispatched();
        record_message_rejected("malformed");
        record_message_parked();
        record_validation_latency(0.001);
    }
}
