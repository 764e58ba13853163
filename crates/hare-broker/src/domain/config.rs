//! Broker configuration.

use crate::domain::errors::BrokerError;

/// Gossip protocol name the broker subscribes under.
pub const HARE_PROTOCOL: &str = "HARE_PROTOCOL";

/// Per-instance delivery queue capacity.
///
/// Bounds memory per registered instance and is the backpressure point: a
/// consumer that falls this far behind stalls ingress for everyone.
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;

/// Broker runtime parameters.
#[derive(Debug, Clone)]
pub struct BrokerConfig {
    /// Protocol name used for the gossip subscription and verdict reports.
    pub protocol: String,
    /// Capacity of each instance's delivery queue.
    pub queue_capacity: usize,
}

impl BrokerConfig {
    /// Check the configuration before the broker is constructed from it.
    pub fn validate(&self) -> Result<(), BrokerError> {
        if self.protocol.is_empty() {
            return Err(BrokerError::InvalidConfig(
                "protocol name must not be empty".into(),
            ));
        }
        if self.queue_capacity == 0 {
            return Err(BrokerError::InvalidConfig(
                "queue capacity must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            protocol: HARE_PROTOCOL.to_string(),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = BrokerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.queue_capacity, 100);
        assert_eq!(config.protocol, HARE_PROTOCOL);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = BrokerConfig {
            queue_capacity: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(BrokerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_empty_protocol_rejected() {
        let config = BrokerConfig {
            protocol: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(BrokerError::InvalidConfig(_))
        ));
    }
}
