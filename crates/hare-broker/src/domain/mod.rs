//! Broker domain: configuration, the instance-id gate, and the registry
//! with its pending buffer.

pub mod config;
pub mod errors;
pub mod gate;
pub mod registry;

pub use config::{BrokerConfig, DEFAULT_QUEUE_CAPACITY, HARE_PROTOCOL};
pub use errors::BrokerError;
pub use gate::{classify, InstanceClass};
pub use registry::{ParkOutcome, Registry};
