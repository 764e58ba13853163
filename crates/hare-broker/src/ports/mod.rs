//! Ports for the broker subsystem: the consumer-facing API and the
//! capabilities the broker itself consumes.

pub mod inbound;
pub mod outbound;

pub use inbound::InstanceGateway;
pub use outbound::{GossipEnvelope, GossipNetwork, MessageValidator, ValidationReport};
