//! # Hare Broker - Gossip Ingress & Instance Dispatch Subsystem
//!
//! Single entry point for every gossip message addressed to a running hare
//! consensus instance: authenticates, routes, buffers and back-pressures
//! them.
//!
//! ## Architecture Role
//!
//! ```text
//! [Gossip Transport] ──ingress──→ [Broker] ──per-instance fanout──→ [Instance N]
//!                                    │  ↑
//!                                    ↓  │ verdict
//!                          [Semantic Validator]
//! ```
//!
//! ## Behavior
//!
//! - One dispatcher task per broker drains the ingress stream; each message
//!   runs decode → shape check → instance-id gate → semantic validation →
//!   verdict report → routing.
//! - Messages one round ahead of the registration watermark are parked and
//!   handed over, in arrival order, when their instance registers; anything
//!   further ahead is rejected so the pending buffer stays bounded.
//! - Delivery queues are bounded; a full queue blocks the dispatcher, which
//!   is how a slow instance throttles ingress.
//! - Every ingress message reports exactly one verdict to the transport,
//!   which gates further propagation to other peers.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use hare_broker::{BrokerConfig, HareBroker, InstanceGateway};
//! use shared_types::InstanceId;
//!
//! let broker = HareBroker::new(network, validator, BrokerConfig::default())?;
//! broker.start()?;
//!
//! let mut queue = broker.register(InstanceId(1)).await;
//! while let Some(message) = queue.recv().await {
//!     // feed the consensus instance
//! }
//! ```

pub mod adapters;
pub mod domain;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-export main types
pub use adapters::{AcceptAll, InMemoryGossip, KeyedSignatureValidator, RejectAll};
pub use domain::{
    BrokerConfig, BrokerError, InstanceClass, Registry, DEFAULT_QUEUE_CAPACITY, HARE_PROTOCOL,
};
pub use ports::{GossipEnvelope, GossipNetwork, InstanceGateway, MessageValidator, ValidationReport};
pub use service::HareBroker;
