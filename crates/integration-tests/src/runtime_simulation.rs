//! # Runtime Simulation Tests
//!
//! End-to-end tests that run the ingress pipeline the way a node would:
//! a producer signs and publishes hare messages onto an in-memory gossip
//! network, the broker authenticates and routes them, and consensus
//! instances consume their delivery queues. The gossip side's verdict
//! feedback is captured so every test can account for each envelope.
//!
//! ## Test Categories
//!
//! 1. **Full Flow**: producer → gossip → broker → instance
//! 2. **Ordering**: parked messages drain ahead of live traffic, per-instance
//!    ingress order is preserved
//! 3. **Backpressure**: a full delivery queue stalls ingress without drops
//! 4. **Flood Defense**: far-future instances are refused, the pending
//!    buffer never spans more than one round
//! 5. **Shutdown**: verdicts and deliveries stop once the broker closes

use std::sync::Arc;

use hare_broker::{
    BrokerConfig, HareBroker, InMemoryGossip, InstanceGateway, KeyedSignatureValidator,
    ValidationReport, HARE_PROTOCOL,
};
use shared_types::{wire, BlockId, HareMessage, InnerMessage, InstanceId, MessageKind};
use tokio::sync::mpsc;

/// Shared MAC key between the simulated producers and the broker's validator.
pub const SIM_KEY: [u8; 32] = [0x5A; 32];

// =============================================================================
// SIMULATED RUNTIME
// =============================================================================

/// A broker wired to an in-memory gossip network with signing producers.
pub struct BrokerSimulation {
    /// The gossip fabric; producers publish raw bytes here.
    pub gossip: Arc<InMemoryGossip>,
    /// The broker under test.
    pub broker: Arc<HareBroker<InMemoryGossip, KeyedSignatureValidator>>,
    /// Signer sharing the validator's key.
    pub signer: KeyedSignatureValidator,
}

impl BrokerSimulation {
    /// Start a broker with the given delivery-queue capacity and return it
    /// together with the transport's verdict stream.
    pub fn start(queue_capacity: usize) -> (Self, mpsc::UnboundedReceiver<ValidationReport>) {
        let gossip = Arc::new(InMemoryGossip::default());
        let feedback = gossip.take_feedback().expect("feedback stream");
        let signer = KeyedSignatureValidator::new(SIM_KEY);

        let config = BrokerConfig {
            queue_capacity,
            ..Default::default()
        };
        let broker = Arc::new(
            HareBroker::new(Arc::clone(&gossip), Arc::new(signer.clone()), config)
                .expect("valid config"),
        );
        broker.start().expect("broker starts");

        (
            Self {
                gossip,
                broker,
                signer,
            },
            feedback,
        )
    }

    /// A correctly signed wire message for `instance`/`round`.
    pub fn signed_bytes(&self, instance: u64, round: u32) -> Vec<u8> {
        let inner = InnerMessage {
            instance_id: InstanceId(instance),
            round,
            kind: MessageKind::Status,
            values: vec![BlockId(u64::from(round))],
            sender: [9u8; 32],
            role_proof: Vec::new(),
        };
        let signature = self.signer.sign(&inner).expect("sign");
        wire::encode(&HareMessage {
            payload: Some(inner),
            signature,
        })
        .expect("encode")
    }

    /// A wire message whose signature does not verify.
    pub fn tampered_bytes(&self, instance: u64, round: u32) -> Vec<u8> {
        let inner = InnerMessage {
            instance_id: InstanceId(instance),
            round,
            kind: MessageKind::Status,
            values: vec![BlockId(u64::from(round))],
            sender: [9u8; 32],
            role_proof: Vec::new(),
        };
        wire::encode(&HareMessage {
            payload: Some(inner),
            signature: vec![0xEE; 32],
        })
        .expect("encode")
    }

    /// Publish a signed message for `instance`/`round`.
    pub async fn publish(&self, instance: u64, round: u32) {
        self.gossip
            .publish(HARE_PROTOCOL, self.signed_bytes(instance, round))
            .await
            .expect("broker subscribed");
    }
}
