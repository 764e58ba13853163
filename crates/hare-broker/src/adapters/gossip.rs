//! In-memory gossip transport.
//!
//! Stands in for the node's p2p service when wiring the broker in tests,
//! simulations and benchmarks: publishers push raw bytes, subscribers get
//! envelope streams, and every verdict the broker reports is observable on
//! the feedback channel.

use crate::ports::outbound::{GossipEnvelope, GossipNetwork, ValidationReport};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc;

/// Default capacity of each protocol's ingress channel.
pub const DEFAULT_INGRESS_CAPACITY: usize = 1024;

/// An in-process gossip network with observable validation feedback.
pub struct InMemoryGossip {
    ingress_capacity: usize,
    subscriptions: Mutex<HashMap<String, mpsc::Sender<GossipEnvelope>>>,
    feedback_tx: mpsc::UnboundedSender<ValidationReport>,
    feedback_rx: Mutex<Option<mpsc::UnboundedReceiver<ValidationReport>>>,
    next_seq: AtomicU64,
}

impl InMemoryGossip {
    /// Create a network whose ingress channels hold `ingress_capacity`
    /// envelopes each.
    #[must_use]
    pub fn new(ingress_capacity: usize) -> Self {
        let (feedback_tx, feedback_rx) = mpsc::unbounded_channel();
        Self {
            ingress_capacity,
            subscriptions: Mutex::new(HashMap::new()),
            feedback_tx,
            feedback_rx: Mutex::new(Some(feedback_rx)),
            next_seq: AtomicU64::new(0),
        }
    }

    /// Deliver raw bytes to the subscriber of `protocol`.
    ///
    /// Waits while the subscriber's ingress channel is full, mirroring a
    /// transport applying backpressure. Returns the envelope's sequence
    /// number, or `None` if nobody subscribed to `protocol` or the
    /// subscriber went away.
    pub async fn publish(&self, protocol: &str, bytes: Vec<u8>) -> Option<u64> {
        let subscriber = self.subscriptions.lock().get(protocol).cloned()?;
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let envelope = GossipEnvelope::new(seq, bytes, self.feedback_tx.clone());
        subscriber.send(envelope).await.ok()?;
        Some(seq)
    }

    /// Take the verdict stream. Yields `Some` exactly once.
    pub fn take_feedback(&self) -> Option<mpsc::UnboundedReceiver<ValidationReport>> {
        self.feedback_rx.lock().take()
    }

    /// Drop the subscription for `protocol`, closing its envelope stream.
    pub fn shutdown_protocol(&self, protocol: &str) {
        self.subscriptions.lock().remove(protocol);
    }
}

impl Default for InMemoryGossip {
    fn default() -> Self {
        Self::new(DEFAULT_INGRESS_CAPACITY)
    }
}

impl GossipNetwork for InMemoryGossip {
    fn register_gossip_protocol(&self, protocol: &str) -> mpsc::Receiver<GossipEnvelope> {
        let (tx, rx) = mpsc::channel(self.ingress_capacity);
        self.subscriptions.lock().insert(protocol.to_string(), tx);
        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_without_subscriber_is_dropped() {
        let gossip = InMemoryGossip::default();
        assert!(gossip.publish("nobody", vec![1, 2, 3]).await.is_none());
    }

    #[tokio::test]
    async fn test_publish_reaches_subscriber() {
        let gossip = InMemoryGossip::default();
        let mut stream = gossip.register_gossip_protocol("test/proto");

        let seq = gossip.publish("test/proto", vec![9, 9]).await.unwrap();
        let envelope = stream.recv().await.expect("envelope");
        assert_eq!(envelope.seq(), seq);
        assert_eq!(envelope.bytes(), &[9, 9]);
    }

    #[tokio::test]
    async fn test_feedback_carries_verdict() {
        let gossip = InMemoryGossip::default();
        let mut stream = gossip.register_gossip_protocol("test/proto");
        let mut feedback = gossip.take_feedback().expect("first take");
        assert!(gossip.take_feedback().is_none());

        gossip.publish("test/proto", vec![0]).await.unwrap();
        let envelope = stream.recv().await.unwrap();
        envelope.report_validation("test/proto", true);

        let report = feedback.recv().await.expect("report");
        assert!(report.verdict);
        assert_eq!(report.protocol, "test/proto");
    }

    #[tokio::test]
    async fn test_shutdown_protocol_closes_stream() {
        let gossip = InMemoryGossip::default();
        let mut stream = gossip.register_gossip_protocol("test/proto");
        gossip.shutdown_protocol("test/proto");
        assert!(stream.recv().await.is_none());
    }
}
