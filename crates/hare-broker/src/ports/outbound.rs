//! Driven ports (outbound dependencies).
//!
//! The broker consumes two capabilities: the gossip transport it subscribes
//! to, and the semantic validator it runs each message through. Both are
//! injected at construction; the broker never constructs its collaborators.

use shared_types::HareMessage;
use tokio::sync::mpsc;

/// Verdict fed back to the gossip layer for one envelope.
///
/// The transport uses the verdict to decide whether to keep propagating the
/// message to other peers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Sequence number of the envelope the verdict belongs to.
    pub seq: u64,
    /// Protocol the verdict is reported under.
    pub protocol: String,
    /// Whether the message passed decoding, gating and semantic validation.
    pub verdict: bool,
}

/// One message as delivered by the gossip transport.
///
/// Reporting consumes the envelope, so a verdict can be issued at most once
/// per message; the dispatcher issues exactly one on every path that reaches
/// the decode step.
#[derive(Debug)]
pub struct GossipEnvelope {
    seq: u64,
    bytes: Vec<u8>,
    feedback: mpsc::UnboundedSender<ValidationReport>,
}

impl GossipEnvelope {
    /// Package raw bytes with the transport's feedback channel.
    #[must_use]
    pub fn new(seq: u64, bytes: Vec<u8>, feedback: mpsc::UnboundedSender<ValidationReport>) -> Self {
        Self {
            seq,
            bytes,
            feedback,
        }
    }

    /// Raw message bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Envelope sequence number, unique per transport subscription.
    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Report the validation verdict for this envelope.
    ///
    /// A transport that has already shut down ignores the verdict.
    pub fn report_validation(self, protocol: &str, verdict: bool) {
        let _ = self.feedback.send(ValidationReport {
            seq: self.seq,
            protocol: protocol.to_string(),
            verdict,
        });
    }
}

/// The gossip transport capability.
pub trait GossipNetwork: Send + Sync {
    /// One-shot subscription to a protocol's ingress stream.
    ///
    /// The returned stream closes only when the transport shuts down.
    fn register_gossip_protocol(&self, protocol: &str) -> mpsc::Receiver<GossipEnvelope>;
}

/// Semantic message validation capability.
///
/// Runs on the dispatcher's task after the instance-id gate and before
/// routing; an expensive implementation directly slows ingress, which is the
/// intended backpressure.
pub trait MessageValidator: Send + Sync {
    /// Whether the message's content is acceptable.
    fn validate(&self, message: &HareMessage) -> bool;
}
