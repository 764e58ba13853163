//! Hare wire message and codec.
//!
//! Messages travel over gossip as bincode-encoded [`HareMessage`] records.
//! The outer record carries a signature over the encoded inner payload; the
//! inner payload carries the round vocabulary. A record whose payload is
//! absent is well-formed on the wire but useless, and is rejected by the
//! broker's shape check before any routing happens.

use crate::entities::{BlockId, InstanceId, MessageKind, PublicKey};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wire codec failures.
#[derive(Debug, Error)]
pub enum WireError {
    /// The raw bytes did not decode to a hare message.
    #[error("malformed hare message: {0}")]
    Malformed(String),

    /// The encoder failed (only possible for pathological payload sizes).
    #[error("could not encode hare message: {0}")]
    Encode(String),
}

/// The protocol payload of a hare message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InnerMessage {
    /// Consensus round this message addresses.
    pub instance_id: InstanceId,
    /// Iteration counter within the round.
    pub round: u32,
    /// Which protocol step the message implements.
    pub kind: MessageKind,
    /// The set of candidate blocks being voted on.
    pub values: Vec<BlockId>,
    /// Public key of the sending participant.
    pub sender: PublicKey,
    /// Proof that the sender holds the role it claims for this step.
    pub role_proof: Vec<u8>,
}

/// One gossip-delivered hare record.
///
/// The broker reads only `payload.instance_id`; signature and payload
/// internals belong to the semantic validator and the consuming instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HareMessage {
    /// The protocol payload. Absent payloads fail the broker's shape check.
    pub payload: Option<InnerMessage>,
    /// Signature over the encoded payload.
    pub signature: Vec<u8>,
}

impl HareMessage {
    /// The instance id this message addresses, if it has a payload.
    #[must_use]
    pub fn instance_id(&self) -> Option<InstanceId> {
        self.payload.as_ref().map(|inner| inner.instance_id)
    }
}

/// Encode a message for gossip.
pub fn encode(message: &HareMessage) -> Result<Vec<u8>, WireError> {
    bincode::serialize(message).map_err(|e| WireError::Encode(e.to_string()))
}

/// Encode just the inner payload, as signed by participants.
pub fn encode_inner(inner: &InnerMessage) -> Result<Vec<u8>, WireError> {
    bincode::serialize(inner).map_err(|e| WireError::Encode(e.to_string()))
}

/// Decode raw gossip bytes into a message.
pub fn decode(bytes: &[u8]) -> Result<HareMessage, WireError> {
    bincode::deserialize(bytes).map_err(|e| WireError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_message(instance: u64) -> HareMessage {
        HareMessage {
            payload: Some(InnerMessage {
                instance_id: InstanceId(instance),
                round: 1,
                kind: MessageKind::Status,
                values: vec![BlockId(1), BlockId(2), BlockId(3)],
                sender: [7u8; 32],
                role_proof: vec![0xAB; 8],
            }),
            signature: vec![0xCD; 16],
        }
    }

    #[test]
    fn test_encode_decode() {
        let message = sample_message(5);
        let bytes = encode(&message).unwrap();
        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded, message);
        assert_eq!(decoded.instance_id(), Some(InstanceId(5)));
    }

    #[test]
    fn test_decode_garbage_fails() {
        let result = decode(&[0xFF; 7]);
        assert!(matches!(result, Err(WireError::Malformed(_))));
    }

    #[test]
    fn test_empty_payload_is_wire_valid() {
        let message = HareMessage {
            payload: None,
            signature: Vec::new(),
        };
        let bytes = encode(&message).unwrap();
        let decoded = decode(&bytes).unwrap();
        assert!(decoded.payload.is_none());
        assert_eq!(decoded.instance_id(), None);
    }
}
