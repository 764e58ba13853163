//! Validator adapters.
//!
//! The real semantic validator (committee eligibility, certificate checks)
//! lives with the consensus logic; these adapters cover wiring and tests.
//! `KeyedSignatureValidator` has the same shape as the production check:
//! recompute the authenticator over the encoded payload and compare.

use crate::ports::outbound::MessageValidator;
use sha3::{Digest, Keccak256};
use shared_types::{wire, HareMessage, InnerMessage};
use tracing::debug;

/// Accepts every message. Wiring stub.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAll;

impl MessageValidator for AcceptAll {
    fn validate(&self, _message: &HareMessage) -> bool {
        true
    }
}

/// Rejects every message. Wiring stub for failure paths.
#[derive(Debug, Default, Clone, Copy)]
pub struct RejectAll;

impl MessageValidator for RejectAll {
    fn validate(&self, _message: &HareMessage) -> bool {
        false
    }
}

/// Keyed-MAC validator: a message is valid iff its signature equals the
/// Keccak-256 of the shared key followed by the encoded payload.
#[derive(Debug, Clone)]
pub struct KeyedSignatureValidator {
    key: [u8; 32],
}

impl KeyedSignatureValidator {
    /// Build a validator for `key`.
    #[must_use]
    pub fn new(key: [u8; 32]) -> Self {
        Self { key }
    }

    /// Produce the signature this validator expects for `inner`.
    ///
    /// Used by message producers sharing the key.
    pub fn sign(&self, inner: &InnerMessage) -> Result<Vec<u8>, shared_types::WireError> {
        let encoded = wire::encode_inner(inner)?;
        let mut hasher = Keccak256::new();
        hasher.update(self.key);
        hasher.update(&encoded);
        Ok(hasher.finalize().to_vec())
    }
}

impl MessageValidator for KeyedSignatureValidator {
    fn validate(&self, message: &HareMessage) -> bool {
        let Some(inner) = message.payload.as_ref() else {
            return false;
        };
        match self.sign(inner) {
            Ok(expected) => expected == message.signature,
            Err(err) => {
                debug!(error = %err, "could not re-encode payload for signature check");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{BlockId, InstanceId, MessageKind};

    fn inner(instance: u64) -> InnerMessage {
        InnerMessage {
            instance_id: InstanceId(instance),
            round: 2,
            kind: MessageKind::Commit,
            values: vec![BlockId(10), BlockId(11)],
            sender: [3u8; 32],
            role_proof: vec![1, 2, 3],
        }
    }

    #[test]
    fn test_signed_message_validates() {
        let validator = KeyedSignatureValidator::new([0x11; 32]);
        let payload = inner(4);
        let signature = validator.sign(&payload).unwrap();
        let message = HareMessage {
            payload: Some(payload),
            signature,
        };
        assert!(validator.validate(&message));
    }

    #[test]
    fn test_wrong_key_rejected() {
        let signer = KeyedSignatureValidator::new([0x11; 32]);
        let verifier = KeyedSignatureValidator::new([0x22; 32]);
        let payload = inner(4);
        let message = HareMessage {
            signature: signer.sign(&payload).unwrap(),
            payload: Some(payload),
        };
        assert!(!verifier.validate(&message));
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let validator = KeyedSignatureValidator::new([0x11; 32]);
        let payload = inner(4);
        let signature = validator.sign(&payload).unwrap();
        let mut tampered = payload;
        tampered.values.push(BlockId(99));
        let message = HareMessage {
            payload: Some(tampered),
            signature,
        };
        assert!(!validator.validate(&message));
    }

    #[test]
    fn test_missing_payload_rejected() {
        let validator = KeyedSignatureValidator::new([0x11; 32]);
        let message = HareMessage {
            payload: None,
            signature: Vec::new(),
        };
        assert!(!validator.validate(&message));
    }
}
