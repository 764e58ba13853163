//! # Core Domain Entities
//!
//! Identifier types shared by the broker, the validator and the consensus
//! instances.
//!
//! ## Clusters
//!
//! - **Consensus rounds**: `InstanceId`, `MessageKind`
//! - **Payload vocabulary**: `BlockId`
//! - **Networking**: `PublicKey`

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte Ed25519 public key.
pub type PublicKey = [u8; 32];

/// Identifier of one consensus round (one hare instance per mesh layer).
///
/// Instance ids are assigned monotonically and never reused; the broker
/// relies on their total order for its future-message window.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct InstanceId(pub u64);

impl InstanceId {
    /// The id of the round immediately after this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a candidate block voted on within a round.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct BlockId(pub u64);

/// The protocol round a hare message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    /// Pre-round value exchange.
    PreRound,
    /// Status report opening an iteration.
    Status,
    /// Leader proposal.
    Proposal,
    /// Commit vote on a proposed set.
    Commit,
    /// Notification of a committed set.
    Notify,
}
