//! Instance-id gate.
//!
//! Classifies a message's instance id against the registration watermark.
//! Ids more than one round ahead are rejected outright: without that cap an
//! adversary could grow the pending buffer without bound by inventing
//! far-future rounds.

use shared_types::InstanceId;

/// Where a message's instance id falls relative to the watermark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceClass {
    /// At or below the watermark; routed if a queue exists, dropped if not.
    CurrentOrPast,
    /// Exactly one round ahead; eligible for parking until registration.
    NearFuture,
    /// More than one round ahead; rejected.
    FarFuture,
}

/// Classify `message_instance` against the highest registered id.
#[must_use]
pub fn classify(message_instance: InstanceId, watermark: InstanceId) -> InstanceClass {
    if message_instance > watermark.next() {
        InstanceClass::FarFuture
    } else if message_instance == watermark.next() {
        InstanceClass::NearFuture
    } else {
        InstanceClass::CurrentOrPast
    }
}
