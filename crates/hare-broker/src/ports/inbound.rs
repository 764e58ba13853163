//! Driving ports (API) for the broker.

use async_trait::async_trait;
use shared_types::{HareMessage, InstanceId};
use tokio::sync::mpsc;

/// Consumer contract for consensus instances.
///
/// An instance registers before it starts accepting messages and
/// unregisters once its round completes.
#[async_trait]
pub trait InstanceGateway: Send + Sync {
    /// Claim the delivery queue for `id`.
    ///
    /// Messages already accepted for `id` are waiting on the queue, in
    /// arrival order, ahead of anything routed later. Registering an id
    /// that is still live replaces its queue and orphans undelivered
    /// messages; callers own the one-registrant-per-id rule.
    async fn register(&self, id: InstanceId) -> mpsc::Receiver<HareMessage>;

    /// Release `id`. Subsequent messages for it are dropped silently.
    async fn unregister(&self, id: InstanceId);
}
