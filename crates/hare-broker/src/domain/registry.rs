//! Instance registry and pending buffer.
//!
//! One reader/writer lock guards the delivery-queue map (`outbox`), the
//! parked-message map (`pending`) and the registration watermark. The
//! dispatcher classifies and looks up under the read lock; registration and
//! parking mutate under the write lock. The lock is tokio's because
//! [`Registry::register`] drains parked messages into the fresh queue while
//! still holding the write lock, which excludes the dispatcher for the whole
//! install-and-sweep critical section.
//!
//! The lock is never held across a backpressure enqueue: the dispatcher
//! clones the queue sender out of the map and sends after the guard drops.

use shared_types::{HareMessage, InstanceId};
use std::collections::HashMap;
use tokio::sync::{mpsc, RwLock};
use tracing::debug;

/// Outcome of asking the registry to park a near-future message.
#[derive(Debug)]
pub enum ParkOutcome {
    /// The message was appended to the pending list for its instance.
    Parked,
    /// A queue was installed between the dispatcher's lookup and the park;
    /// the message must be delivered there instead. Carries the queue and
    /// gives the message back.
    Redirected(mpsc::Sender<HareMessage>, HareMessage),
}

#[derive(Debug, Default)]
struct RegistryState {
    outbox: HashMap<InstanceId, mpsc::Sender<HareMessage>>,
    pending: HashMap<InstanceId, Vec<HareMessage>>,
    max_registered: InstanceId,
}

/// Mapping from instance id to delivery queue, plus the pending buffer for
/// the one round that may run ahead of registration.
#[derive(Debug)]
pub struct Registry {
    state: RwLock<RegistryState>,
    queue_capacity: usize,
}

impl Registry {
    /// Create an empty registry whose delivery queues hold `queue_capacity`
    /// messages each.
    #[must_use]
    pub fn new(queue_capacity: usize) -> Self {
        Self {
            state: RwLock::new(RegistryState::default()),
            queue_capacity,
        }
    }

    /// The largest instance id ever registered.
    pub async fn watermark(&self) -> InstanceId {
        self.state.read().await.max_registered
    }

    /// Install a delivery queue for `id` and return its consuming end.
    ///
    /// Raises the watermark, replaces any queue previously installed for
    /// `id` (orphaning its undelivered messages; callers must not
    /// re-register live ids), and moves every message parked for `id` into
    /// the fresh queue in arrival order before the lock is released.
    pub async fn register(&self, id: InstanceId) -> mpsc::Receiver<HareMessage> {
        let mut state = self.state.write().await;

        if id > state.max_registered {
            state.max_registered = id;
        }

        let (queue, receiver) = mpsc::channel(self.queue_capacity);
        state.outbox.insert(id, queue.clone());

        if let Some(parked) = state.pending.remove(&id) {
            debug!(instance = %id, count = parked.len(), "draining parked messages");
            for message in parked {
                // The queue is fresh, so this only waits if more messages
                // were parked than the queue holds; the consumer starts
                // draining as soon as this method returns the receiver.
                if queue.send(message).await.is_err() {
                    break;
                }
            }
        }

        receiver
    }

    /// Remove the delivery queue for `id`.
    ///
    /// The watermark is not lowered and pending is untouched: an id that was
    /// ever registered can no longer be one round ahead of the watermark, so
    /// no pending entry for it can exist.
    pub async fn unregister(&self, id: InstanceId) {
        self.state.write().await.outbox.remove(&id);
    }

    /// The delivery queue for `id`, if one is installed.
    pub async fn lookup(&self, id: InstanceId) -> Option<mpsc::Sender<HareMessage>> {
        self.state.read().await.outbox.get(&id).cloned()
    }

    /// Park a near-future message for `id`, or hand back the queue if a
    /// concurrent registration installed one since the caller's lookup.
    pub async fn park(&self, id: InstanceId, message: HareMessage) -> ParkOutcome {
        let mut state = self.state.write().await;

        if let Some(queue) = state.outbox.get(&id) {
            return ParkOutcome::Redirected(queue.clone(), message);
        }

        state.pending.entry(id).or_default().push(message);
        ParkOutcome::Parked
    }

    /// Whether a delivery queue is installed for `id`.
    pub async fn is_registered(&self, id: InstanceId) -> bool {
        self.state.read().await.outbox.contains_key(&id)
    }

    /// Number of messages parked for `id`.
    pub async fn pending_count(&self, id: InstanceId) -> usize {
        self.state
            .read()
            .await
            .pending
            .get(&id)
            .map_or(0, Vec::len)
    }

    /// Instance ids with at least one parked message.
    pub async fn pending_instances(&self) -> Vec<InstanceId> {
        self.state.read().await.pending.keys().copied().collect()
    }
}
