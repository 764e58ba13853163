//! Hare broker service: lifecycle and the dispatcher loop.
//!
//! One dispatcher task per broker drains the gossip ingress stream. Each
//! envelope runs the pipeline decode → shape check → instance-id gate →
//! semantic validation → verdict report → routing. Every envelope that
//! reaches the decode step reports its verdict to the transport exactly
//! once, and a positive verdict always goes out before routing so that
//! propagation never depends on whether a consumer exists.

use crate::domain::{classify, BrokerConfig, BrokerError, InstanceClass, ParkOutcome, Registry};
use crate::metrics;
use crate::ports::inbound::InstanceGateway;
use crate::ports::outbound::{GossipEnvelope, GossipNetwork, MessageValidator};
use async_trait::async_trait;
use shared_types::{wire, CloseSignal, Closer, HareMessage, InstanceId};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Gossip ingress broker for hare consensus instances.
///
/// Constructed over a transport and a validator capability; started once;
/// registered against by each consensus instance as its round begins.
pub struct HareBroker<N, V>
where
    N: GossipNetwork,
    V: MessageValidator,
{
    network: Arc<N>,
    validator: Arc<V>,
    registry: Arc<Registry>,
    config: BrokerConfig,
    closer: Closer,
    started: AtomicBool,
}

impl<N, V> HareBroker<N, V>
where
    N: GossipNetwork,
    V: MessageValidator + 'static,
{
    /// Build a broker from its collaborators and configuration.
    pub fn new(
        network: Arc<N>,
        validator: Arc<V>,
        config: BrokerConfig,
    ) -> Result<Self, BrokerError> {
        config.validate()?;
        Ok(Self {
            registry: Arc::new(Registry::new(config.queue_capacity)),
            network,
            validator,
            config,
            closer: Closer::new(),
            started: AtomicBool::new(false),
        })
    }

    /// Subscribe to the gossip transport and launch the dispatcher.
    ///
    /// Non-blocking; fails if the broker is already running.
    pub fn start(&self) -> Result<(), BrokerError> {
        if self.started.swap(true, Ordering::SeqCst) {
            error!("could not start broker: already started");
            return Err(BrokerError::AlreadyStarted);
        }

        let inbox = self.network.register_gossip_protocol(&self.config.protocol);
        let dispatcher = Dispatcher {
            protocol: self.config.protocol.clone(),
            validator: Arc::clone(&self.validator),
            registry: Arc::clone(&self.registry),
            close: self.closer.signal(),
        };
        tokio::spawn(dispatcher.run(inbox));

        info!(protocol = %self.config.protocol, "hare broker started");
        Ok(())
    }

    /// Signal the dispatcher to stop.
    ///
    /// Delivery queues stay open; consumers observe shutdown through their
    /// own signals. Calling this twice is a caller bug and is logged.
    pub fn close(&self) {
        if !self.closer.close() {
            warn!("broker close called more than once");
        }
    }

    /// Shared handle to the instance registry.
    #[must_use]
    pub fn registry(&self) -> Arc<Registry> {
        Arc::clone(&self.registry)
    }

    /// The broker's configuration.
    #[must_use]
    pub fn config(&self) -> &BrokerConfig {
        &self.config
    }
}

#[async_trait]
impl<N, V> InstanceGateway for HareBroker<N, V>
where
    N: GossipNetwork,
    V: MessageValidator + 'static,
{
    async fn register(&self, id: InstanceId) -> mpsc::Receiver<HareMessage> {
        info!(instance = %id, "consensus instance registered");
        self.registry.register(id).await
    }

    async fn unregister(&self, id: InstanceId) {
        info!(instance = %id, "consensus instance unregistered");
        self.registry.unregister(id).await
    }
}

/// The broker's single long-running loop.
struct Dispatcher<V> {
    protocol: String,
    validator: Arc<V>,
    registry: Arc<Registry>,
    close: CloseSignal,
}

impl<V> Dispatcher<V>
where
    V: MessageValidator,
{
    async fn run(mut self, mut inbox: mpsc::Receiver<GossipEnvelope>) {
        info!(protocol = %self.protocol, "hare broker dispatcher running");
        loop {
            tokio::select! {
                biased;
                _ = self.close.closed() => {
                    info!(protocol = %self.protocol, "hare broker dispatcher stopped");
                    return;
                }
                incoming = inbox.recv() => match incoming {
                    Some(envelope) => self.dispatch(envelope).await,
                    None => {
                        warn!(protocol = %self.protocol, "gossip ingress closed, stopping dispatcher");
                        return;
                    }
                },
            }
        }
    }

    async fn dispatch(&self, envelope: GossipEnvelope) {
        let message = match wire::decode(envelope.bytes()) {
            Ok(message) => message,
            Err(err) => {
                warn!(seq = envelope.seq(), error = %err, "could not decode gossip message");
                metrics::record_message_rejected("malformed");
                envelope.report_validation(&self.protocol, false);
                return;
            }
        };

        let Some(instance) = message.instance_id() else {
            warn!(seq = envelope.seq(), "message validation failed: empty payload");
            metrics::record_message_rejected("empty_payload");
            envelope.report_validation(&self.protocol, false);
            return;
        };

        let watermark = self.registry.watermark().await;
        let class = classify(instance, watermark);
        if class == InstanceClass::FarFuture {
            warn!(
                instance = %instance,
                watermark = %watermark,
                "message validation failed: instance too far ahead"
            );
            metrics::record_message_rejected("far_future");
            envelope.report_validation(&self.protocol, false);
            return;
        }

        let validation_started = Instant::now();
        let valid = self.validator.validate(&message);
        metrics::record_validation_latency(validation_started.elapsed().as_secs_f64());
        if !valid {
            warn!(instance = %instance, "message validation failed: validator rejected message");
            metrics::record_message_rejected("semantic");
            envelope.report_validation(&self.protocol, false);
            return;
        }

        // Verdict before routing: propagation must not depend on whether a
        // consumer exists.
        envelope.report_validation(&self.protocol, true);
        metrics::record_message_dispatched();

        if let Some(queue) = self.registry.lookup(instance).await {
            // Full queue: wait. A slow instance throttles ingress.
            if queue.send(message).await.is_err() {
                debug!(instance = %instance, "delivery queue gone before enqueue, message dropped");
            }
            return;
        }

        if class == InstanceClass::NearFuture {
            match self.registry.park(instance, message).await {
                ParkOutcome::Parked => {
                    metrics::record_message_parked();
                    debug!(instance = %instance, "message parked for unregistered instance");
                }
                ParkOutcome::Redirected(queue, message) => {
                    if queue.send(message).await.is_err() {
                        debug!(instance = %instance, "delivery queue gone before enqueue, message dropped");
                    }
                }
            }
        } else {
            debug!(instance = %instance, "no registered instance, message dropped");
        }
    }
}
