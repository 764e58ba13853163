//! # Integration Tests Crate
//!
//! End-to-end tests that run the hare ingress pipeline without a real
//! network: an in-memory gossip transport feeds the broker, consensus
//! instances consume their delivery queues, and every verdict the broker
//! reports is observed on the transport's feedback stream.
//!
//! ## Structure
//!
//! ```text
//! integration-tests/
//! └── src/
//!     ├── lib.rs                # This file
//!     └── runtime_simulation.rs # Gossip → broker → instance simulations
//! ```
//!
//! ## Covered Flows
//!
//! 1. **Signed traffic end to end**: producer signs, broker validates and
//!    routes, instance consumes.
//! 2. **Late and early registration**: parked messages drain in order ahead
//!    of live traffic.
//! 3. **Backpressure**: a full delivery queue stalls ingress instead of
//!    dropping.
//! 4. **Shutdown**: no deliveries after close, verdicts stop cleanly.

pub mod runtime_simulation;
