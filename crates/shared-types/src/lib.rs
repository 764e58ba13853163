//! # Shared Types Crate
//!
//! Cross-crate domain types for the hare consensus ingress subsystem.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: instance identifiers, the hare wire
//!   message and its codec are defined here and nowhere else.
//! - **Opaque Payloads**: the broker only ever reads `instance_id` from a
//!   decoded message; everything else is carried for the semantic validator
//!   and the consensus instances.
//! - **Reusable Shutdown**: the `Closer`/`CloseSignal` pair is the one
//!   broadcast-once primitive every long-running task in the workspace
//!   listens on.

pub mod entities;
pub mod shutdown;
pub mod wire;

pub use entities::{BlockId, InstanceId, MessageKind, PublicKey};
pub use shutdown::{CloseSignal, Closer};
pub use wire::{HareMessage, InnerMessage, WireError};
