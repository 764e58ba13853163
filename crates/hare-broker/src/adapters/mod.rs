//! Adapters: an in-process gossip transport and validator stand-ins.

pub mod gossip;
pub mod validators;

pub use gossip::InMemoryGossip;
pub use validators::{AcceptAll, KeyedSignatureValidator, RejectAll};
