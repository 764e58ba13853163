//! Benchmark utilities for the hare ingress subsystem
pub mod utils {
    use shared_types::{wire, BlockId, HareMessage, InnerMessage, InstanceId, MessageKind};

    /// A plausible wire message for codec and dispatch benchmarks.
    pub fn sample_message(instance: u64, round: u32, set_size: usize) -> HareMessage {
        HareMessage {
            payload: Some(InnerMessage {
                instance_id: InstanceId(instance),
                round,
                kind: MessageKind::Status,
                values: (0..set_size as u64).map(BlockId).collect(),
                sender: [7u8; 32],
                role_proof: vec![0xAB; 64],
            }),
            signature: vec![0xCD; 32],
        }
    }

    /// Encoded form of [`sample_message`].
    pub fn sample_bytes(instance: u64, round: u32, set_size: usize) -> Vec<u8> {
        wire::encode(&sample_message(instance, round, set_size)).expect("encode")
    }
}
