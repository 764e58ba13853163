//! # Hare Broker Benchmarks
//!
//! Performance validation for the ingress hot paths.
//!
//! ## Usage
//!
//! Run all benchmarks:
//! ```bash
//! cargo bench --package hare-benchmarks --bench broker_benchmarks
//! ```
//!
//! Run a specific area:
//! ```bash
//! cargo bench --package hare-benchmarks --bench broker_benchmarks -- codec
//! cargo bench --package hare-benchmarks --bench broker_benchmarks -- dispatch
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hare_benchmarks::utils::{sample_bytes, sample_message};
use hare_broker::domain::{classify, BrokerConfig};
use hare_broker::{AcceptAll, HareBroker, InMemoryGossip, InstanceGateway, HARE_PROTOCOL};
use shared_types::{wire, InstanceId};
use std::sync::Arc;

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    let message = sample_message(1, 0, 200);
    group.bench_function("encode_200_values", |b| {
        b.iter(|| wire::encode(black_box(&message)).unwrap());
    });

    let bytes = sample_bytes(1, 0, 200);
    group.bench_function("decode_200_values", |b| {
        b.iter(|| wire::decode(black_box(&bytes)).unwrap());
    });

    group.finish();
}

fn bench_gate(c: &mut Criterion) {
    c.bench_function("gate/classify", |b| {
        b.iter(|| classify(black_box(InstanceId(101)), black_box(InstanceId(100))));
    });
}

fn bench_dispatch(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("runtime");

    let gossip = Arc::new(InMemoryGossip::default());
    // Verdicts are not consumed in the benchmark; drop the stream so reports
    // are discarded instead of accumulating.
    drop(gossip.take_feedback());

    let broker = HareBroker::new(
        Arc::clone(&gossip),
        Arc::new(AcceptAll),
        BrokerConfig::default(),
    )
    .expect("valid config");

    let mut queue = runtime.block_on(async {
        broker.start().expect("broker starts");
        broker.register(InstanceId(1)).await
    });

    let bytes = sample_bytes(1, 0, 20);
    c.bench_function("dispatch/end_to_end", |b| {
        b.iter(|| {
            runtime.block_on(async {
                gossip
                    .publish(HARE_PROTOCOL, bytes.clone())
                    .await
                    .expect("subscribed");
                queue.recv().await.expect("delivered")
            })
        });
    });
}

criterion_group!(benches, bench_codec, bench_gate, bench_dispatch);
criterion_main!(benches);
