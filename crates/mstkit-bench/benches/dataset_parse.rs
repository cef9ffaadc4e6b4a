//! Dataset parsing and graph construction.
#![allow(clippy::expect_used)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mstkit_bench::{SizeTier, generate_dataset};
use mstkit_core::parse_dataset;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("dataset");

    for tier in [SizeTier::Small, SizeTier::Medium, SizeTier::Large] {
        let dataset = generate_dataset(tier, 5, 42);
        let json = serde_json::to_string(&dataset).expect("serialize");
        group.throughput(Throughput::Bytes(json.len() as u64));

        group.bench_with_input(BenchmarkId::new("parse", tier.name()), &json, |b, json| {
            b.iter(|| parse_dataset(json).expect("parse"));
        });

        group.bench_with_input(BenchmarkId::new("build", tier.name()), &dataset, |b, ds| {
            b.iter(|| {
                ds.graphs
                    .iter()
                    .map(|spec| spec.build().expect("build").edge_count())
                    .sum::<usize>()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
