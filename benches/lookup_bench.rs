//! Criterion benchmark harness: single-lookup latency for both JSON layouts.
//!
//! Run with: `cargo bench`
//!
//! The scaling groups sweep corpus size to show the array scan growing
//! linearly while the keyed object stays flat; the hit-position group shows
//! where in the table the scanned entry sits.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use ttl_bench::corpus::{array_document, object_document, synthetic_records};
use ttl_bench::layout::array::ArrayLayout;
use ttl_bench::layout::object::ObjectLayout;
use ttl_bench::layout::TtlLayout;

const CORPUS_SIZES: &[usize] = &[1, 8, 32, 128];
const CORPUS_SEED: u64 = 0xBEEF;

fn bench_array_scaling(c: &mut Criterion) {
    let layout = ArrayLayout::new();
    let mut group = c.benchmark_group("lookup/array");

    for &size in CORPUS_SIZES {
        let records = synthetic_records(size, 2, CORPUS_SEED);
        let doc = array_document(&records);
        // Middle of the table, so the scan is charged a representative cost
        // rather than a best case.
        let target = records[size / 2].types[0].clone();

        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| layout.lookup(black_box(doc), black_box(&target)));
        });
    }
    group.finish();
}

fn bench_object_scaling(c: &mut Criterion) {
    let layout = ObjectLayout::new();
    let mut group = c.benchmark_group("lookup/object");

    for &size in CORPUS_SIZES {
        let records = synthetic_records(size, 2, CORPUS_SEED);
        let doc = object_document(&records);
        let target = records[size / 2].types[0].clone();

        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| layout.lookup(black_box(doc), black_box(&target)));
        });
    }
    group.finish();
}

fn bench_hit_position(c: &mut Criterion) {
    let layout = ArrayLayout::new();
    let records = synthetic_records(64, 2, CORPUS_SEED);
    let doc = array_document(&records);

    let cases = [
        ("first", records[0].types[0].clone()),
        ("middle", records[32].types[0].clone()),
        ("last", records[63].types[0].clone()),
        ("miss", "UNMAPPED".to_string()),
    ];

    let mut group = c.benchmark_group("lookup/hit_position");
    for (label, target) in &cases {
        group.bench_with_input(BenchmarkId::from_parameter(label), target, |b, target| {
            b.iter(|| layout.lookup(black_box(&doc), black_box(target)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_array_scaling,
    bench_object_scaling,
    bench_hit_position
);
criterion_main!(benches);
