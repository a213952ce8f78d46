//! Criterion benchmarks: raw hashing, training, lookup.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use bloomsieve::{murmur3_x64_128, train_filter};

fn bench_hash(c: &mut Criterion) {
    let data = vec![0xa5u8; 1024];
    let mut group = c.benchmark_group("murmur3_x64_128");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("1KiB", |b| b.iter(|| murmur3_x64_128(black_box(&data), 0)));
    group.finish();
}

fn bench_train(c: &mut Criterion) {
    let elements: Vec<String> = (0..1000).map(|i| format!("element_{}", i)).collect();
    c.bench_function("train_1000_elements", |b| {
        b.iter(|| train_filter(black_box(elements.iter()), 0.99).expect("training succeeds"))
    });
}

fn bench_contains(c: &mut Criterion) {
    let elements: Vec<String> = (0..1000).map(|i| format!("element_{}", i)).collect();
    let filter = train_filter(elements.iter(), 0.99).expect("training succeeds");
    let hit = &elements[500];
    let miss = "element_never_trained".to_string();

    c.bench_function("contains_hit", |b| b.iter(|| filter.contains(black_box(&hit))));
    c.bench_function("contains_miss", |b| b.iter(|| filter.contains(black_box(&&miss))));
}

criterion_group!(benches, bench_hash, bench_train, bench_contains);
criterion_main!(benches);
