// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use tributary_iter::SequenceExt;

fn shuffled(size: usize) -> Vec<u64> {
    (0..size as u64).map(|i| (i * 2_654_435_761) % size as u64).collect()
}

fn bench_prefix_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_prefix_of_10");
    for size in [100usize, 1_000, 10_000] {
        let data = shuffled(size);

        group.bench_with_input(BenchmarkId::new("lazy", size), &data, |b, data| {
            b.iter(|| {
                let prefix: Vec<_> = data.iter().copied().sorted_lazily().take(10).collect();
                black_box(prefix)
            });
        });

        group.bench_with_input(BenchmarkId::new("eager", size), &data, |b, data| {
            b.iter(|| {
                let mut all = data.clone();
                all.sort_unstable();
                all.truncate(10);
                black_box(all)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_prefix_sort);
criterion_main!(benches);
