//! Benchmarks for indexing and pair finding.
//!
//! Run with: `cargo bench --bench pair_finder`
//!
//! The synthetic catalog mirrors the expected shape of real input: a large
//! universe of rare items and a small core of frequent ones, so the
//! qualifying set stays far smaller than the item universe.

use criterion::{
    black_box, criterion_group, criterion_main,
    BenchmarkId, Criterion, Throughput,
};

use cooccurrence_kernel::{
    build_index, FinderMode, PairFinder, RawList, Threshold,
};

/// Deterministic catalog: `lists` lists of 20 items each, drawn from
/// `core` frequent items and a long tail of rare ones.
fn make_catalog(lists: usize, core: usize) -> Vec<RawList> {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    (0..lists)
        .map(|_| {
            (0..20)
                .map(|k| {
                    let r = next();
                    if k < 8 {
                        format!("core_{}", r % core as u64)
                    } else {
                        format!("tail_{}", r % 50_000)
                    }
                })
                .collect()
        })
        .collect()
}

/// Benchmark building the membership index.
fn bench_indexing(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexing");

    for lists in [1_000, 10_000] {
        let catalog = make_catalog(lists, 200);
        let tokens: usize = catalog.iter().map(Vec::len).sum();

        group.throughput(Throughput::Elements(tokens as u64));
        group.bench_with_input(BenchmarkId::new("lists", lists), &catalog, |b, catalog| {
            b.iter(|| build_index(black_box(catalog), Threshold::new(50).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark the pair phase in both execution modes.
fn bench_pair_finding(c: &mut Criterion) {
    let mut group = c.benchmark_group("pair_finding");
    let threshold = Threshold::new(50).unwrap();

    for core in [100, 400] {
        let index = build_index(make_catalog(10_000, core), threshold);

        for mode in [FinderMode::Sequential, FinderMode::Parallel] {
            let finder = PairFinder::with_mode(mode);
            group.bench_with_input(
                BenchmarkId::new(mode.to_string(), core),
                &index,
                |b, index| b.iter(|| finder.find(black_box(index))),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_indexing, bench_pair_finding);
criterion_main!(benches);
