//! Fuzzy Lookup Benchmarks
//!
//! Benchmarks for trie construction and the approximate search, implemented
//! with the Criterion framework.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode, Throughput};
use std::time::Duration;

use fuzzy_lookup_lib::bench::{synthetic_trie, synthetic_words};
use fuzzy_lookup_lib::data_structures::trie::{ApproximateSearch, Trie};

const ALPHABET: [char; 6] = ['a', 'b', 'c', 'd', 'e', 'f'];

/// Benchmark building tries of increasing size
fn bench_trie_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie_insert");
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [100, 1000, 10_000].iter() {
        let words = synthetic_words(*size, &ALPHABET, 3, 7);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("sequential_insert", size), &words, |b, words| {
            b.iter(|| {
                let mut trie = Trie::new();
                for word in words {
                    trie.insert(black_box(word));
                }
                trie
            });
        });
    }

    group.finish();
}

/// Benchmark the approximate search across cost ceilings
fn bench_find_closest(c: &mut Criterion) {
    let trie = synthetic_trie(10_000, &ALPHABET, 3, 6);

    let mut group = c.benchmark_group("find_closest");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(3));
    group.sample_size(50);

    for max_cost in 0..=3i64 {
        group.bench_with_input(BenchmarkId::new("faithful", max_cost), &max_cost, |b, &max_cost| {
            let search = ApproximateSearch::new(&trie).with_max_cost(max_cost).unwrap();
            b.iter(|| search.run(black_box("abcdef")));
        });

        group.bench_with_input(
            BenchmarkId::new("skip_redundant_pass", max_cost),
            &max_cost,
            |b, &max_cost| {
                let search = ApproximateSearch::new(&trie)
                    .with_max_cost(max_cost)
                    .unwrap()
                    .skip_redundant_pass(true);
                b.iter(|| search.run(black_box("abcdef")));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_trie_insert, bench_find_closest);
criterion_main!(benches);
