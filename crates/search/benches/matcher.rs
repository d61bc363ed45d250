//! Benchmarks for similarity scoring and ranked matching.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stackdex_search::{best_matches, levenshtein_distance, similarity};

fn create_test_names(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("technology-{}-{}", i % 7, i))
        .collect()
}

fn bench_levenshtein(c: &mut Criterion) {
    let mut group = c.benchmark_group("levenshtein");

    group.bench_function("short", |b| {
        b.iter(|| levenshtein_distance(black_box("react"), black_box("recat")))
    });

    group.bench_function("medium", |b| {
        b.iter(|| {
            levenshtein_distance(
                black_box("a reasonably long technology name"),
                black_box("another reasonably long tech name"),
            )
        })
    });

    group.finish();
}

fn bench_similarity(c: &mut Criterion) {
    c.bench_function("similarity", |b| {
        b.iter(|| similarity(black_box("JavaScript"), black_box("TypeScript")))
    });
}

fn bench_best_matches(c: &mut Criterion) {
    let mut group = c.benchmark_group("best_matches");

    for size in [10, 100, 1000].iter() {
        let names = create_test_names(*size);

        group.bench_with_input(BenchmarkId::new("ranked", size), size, |b, _| {
            b.iter(|| {
                best_matches(
                    black_box("technology-3"),
                    names.iter(),
                    |s| s.to_string(),
                    10,
                    0.3,
                )
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_levenshtein, bench_similarity, bench_best_matches);
criterion_main!(benches);
