use awaremap::{evaluate, Evaluator};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::HashMap;
use std::hint::black_box;

fn submission(seed: u32) -> HashMap<String, String> {
    (1..=43)
        .map(|q| (format!("q{q}"), ((q + seed) % 4 + 1).to_string()))
        .chain([("education".to_string(), "Bachelor".to_string())])
        .collect()
}

fn bench_single(c: &mut Criterion) {
    let answers = submission(0);
    c.bench_function("evaluate_single", |b| b.iter(|| evaluate(black_box(&answers))));
}

fn bench_batch(c: &mut Criterion) {
    let evaluator = Evaluator::standard();
    let mut group = c.benchmark_group("evaluate_batch");
    for size in [10usize, 100, 1000] {
        let submissions: Vec<_> = (0..size as u32).map(submission).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &submissions, |b, s| {
            b.iter(|| evaluator.evaluate_batch(black_box(s)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single, bench_batch);
criterion_main!(benches);
