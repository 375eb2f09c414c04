//! Criterion benchmarks for the feature-construction hot path.
//!
//! Benchmarks:
//! 1. Rolling-mean scan over one long product sequence
//! 2. Full feature build (validate + sort + partition + scan) across products

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use restock_core::domain::SalesObservation;
use restock_core::features::{build_features, rolling_mean};

// ── Helpers ──────────────────────────────────────────────────────────

fn make_observations(products: usize, days: usize) -> Vec<SalesObservation> {
    let base_date = chrono::NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let mut out = Vec::with_capacity(products * days);
    for p in 0..products {
        for d in 0..days {
            let quantity = 20.0 + ((p * 31 + d * 7) % 17) as f64;
            out.push(SalesObservation::new(
                format!("SKU-{p:04}"),
                base_date + chrono::Days::new(d as u64),
                quantity,
            ));
        }
    }
    out
}

fn bench_rolling_mean(c: &mut Criterion) {
    let mut group = c.benchmark_group("rolling_mean");
    for n in [365usize, 3_650] {
        let values: Vec<f64> = (0..n).map(|i| ((i * 37) % 53) as f64).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| rolling_mean(black_box(values), 7));
        });
    }
    group.finish();
}

fn bench_build_features(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_features");
    for products in [10usize, 100] {
        let observations = make_observations(products, 365);
        group.bench_with_input(
            BenchmarkId::from_parameter(products),
            &observations,
            |b, obs| {
                b.iter(|| build_features(black_box(obs)).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_rolling_mean, bench_build_features);
criterion_main!(benches);
