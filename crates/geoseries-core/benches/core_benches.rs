//! Criterion benchmarks for geoseries-core.
//!
//! Covers: quarter rounding, series generation, and both selectors across
//! a short and a long series.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use geoseries_core::closed_form::pick_special_alt;
use geoseries_core::linear::pick_special;
use geoseries_core::rounding::round_quarter;
use geoseries_core::series::{generate_series, SeriesGenerator};

fn bench_round_quarter(c: &mut Criterion) {
    c.bench_function("round_quarter", |b| {
        b.iter(|| round_quarter(black_box(10.63)))
    });
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_series");
    for length in [5usize, 10, 40] {
        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, &length| {
            b.iter(|| generate_series(black_box(1.0), black_box(5062.5), length))
        });
    }
    group.finish();
}

fn bench_selectors(c: &mut Criterion) {
    let mut group = c.benchmark_group("pick_special");
    for length in [10usize, 40] {
        let generator = SeriesGenerator::new(1.0, 5062.5, length);
        let growth_rate = generator.params().growth_rate;
        let series = generator.generate();
        // Target near the tail: worst case for the linear descent.
        let z = 1000.0 / series[length - 2];

        group.bench_with_input(BenchmarkId::new("linear", length), &series, |b, series| {
            b.iter(|| pick_special(black_box(z), series))
        });
        group.bench_with_input(
            BenchmarkId::new("closed_form", length),
            &series,
            |b, series| b.iter(|| pick_special_alt(black_box(z), growth_rate, series)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_round_quarter, bench_generate, bench_selectors);
criterion_main!(benches);
