//! Benchmarks for the game analyses.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strategic_solver::games::{classic, random::seeded_table};
use strategic_solver::nfg::{
    mixed_nash, pure_nash, pure_nash_with, GameAnalysis, PayoffTensor, SolverConfig,
};

fn pure_nash_benchmark(c: &mut Criterion) {
    let Ok(table) = seeded_table(Some(42), &[8, 8, 8], 3) else {
        return;
    };
    let tensor = PayoffTensor::from_table(&table);
    let parallel = SolverConfig::default().with_parallel(true);

    c.bench_function("pure_nash_8x8x8", |b| {
        b.iter(|| pure_nash(black_box(&tensor)))
    });
    c.bench_function("pure_nash_8x8x8_parallel", |b| {
        b.iter(|| pure_nash_with(black_box(&tensor), &parallel))
    });
}

fn mixed_benchmark(c: &mut Criterion) {
    let tensor = PayoffTensor::from_table(&classic::rock_paper_scissors());
    let config = SolverConfig::default();

    c.bench_function("mixed_nash_3x3", |b| {
        b.iter(|| mixed_nash(black_box(&tensor), &config))
    });
}

fn full_analysis_benchmark(c: &mut Criterion) {
    let Ok(table) = seeded_table(Some(7), &[3, 3], 5) else {
        return;
    };
    let config = SolverConfig::default();

    c.bench_function("analysis_3x3", |b| {
        b.iter(|| GameAnalysis::run(black_box(&table), &config))
    });
}

criterion_group!(benches, pure_nash_benchmark, mixed_benchmark, full_analysis_benchmark);
criterion_main!(benches);
