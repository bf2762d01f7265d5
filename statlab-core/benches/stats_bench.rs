//! Criterion benchmarks for StatLab hot paths.
//!
//! Benchmarks:
//! 1. Order statistics (each call sorts its own copy)
//! 2. Full descriptive summary
//! 3. Mode detection on heavily tied data
//! 4. Sampling-distribution simulation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use statlab_core::config::SimulationConfig;
use statlab_core::{
    five_number_summary, median, mode, simulate, DescriptiveSummary, QuartilePolicy,
};

// ── Helpers ──────────────────────────────────────────────────────────

fn make_heights(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 170.0 + (i as f64 * 0.37).sin() * 12.0 + (i % 7) as f64 * 0.1)
        .collect()
}

// ── Benchmarks ───────────────────────────────────────────────────────

fn bench_order_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_statistics");
    for &n in &[100usize, 1_000, 5_000] {
        let data = make_heights(n);
        group.bench_with_input(BenchmarkId::new("median", n), &data, |b, d| {
            b.iter(|| median(black_box(d)))
        });
        group.bench_with_input(BenchmarkId::new("five_number_summary", n), &data, |b, d| {
            b.iter(|| five_number_summary(black_box(d)))
        });
    }
    group.finish();
}

fn bench_descriptive_summary(c: &mut Criterion) {
    let data = make_heights(1_000);
    c.bench_function("descriptive_summary_1000", |b| {
        b.iter(|| DescriptiveSummary::compute(black_box(&data), QuartilePolicy::Clamp))
    });
}

fn bench_mode(c: &mut Criterion) {
    let data: Vec<f64> = (0..5_000).map(|i| (i % 37) as f64).collect();
    c.bench_function("mode_tied_5000", |b| b.iter(|| mode(black_box(&data))));
}

fn bench_simulation(c: &mut Criterion) {
    let data = make_heights(1_000);
    let config = SimulationConfig {
        sample_count: 200,
        ..SimulationConfig::default()
    };
    c.bench_function("simulate_4_sizes_200_samples", |b| {
        b.iter(|| simulate(black_box(&data), &config))
    });
}

criterion_group!(
    benches,
    bench_order_statistics,
    bench_descriptive_summary,
    bench_mode,
    bench_simulation
);
criterion_main!(benches);
