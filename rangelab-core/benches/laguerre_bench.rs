//! Criterion benchmarks for the RangeLab hot paths.
//!
//! Benchmarks:
//! 1. Single ALF pass over growing bar counts
//! 2. Ten-alpha parallel sweep vs. sequential passes
//! 3. Volume-Stops detection

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use rangelab_core::domain::Bar;
use rangelab_core::indicators::{laguerre_sweep, Indicator, Laguerre};
use rangelab_core::signals::VolumeStops;

fn make_bars(n: usize) -> Vec<Bar> {
    let base = chrono::NaiveDate::from_ymd_opt(2024, 1, 9)
        .unwrap()
        .and_hms_opt(10, 0, 2)
        .unwrap();
    (0..n)
        .map(|i| {
            let close = 100_000.0 + (i as f64 * 0.1).sin() * 500.0;
            let open = close - 30.0;
            Bar {
                datetime: base + chrono::Duration::seconds(i as i64 * 90),
                open,
                high: open.max(close) + 150.0,
                low: open.min(close) - 150.0,
                close,
                volume: 1_000.0 + (i % 97) as f64 * 13.0,
                size: Some((close - open).abs()),
            }
        })
        .collect()
}

fn bench_laguerre_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("laguerre_single");
    for n in [1_000, 10_000, 100_000] {
        let bars = make_bars(n);
        let alf = Laguerre::new(0.4);
        group.bench_with_input(BenchmarkId::from_parameter(n), &bars, |b, bars| {
            b.iter(|| black_box(alf.compute(bars)));
        });
    }
    group.finish();
}

fn bench_laguerre_sweep(c: &mut Criterion) {
    let bars = make_bars(50_000);
    let alphas: Vec<f64> = (30..40).map(|a| f64::from(a) / 100.0).collect();

    let mut group = c.benchmark_group("laguerre_sweep_10_alphas");
    group.bench_function("parallel", |b| {
        b.iter(|| black_box(laguerre_sweep(&bars, &alphas)));
    });
    group.bench_function("sequential", |b| {
        b.iter(|| {
            let out: Vec<(f64, Vec<f64>)> = alphas
                .iter()
                .map(|&alpha| (alpha, Laguerre::new(alpha).compute(&bars)))
                .collect();
            black_box(out)
        });
    });
    group.finish();
}

fn bench_volume_stops(c: &mut Criterion) {
    let bars = make_bars(50_000);
    let detector = VolumeStops::default();
    c.bench_function("volume_stops_50k", |b| {
        b.iter(|| black_box(detector.detect(&bars)));
    });
}

criterion_group!(
    benches,
    bench_laguerre_single,
    bench_laguerre_sweep,
    bench_volume_stops
);
criterion_main!(benches);
