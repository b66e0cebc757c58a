use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{Duration, Utc};
use shopfloor_spc::{MeasurementSample, SpecificationLimits, analyze};

/// Deterministic pseudo-noisy window around 10.0 (no RNG dependency).
fn window(n: usize) -> Vec<MeasurementSample> {
    let base = Utc::now();
    (0..n)
        .map(|i| {
            let noise = ((i * 37) % 17) as f64 - 8.0;
            MeasurementSample::new(10.0 + noise / 40.0, base + Duration::seconds(i as i64))
        })
        .collect()
}

fn bench_analyze(c: &mut Criterion) {
    let limits = SpecificationLimits::two_sided(11.0, 9.0).unwrap();

    let mut group = c.benchmark_group("spc_analyze");
    for &n in &[20usize, 100, 1000] {
        let samples = window(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &samples, |b, samples| {
            b.iter(|| analyze(black_box(samples), Some(&limits)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_analyze);
criterion_main!(benches);
