// -------------------------------------------------------------------------
// SCPN Fusion Core -- Neutron Source Sampling Benchmark
// Profile construction across bin counts, single-event sampling on the
// linear-scan and binary-search paths, and parallel batch generation.
// -------------------------------------------------------------------------

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use plasma_source::profile::PlasmaProfile;
use plasma_source::source::PlasmaSource;
use plasma_types::config::PlasmaConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

/// ITER-like plasma so benchmarks do not depend on external JSON files.
fn make_config(bins: usize) -> PlasmaConfig {
    PlasmaConfig {
        major_radius: 9.06,
        minor_radius: 2.92258,
        elongation: 1.557,
        triangularity: 0.27,
        shafranov_shift: 0.44789,
        pedestal_radius: 2.338064,
        number_of_bins: bins,
        ..PlasmaConfig::default()
    }
}

fn bench_profile_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("profile_build");
    for &bins in &[100usize, 1_000, 10_000] {
        let config = make_config(bins);
        group.bench_with_input(BenchmarkId::from_parameter(bins), &config, |b, cfg| {
            b.iter(|| black_box(PlasmaProfile::build(cfg).unwrap()))
        });
    }
    group.finish();
}

fn bench_single_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_single");
    // 100 bins scans linearly, 1000 bins goes through the binary search
    for &bins in &[100usize, 1_000] {
        let source = PlasmaSource::new(make_config(bins)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(bins), &source, |b, src| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| black_box(src.sample_with_rng(&mut rng).unwrap()))
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_batch");
    group.sample_size(20);
    let source = PlasmaSource::new(make_config(100)).unwrap();
    for &n in &[10_000usize, 100_000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(source.sample_batch(n, 7).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_profile_build, bench_single_sample, bench_batch);
criterion_main!(benches);
