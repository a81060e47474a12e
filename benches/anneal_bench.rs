//! Criterion benchmarks for the annealing loop.
//!
//! Uses synthetic problems (Sphere function, adjacent inversions) to
//! measure loop overhead independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_anneal::sa::{AnnealConfig, Annealer, CoolingSchedule, Mode};

fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|v| v * v).sum()
}

fn inversions(s: &[usize]) -> f64 {
    s.windows(2).filter(|w| w[0] > w[1]).count() as f64
}

fn bench_continuous(c: &mut Criterion) {
    let mut group = c.benchmark_group("continuous_sphere");
    for &dim in &[2usize, 10, 50] {
        let x0 = vec![1.0; dim];
        let config = AnnealConfig::default()
            .with_step_max(2000)
            .with_temperatures(0.0, 1.0)
            .with_damping(0.5)
            .with_seed(42);

        group.bench_with_input(BenchmarkId::from_parameter(dim), &x0, |b, x0| {
            b.iter(|| Annealer::minimize(sphere, black_box(x0), &config))
        });
    }
    group.finish();
}

fn bench_schedules(c: &mut Criterion) {
    let mut group = c.benchmark_group("schedules");
    let x0 = vec![1.0; 10];
    for cooling in [
        CoolingSchedule::Linear,
        CoolingSchedule::Exponential,
        CoolingSchedule::Logarithmic,
        CoolingSchedule::Quadratic,
    ] {
        let config = AnnealConfig::default()
            .with_cooling(cooling)
            .with_alpha(0.999)
            .with_step_max(2000)
            .with_seed(7);

        group.bench_function(cooling.name(), |b| {
            b.iter(|| Annealer::minimize(sphere, black_box(&x0), &config))
        });
    }
    group.finish();
}

fn bench_combinatorial(c: &mut Criterion) {
    let mut group = c.benchmark_group("combinatorial_inversions");
    for &n in &[10usize, 100] {
        let x0: Vec<usize> = (0..n).rev().collect();
        let config = AnnealConfig::default()
            .with_mode(Mode::Combinatorial)
            .with_step_max(5000)
            .with_temperatures(0.0, 2.0)
            .with_seed(42);

        group.bench_with_input(BenchmarkId::from_parameter(n), &x0, |b, x0| {
            b.iter(|| Annealer::minimize_sequence(inversions, black_box(x0), &config))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_continuous,
    bench_schedules,
    bench_combinatorial
);
criterion_main!(benches);
