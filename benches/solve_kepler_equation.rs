use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use heliopos::kepler::solve_keplers_equation;

/// Uniform random mean anomaly in [-π, π)
#[inline]
fn rand_mean_anomaly(rng: &mut StdRng) -> f64 {
    rng.random::<f64>() * std::f64::consts::TAU - std::f64::consts::PI
}

/// Planetary regime: e ∈ [0.0, 0.21], covering all eight major planets
/// (Mercury tops out at e ≈ 0.2056).
fn bench_planetary(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let samples = 10_000usize;

    c.bench_function("solve_keplers_equation/planetary_e<=0.21", |b| {
        b.iter_batched(
            || {
                // Pre-generate inputs to avoid RNG cost in the timed section
                (0..samples)
                    .map(|_| (rand_mean_anomaly(&mut rng), rng.random_range(0.0..=0.21)))
                    .collect::<Vec<_>>()
            },
            |cases| {
                // Benchmark only the solver calls
                for (mean_anomaly, eccentricity) in cases {
                    let ecc_anom =
                        solve_keplers_equation(black_box(mean_anomaly), black_box(eccentricity))
                            .unwrap();
                    black_box(ecc_anom);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// High-eccentricity (still elliptic): e ∈ [0.21, 0.7]
fn bench_high_e(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xBADF00D);
    let samples = 10_000usize;

    c.bench_function("solve_keplers_equation/high_e_0.21..0.7", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| (rand_mean_anomaly(&mut rng), rng.random_range(0.21..0.7)))
                    .collect::<Vec<_>>()
            },
            |cases| {
                for (mean_anomaly, eccentricity) in cases {
                    let _ =
                        solve_keplers_equation(black_box(mean_anomaly), black_box(eccentricity));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Near-circular regime: e ≈ 1e-12
fn bench_near_circular(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xFEEDFACE);
    let samples = 10_000usize;
    let eccentricity = 1e-12;

    c.bench_function("solve_keplers_equation/near_circular_e=1e-12", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| rand_mean_anomaly(&mut rng))
                    .collect::<Vec<_>>()
            },
            |cases| {
                for mean_anomaly in cases {
                    let ecc_anom =
                        solve_keplers_equation(black_box(mean_anomaly), black_box(eccentricity))
                            .unwrap();
                    black_box(ecc_anom);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Fixed Mercury case, the slowest-converging of the eight planets.
fn bench_fixed_mercury(c: &mut Criterion) {
    let eccentricity = 0.20563593_f64;
    let mean_anomaly = 2.943_686_161_547_664_f64;

    c.bench_function("solve_keplers_equation/fixed_mercury_case", |b| {
        b.iter(|| {
            let ecc_anom =
                solve_keplers_equation(black_box(mean_anomaly), black_box(eccentricity));
            black_box(ecc_anom.ok());
        })
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_planetary, bench_high_e, bench_near_circular, bench_fixed_mercury
);
criterion_main!(benches);
