//! Benchmarks for pricing and yield solving.
//!
//! Run with: cargo bench -p bondlab-bonds

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use bondlab_bonds::curve::SpotCurve;
use bondlab_bonds::presets::SLIDE_20;
use bondlab_bonds::{BondSpec, YieldSolver};

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn upward_curve(periods: usize) -> SpotCurve {
    let rates = (0..periods)
        .map(|i| 0.03 + 0.02 * (i as f64 / periods as f64))
        .collect();
    SpotCurve::new(rates).expect("valid curve")
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_spot_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("spot_pricing");

    let curve = SLIDE_20.curve().expect("preset curve");
    let bond = SLIDE_20.bond(100.0).expect("preset bond");
    group.bench_function("slide20", |b| {
        b.iter(|| bond.price_with_curve(black_box(&curve)))
    });

    for years in [2.0, 10.0, 30.0] {
        let bond = BondSpec::new(0.045, years, 100.0).expect("valid bond");
        let curve = upward_curve(bond.periods() as usize);
        group.bench_with_input(BenchmarkId::new("maturity", years), &years, |b, _| {
            b.iter(|| bond.price_with_curve(black_box(&curve)))
        });
    }

    group.finish();
}

fn bench_yield_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("yield_solver");
    let solver = YieldSolver::new();

    for years in [2.0, 10.0, 30.0] {
        let bond = BondSpec::new(0.045, years, 100.0).expect("valid bond");
        group.bench_with_input(BenchmarkId::new("discount_bond", years), &years, |b, _| {
            b.iter(|| solver.solve(&bond, black_box(95.0)))
        });
    }

    let zero = BondSpec::new(0.0, 30.0, 100.0).expect("valid bond");
    group.bench_function("zero_coupon_30y", |b| {
        b.iter(|| solver.solve(&zero, black_box(25.0)))
    });

    group.finish();
}

criterion_group!(benches, bench_spot_pricing, bench_yield_solver);
criterion_main!(benches);
