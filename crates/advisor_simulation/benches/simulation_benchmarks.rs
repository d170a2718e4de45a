//! Benchmarks for the Monte Carlo path loop.
//!
//! The simulation inner loop is the dominant cost centre of the
//! workspace; these benches track its throughput across path counts and
//! horizons.

use advisor_simulation::{GoalSimulator, SimulationConfig};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn config(num_simulations: usize, years: f64) -> SimulationConfig {
    SimulationConfig::builder()
        .current_amount(50_000.0)
        .target_amount(500_000.0)
        .monthly_contribution(1_000.0)
        .years_until_target(years)
        .num_simulations(num_simulations)
        .seed(42)
        .build()
        .unwrap()
}

fn bench_path_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("goal_simulation/paths");
    for n in [1_000, 10_000, 50_000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let simulator = GoalSimulator::new(config(n, 20.0)).unwrap();
            b.iter(|| simulator.run());
        });
    }
    group.finish();
}

fn bench_horizons(c: &mut Criterion) {
    let mut group = c.benchmark_group("goal_simulation/horizon_years");
    for years in [5.0, 20.0, 40.0] {
        group.bench_with_input(
            BenchmarkId::from_parameter(years),
            &years,
            |b, &years| {
                let simulator = GoalSimulator::new(config(10_000, years)).unwrap();
                b.iter(|| simulator.run());
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_path_counts, bench_horizons);
criterion_main!(benches);
