//! Performance benchmarks for taxi_core using Criterion.rs.

use bevy_ecs::prelude::World;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use taxi_core::runner::{run_ticks, tick_schedule};
use taxi_core::scenario::{build_scenario, ScenarioParams};
use taxi_core::telemetry::SimTelemetry;

fn bench_tick_loop(c: &mut Criterion) {
    // (name, vehicles, requests per tick); 360 ticks = one simulated hour.
    let scenarios = vec![("small", 10, 1), ("medium", 100, 5), ("large", 500, 20)];

    let mut group = c.benchmark_group("tick_loop");
    for (name, vehicles, per_tick) in scenarios {
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(vehicles, per_tick),
            |b, &(vehicles, per_tick)| {
                b.iter(|| {
                    let mut world = World::new();
                    build_scenario(
                        &mut world,
                        ScenarioParams::default()
                            .with_num_vehicles(vehicles)
                            .with_requests_per_tick(per_tick)
                            .with_seed(42),
                    );
                    let mut schedule = tick_schedule();
                    run_ticks(&mut world, &mut schedule, 360);
                    black_box(world.resource::<SimTelemetry>().trips_completed)
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_tick_loop);
criterion_main!(benches);
