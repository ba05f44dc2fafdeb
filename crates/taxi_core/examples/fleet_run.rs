//! Run an hour of fleet simulation and print the resulting counters.
//!
//! Run with: cargo run -p taxi_core --example fleet_run

use bevy_ecs::prelude::World;
use taxi_core::runner::{run_ticks_with_hook, tick_schedule};
use taxi_core::scenario::{build_scenario, ScenarioParams};
use taxi_core::telemetry::{SimSnapshots, SimTelemetry};

fn main() {
    const NUM_VEHICLES: usize = 50;
    const REQUESTS_PER_TICK: u32 = 3;
    const TICKS: u64 = 360; // one hour at 10 s per tick

    let mut world = World::new();
    build_scenario(
        &mut world,
        ScenarioParams::default()
            .with_num_vehicles(NUM_VEHICLES)
            .with_requests_per_tick(REQUESTS_PER_TICK)
            .with_seed(123),
    );
    let mut schedule = tick_schedule();
    run_ticks_with_hook(&mut world, &mut schedule, TICKS, |world, tick| {
        if tick % 60 == 0 {
            let telemetry = world.resource::<SimTelemetry>();
            println!(
                "tick {:>4}: {} completed, {} ended early",
                tick, telemetry.trips_completed, telemetry.trips_ended_early
            );
        }
    });

    let telemetry = world.resource::<SimTelemetry>();
    println!(
        "--- Fleet run ({} taxis, {} requests/tick, {} ticks, seed 123) ---",
        NUM_VEHICLES, REQUESTS_PER_TICK, TICKS
    );
    println!("Requests created:  {}", telemetry.requests_created);
    println!("Requests assigned: {}", telemetry.requests_assigned);
    println!("Pickups reached:   {}", telemetry.pickups_reached);
    println!("Trips completed:   {}", telemetry.trips_completed);
    println!("Trips ended early: {}", telemetry.trips_ended_early);

    if let Some(snapshot) = world.resource::<SimSnapshots>().latest.as_ref() {
        println!("\nQueue depth after {} ticks: {}", TICKS, snapshot.pending.len());
        println!("Sample fleet state (first 10 taxis):");
        for vehicle in snapshot.vehicles.iter().take(10) {
            println!(
                "  {}: {:.1}Km, {:.1}Km ({})",
                vehicle.id,
                vehicle.position.x as f64 / 1000.0,
                vehicle.position.y as f64 / 1000.0,
                vehicle.state,
            );
        }
    }
}
