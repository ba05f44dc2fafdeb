mod support;

use support::fleet_positions;
use taxi_core::ecs::VehicleState;
use taxi_core::matching::PendingRequests;
use taxi_core::runner::{run_tick, tick_schedule};
use taxi_core::spatial::GridPoint;
use taxi_core::telemetry::{capture_snapshot, SimTelemetry};
use taxi_core::test_helpers::{
    create_test_world, create_test_world_with, push_request, request, spawn_idle_vehicle,
};

#[test]
fn queued_request_is_served_once_the_fleet_frees_up() {
    let mut world = create_test_world();
    spawn_idle_vehicle(&mut world, 1, GridPoint::new(0, 0));
    // First trip: board on the spot, drive 800 m east over two ticks.
    push_request(&mut world, request(0, 0, 800, 0));
    // Second request has to wait for the only taxi.
    push_request(&mut world, request(800, 0, 1000, 0));
    let mut schedule = tick_schedule();

    run_tick(&mut world, &mut schedule);
    assert_eq!(world.resource::<PendingRequests>().len(), 1);

    run_tick(&mut world, &mut schedule);
    // First trip done at (800, 0); the second is still queued this tick.
    assert_eq!(world.resource::<SimTelemetry>().trips_completed, 1);
    assert_eq!(world.resource::<PendingRequests>().len(), 1);
    assert_eq!(fleet_positions(&mut world)[0].1, GridPoint::new(800, 0));

    run_tick(&mut world, &mut schedule);
    // Third tick: the taxi stands on the second pickup, so it boards and
    // covers the 200 m to the dropoff within the same tick.
    assert!(world.resource::<PendingRequests>().is_empty());
    assert_eq!(world.resource::<SimTelemetry>().trips_completed, 2);
    assert_eq!(fleet_positions(&mut world)[0].1, GridPoint::new(1000, 0));
}

#[test]
fn early_dropoff_frees_the_taxi_for_the_backlog() {
    let mut world =
        create_test_world_with(|params| params.with_early_dropoff_probability(1.0));
    spawn_idle_vehicle(&mut world, 1, GridPoint::new(0, 0));
    // A trip far too long to finish in one tick.
    push_request(&mut world, request(0, 0, 10_000, 10_000));
    push_request(&mut world, request(400, 0, 500, 0));
    let mut schedule = tick_schedule();

    // Tick 1: board at (0,0), drive 400 m, then the certain early-dropoff
    // sweep ends the trip in place.
    run_tick(&mut world, &mut schedule);
    let snapshot = capture_snapshot(&mut world);
    assert_eq!(snapshot.vehicles[0].state, VehicleState::Idle);
    assert_eq!(snapshot.vehicles[0].position, GridPoint::new(400, 0));
    assert_eq!(world.resource::<SimTelemetry>().trips_ended_early, 1);
    assert_eq!(world.resource::<SimTelemetry>().trips_completed, 0);

    // Tick 2: the freed taxi already stands on the second pickup.
    run_tick(&mut world, &mut schedule);
    assert!(world.resource::<PendingRequests>().is_empty());
    assert_eq!(world.resource::<SimTelemetry>().trips_completed, 1);
    assert_eq!(fleet_positions(&mut world)[0].1, GridPoint::new(500, 0));
}

#[test]
fn snapshots_report_the_queue_in_arrival_order() {
    let mut world = create_test_world();
    // No vehicles at all: everything stays queued.
    let first = request(1, 1, 2, 2);
    let second = request(3, 3, 4, 4);
    push_request(&mut world, first);
    push_request(&mut world, second);
    let mut schedule = tick_schedule();

    run_tick(&mut world, &mut schedule);
    let snapshot = capture_snapshot(&mut world);
    assert_eq!(snapshot.pending, vec![first, second]);
}
