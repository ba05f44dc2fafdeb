//! Shared test utilities: minimal worlds and hand-placed vehicles.
//!
//! Enabled through the default `test-helpers` feature so integration tests
//! and benches can use them too.

use bevy_ecs::prelude::{Entity, World};

use crate::ecs::{Assignment, Position, RideRequest, Vehicle, VehicleId, VehicleState};
use crate::matching::PendingRequests;
use crate::scenario::{build_scenario, ScenarioParams};
use crate::spatial::GridPoint;

/// A world with every simulation resource but an empty fleet, no random
/// request traffic and no early dropoffs. Tests place vehicles and requests
/// by hand.
pub fn create_test_world() -> World {
    create_test_world_with(|params| params)
}

/// Like [`create_test_world`], with a hook to adjust the quiet baseline
/// parameters (e.g. re-enable early dropoffs).
pub fn create_test_world_with<F>(adjust: F) -> World
where
    F: FnOnce(ScenarioParams) -> ScenarioParams,
{
    let params = ScenarioParams::default()
        .with_num_vehicles(0)
        .with_requests_per_tick(0)
        .with_early_dropoff_probability(0.0)
        .with_seed(1);
    let mut world = World::new();
    build_scenario(&mut world, adjust(params));
    world
}

pub fn request(pickup_x: i64, pickup_y: i64, dropoff_x: i64, dropoff_y: i64) -> RideRequest {
    RideRequest {
        pickup: GridPoint::new(pickup_x, pickup_y),
        dropoff: GridPoint::new(dropoff_x, dropoff_y),
    }
}

pub fn push_request(world: &mut World, request: RideRequest) {
    world.resource_mut::<PendingRequests>().0.push_back(request);
}

pub fn spawn_idle_vehicle(world: &mut World, id: u32, at: GridPoint) -> Entity {
    world
        .spawn((Vehicle::new(VehicleId(id)), Position(at)))
        .id()
}

/// Spawns a vehicle that has already accepted `request` and is en route to
/// its pickup.
pub fn spawn_en_route_vehicle(
    world: &mut World,
    id: u32,
    at: GridPoint,
    request: RideRequest,
) -> Entity {
    let mut vehicle = Vehicle::new(VehicleId(id));
    let assignment = vehicle.assign(&request);
    world.spawn((vehicle, Position(at), assignment)).id()
}

/// Asserts the fleet state-machine invariant: a vehicle is idle exactly when
/// it has no assignment.
pub fn assert_fleet_invariants(world: &mut World) {
    let mut query = world.query::<(&Vehicle, Option<&Assignment>)>();
    for (vehicle, assignment) in query.iter(world) {
        match vehicle.state {
            VehicleState::Idle => assert!(
                assignment.is_none(),
                "{} is idle but still carries an assignment",
                vehicle.id
            ),
            VehicleState::EnRouteToPickup | VehicleState::EnRouteToDropoff => assert!(
                assignment.is_some(),
                "{} is on a trip but has no assignment",
                vehicle.id
            ),
        }
    }
}
