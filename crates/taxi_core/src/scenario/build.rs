use bevy_ecs::prelude::World;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::clock::SimulationClock;
use crate::ecs::{Position, Vehicle, VehicleId};
use crate::matching::PendingRequests;
use crate::scenario::params::{
    DriveConfig, EarlyDropoffConfig, GridConfig, RequestSpawnerConfig, ScenarioParams, SimRng,
};
use crate::spatial::GridBounds;
use crate::telemetry::{SimSnapshots, SimTelemetry};

/// Builds a simulation world from `params`: inserts every resource the tick
/// schedule needs and spawns the fleet, idle, at seeded random positions.
///
/// Vehicle ids start at 1 and are assigned in spawn order, which is also the
/// order every deterministic sweep uses.
pub fn build_scenario(world: &mut World, params: ScenarioParams) {
    let bounds = GridBounds::new(params.grid_extent_m);
    let mut rng = StdRng::seed_from_u64(params.seed);

    world.insert_resource(SimulationClock::new(params.tick_secs));
    world.insert_resource(GridConfig { bounds });
    world.insert_resource(DriveConfig {
        speed_mps: params.speed_mps,
        tick_secs: params.tick_secs,
    });
    world.insert_resource(RequestSpawnerConfig {
        per_tick: params.requests_per_tick,
        max_trip_offset_m: params.max_trip_offset_m,
    });
    world.insert_resource(EarlyDropoffConfig {
        probability: params.early_dropoff_probability,
    });
    world.insert_resource(PendingRequests::default());
    world.insert_resource(SimTelemetry::default());
    world.insert_resource(SimSnapshots::default());

    for i in 0..params.num_vehicles {
        let position = bounds.random_point(&mut rng);
        world.spawn((
            Vehicle::new(VehicleId(i as u32 + 1)),
            Position(position),
        ));
    }

    world.insert_resource(SimRng(rng));
}
