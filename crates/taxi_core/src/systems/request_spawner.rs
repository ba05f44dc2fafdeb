//! Request spawner: appends freshly generated ride requests each tick.

use bevy_ecs::prelude::{Res, ResMut};

use crate::ecs::RideRequest;
use crate::matching::PendingRequests;
use crate::scenario::{GridConfig, RequestSpawnerConfig, SimRng};
use crate::telemetry::SimTelemetry;

/// Generates `per_tick` requests: pickup uniform within the grid, dropoff a
/// bounded random offset from the pickup, clamped back into the grid.
pub fn request_spawner_system(
    grid: Res<GridConfig>,
    config: Res<RequestSpawnerConfig>,
    mut rng: ResMut<SimRng>,
    mut pending: ResMut<PendingRequests>,
    mut telemetry: ResMut<SimTelemetry>,
) {
    for _ in 0..config.per_tick {
        let pickup = grid.bounds.random_point(&mut rng.0);
        let dropoff = grid
            .bounds
            .random_offset_point(&mut rng.0, pickup, config.max_trip_offset_m);
        pending.0.push_back(RideRequest { pickup, dropoff });
        telemetry.requests_created += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::prelude::{Schedule, World};

    use crate::scenario::{build_scenario, ScenarioParams};

    fn spawn_world(seed: u64, per_tick: u32) -> World {
        let mut world = World::new();
        let params = ScenarioParams::default()
            .with_num_vehicles(0)
            .with_requests_per_tick(per_tick)
            .with_seed(seed);
        build_scenario(&mut world, params);
        world
    }

    #[test]
    fn spawns_the_configured_number_of_requests() {
        let mut world = spawn_world(1, 3);
        let mut schedule = Schedule::default();
        schedule.add_systems(request_spawner_system);
        schedule.run(&mut world);
        schedule.run(&mut world);

        assert_eq!(world.resource::<PendingRequests>().len(), 6);
        assert_eq!(world.resource::<SimTelemetry>().requests_created, 6);
    }

    #[test]
    fn generated_requests_stay_within_the_grid() {
        let mut world = spawn_world(2, 50);
        let mut schedule = Schedule::default();
        schedule.add_systems(request_spawner_system);
        schedule.run(&mut world);

        let bounds = world.resource::<GridConfig>().bounds;
        let offset = world.resource::<RequestSpawnerConfig>().max_trip_offset_m;
        for request in &world.resource::<PendingRequests>().0 {
            assert!(bounds.contains(request.pickup));
            assert!(bounds.contains(request.dropoff));
            assert!((request.dropoff.x - request.pickup.x).abs() <= offset);
            assert!((request.dropoff.y - request.pickup.y).abs() <= offset);
        }
    }

    #[test]
    fn same_seed_spawns_the_same_requests() {
        let run = |seed: u64| {
            let mut world = spawn_world(seed, 10);
            let mut schedule = Schedule::default();
            schedule.add_systems(request_spawner_system);
            schedule.run(&mut world);
            world
                .resource::<PendingRequests>()
                .0
                .iter()
                .copied()
                .collect::<Vec<_>>()
        };
        assert_eq!(run(7), run(7));
        assert_ne!(run(7), run(8));
    }
}
