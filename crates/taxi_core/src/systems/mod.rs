pub mod allocation;
pub mod early_dropoff;
pub mod movement;
pub mod request_spawner;
pub mod telemetry_snapshot;

#[cfg(test)]
mod end_to_end_tests {
    use bevy_ecs::prelude::World;

    use crate::ecs::{Position, RideRequest, Vehicle, VehicleState};
    use crate::matching::PendingRequests;
    use crate::runner::{run_ticks, tick_schedule};
    use crate::scenario::{build_scenario, ScenarioParams};
    use crate::spatial::GridPoint;
    use crate::telemetry::SimTelemetry;

    #[test]
    fn hand_fed_request_is_served_end_to_end() {
        let mut world = World::new();
        // No random requests and no early dropoffs: only the hand-fed trip.
        let params = ScenarioParams::default()
            .with_num_vehicles(1)
            .with_requests_per_tick(0)
            .with_early_dropoff_probability(0.0)
            .with_seed(5);
        build_scenario(&mut world, params);

        let pickup = {
            let mut query = world.query::<&Position>();
            query.single(&world).0
        };
        let dropoff = GridPoint::new(
            (pickup.x + 1_000).min(20_000),
            (pickup.y + 1_000).min(20_000),
        );
        world
            .resource_mut::<PendingRequests>()
            .0
            .push_back(RideRequest { pickup, dropoff });

        let mut schedule = tick_schedule();
        // Pickup is the spawn point; <= 2 km of driving at 400 m per tick.
        run_ticks(&mut world, &mut schedule, 10);

        let (vehicle, position) = {
            let mut query = world.query::<(&Vehicle, &Position)>();
            let (vehicle, position) = query.single(&world);
            (*vehicle, *position)
        };
        assert_eq!(vehicle.state, VehicleState::Idle);
        assert_eq!(position.0, dropoff);

        let telemetry = world.resource::<SimTelemetry>();
        assert_eq!(telemetry.requests_assigned, 1);
        assert_eq!(telemetry.pickups_reached, 1);
        assert_eq!(telemetry.trips_completed, 1);
        assert_eq!(telemetry.trips_ended_early, 0);
        assert!(world.resource::<PendingRequests>().is_empty());
    }
}
