use bevy_ecs::prelude::World;

use taxi_core::ecs::{Position, Vehicle, VehicleId};
use taxi_core::spatial::GridPoint;

/// Fleet positions keyed by id, sorted, for before/after comparisons.
pub fn fleet_positions(world: &mut World) -> Vec<(VehicleId, GridPoint)> {
    let mut positions: Vec<(VehicleId, GridPoint)> = world
        .query::<(&Vehicle, &Position)>()
        .iter(world)
        .map(|(vehicle, position)| (vehicle.id, position.0))
        .collect();
    positions.sort_by_key(|(id, _)| *id);
    positions
}
