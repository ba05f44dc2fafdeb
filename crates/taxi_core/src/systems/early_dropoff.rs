//! Early dropoff: a flat per-tick coin flip that ends trips in progress.
//!
//! Every vehicle currently en route to its dropoff has the same fixed chance
//! of the trip ending this tick, independent of where it is. The vehicle
//! goes idle in place; its position is not snapped to the dropoff, so an
//! abandoned trip "completes" away from its destination. That is a known
//! modeling shortcut of the original design and is kept as-is.

use bevy_ecs::prelude::{Commands, Entity, Query, Res, ResMut, With};
use rand::Rng;

use crate::ecs::{Assignment, Vehicle, VehicleId, VehicleState};
use crate::scenario::{EarlyDropoffConfig, SimRng};
use crate::telemetry::SimTelemetry;

pub fn early_dropoff_system(
    mut commands: Commands,
    config: Res<EarlyDropoffConfig>,
    mut rng: ResMut<SimRng>,
    mut telemetry: ResMut<SimTelemetry>,
    mut vehicles: Query<(Entity, &mut Vehicle), With<Assignment>>,
) {
    // Draw in id order so a seed determines exactly which trips end.
    let mut en_route: Vec<(Entity, VehicleId)> = vehicles
        .iter()
        .filter(|(_, vehicle)| vehicle.state == VehicleState::EnRouteToDropoff)
        .map(|(entity, vehicle)| (entity, vehicle.id))
        .collect();
    en_route.sort_by_key(|(_, id)| *id);

    for (entity, _) in en_route {
        if !rng.0.gen_bool(config.probability) {
            continue;
        }
        let Ok((entity, mut vehicle)) = vehicles.get_mut(entity) else {
            continue;
        };
        vehicle.end_trip_early();
        commands.entity(entity).remove::<Assignment>();
        telemetry.trips_ended_early += 1;
    }
}
