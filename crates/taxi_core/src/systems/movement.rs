//! Movement: advances every assigned vehicle by one tick of travel and runs
//! the arrival transitions.
//!
//! Arrival is evaluated both before and after driving: the pre-drive check
//! catches a vehicle already standing on its waypoint (a zero-distance leg)
//! so the drive targets the next leg, and the post-drive check catches a
//! vehicle that just arrived. Each vehicle drives at most once per tick, so
//! reaching the pickup mid-tick does not advance the dropoff leg until the
//! next tick.

use bevy_ecs::prelude::{Commands, Entity, Query, Res, ResMut};

use crate::ecs::{ArrivalOutcome, Assignment, Position, Vehicle};
use crate::scenario::DriveConfig;
use crate::spatial::drive_toward;
use crate::telemetry::SimTelemetry;

pub fn movement_system(
    mut commands: Commands,
    drive: Res<DriveConfig>,
    mut telemetry: ResMut<SimTelemetry>,
    mut vehicles: Query<(Entity, &mut Vehicle, &mut Position, &mut Assignment)>,
) {
    let budget_m = drive.budget_per_tick_m();

    for (entity, mut vehicle, mut position, mut assignment) in vehicles.iter_mut() {
        match vehicle.evaluate_arrival(position.0, &mut assignment) {
            ArrivalOutcome::PickupReached => telemetry.pickups_reached += 1,
            ArrivalOutcome::TripCompleted => {
                commands.entity(entity).remove::<Assignment>();
                telemetry.trips_completed += 1;
                continue;
            }
            ArrivalOutcome::NotArrived => {}
        }

        position.0 = drive_toward(position.0, assignment.waypoint, budget_m);

        match vehicle.evaluate_arrival(position.0, &mut assignment) {
            ArrivalOutcome::PickupReached => telemetry.pickups_reached += 1,
            ArrivalOutcome::TripCompleted => {
                commands.entity(entity).remove::<Assignment>();
                telemetry.trips_completed += 1;
            }
            ArrivalOutcome::NotArrived => {}
        }
    }
}
