//! Allocation: greedy queue-order matching of pending requests to the
//! nearest idle vehicles.

use bevy_ecs::prelude::{Commands, Entity, Query, ResMut};

use crate::ecs::{Position, RideRequest, Vehicle, VehicleState};
use crate::matching::{find_nearest_idle, IdleCandidate, PendingRequests};
use crate::telemetry::SimTelemetry;

/// Walks the pending queue in arrival order; each request that finds an idle
/// vehicle is assigned to the nearest one and leaves the queue, consuming
/// that vehicle for the rest of the pass. Requests with no match are kept,
/// in order, for a later tick.
pub fn allocation_system(
    mut commands: Commands,
    mut pending: ResMut<PendingRequests>,
    mut telemetry: ResMut<SimTelemetry>,
    mut vehicles: Query<(Entity, &mut Vehicle, &Position)>,
) {
    if pending.is_empty() {
        return;
    }

    // Candidates sorted by id so the nearest-search tie-break is stable.
    let mut idle: Vec<IdleCandidate> = vehicles
        .iter()
        .filter(|(_, vehicle, _)| vehicle.state == VehicleState::Idle)
        .map(|(entity, vehicle, position)| IdleCandidate {
            entity,
            id: vehicle.id,
            position: position.0,
        })
        .collect();
    idle.sort_by_key(|candidate| candidate.id);

    let queued: Vec<RideRequest> = pending.0.drain(..).collect();
    for request in queued {
        match find_nearest_idle(request.pickup, &idle) {
            Some(index) => {
                let candidate = idle.remove(index);
                let Ok((entity, mut vehicle, _)) = vehicles.get_mut(candidate.entity) else {
                    continue;
                };
                let assignment = vehicle.assign(&request);
                commands.entity(entity).insert(assignment);
                telemetry.requests_assigned += 1;
            }
            None => pending.0.push_back(request),
        }
    }
}
