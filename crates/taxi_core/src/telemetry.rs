//! Telemetry: lifetime counters plus the per-tick status snapshot handed to
//! the reporting collaborator.
//!
//! The core never renders; it only captures. Whoever drives the simulation
//! (console, test, UI) reads [`SimSnapshots`] or uses the runner hook and
//! formats the data however it likes.

use bevy_ecs::prelude::{Resource, World};
use serde::{Deserialize, Serialize};

use crate::clock::SimulationClock;
use crate::ecs::{Position, RideRequest, Vehicle, VehicleId, VehicleState};
use crate::matching::PendingRequests;
use crate::spatial::GridPoint;

/// Counters accumulated over the whole run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Resource, Serialize, Deserialize)]
pub struct SimTelemetry {
    pub requests_created: u64,
    pub requests_assigned: u64,
    pub pickups_reached: u64,
    pub trips_completed: u64,
    /// Trips cut short by the stochastic early-dropoff sweep. Counted apart
    /// from `trips_completed`: these vehicles went idle away from their
    /// dropoff coordinates.
    pub trips_ended_early: u64,
}

/// One vehicle as reported to the collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleSnapshot {
    pub id: VehicleId,
    pub position: GridPoint,
    pub state: VehicleState,
}

/// The full per-tick status report: queue contents plus fleet positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub tick: u64,
    pub elapsed_secs: u64,
    /// Pending requests in arrival order.
    pub pending: Vec<RideRequest>,
    /// Fleet in `VehicleId` order.
    pub vehicles: Vec<VehicleSnapshot>,
}

/// Holds the most recent snapshot; refreshed once per tick.
#[derive(Debug, Default, Resource)]
pub struct SimSnapshots {
    pub latest: Option<SimSnapshot>,
}

/// Captures the current world state as a [`SimSnapshot`].
///
/// Also usable before the first tick to report the initial fleet layout.
pub fn capture_snapshot(world: &mut World) -> SimSnapshot {
    let tick = world.resource::<SimulationClock>().now();
    let elapsed_secs = world.resource::<SimulationClock>().elapsed_secs();
    let pending: Vec<RideRequest> = world
        .resource::<PendingRequests>()
        .0
        .iter()
        .copied()
        .collect();

    let mut vehicles: Vec<VehicleSnapshot> = world
        .query::<(&Vehicle, &Position)>()
        .iter(world)
        .map(|(vehicle, position)| VehicleSnapshot {
            id: vehicle.id,
            position: position.0,
            state: vehicle.state,
        })
        .collect();
    vehicles.sort_by_key(|snapshot| snapshot.id);

    SimSnapshot {
        tick,
        elapsed_secs,
        pending,
        vehicles,
    }
}
