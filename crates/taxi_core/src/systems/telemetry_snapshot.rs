//! Snapshot capture: records the per-tick status report.
//!
//! Runs last in the tick schedule, as an exclusive system, so it sees the
//! tick's final state with all deferred component changes applied.

use bevy_ecs::prelude::World;

use crate::telemetry::{capture_snapshot, SimSnapshots};

pub fn telemetry_snapshot_system(world: &mut World) {
    let snapshot = capture_snapshot(world);
    world.resource_mut::<SimSnapshots>().latest = Some(snapshot);
}
