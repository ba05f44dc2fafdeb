//! Tick runner: builds the per-tick schedule and advances the simulation.
//!
//! One tick runs to completion before the next begins: request generation,
//! allocation, movement, the early-dropoff sweep, then snapshot capture,
//! with deferred component changes applied between phases. The whole loop is
//! single-threaded; the only blocking point a caller may add is its own
//! inter-tick delay.

use bevy_ecs::prelude::{Schedule, World};
use bevy_ecs::schedule::{apply_deferred, IntoSystemConfigs};

use crate::clock::SimulationClock;
use crate::systems::{
    allocation::allocation_system, early_dropoff::early_dropoff_system,
    movement::movement_system, request_spawner::request_spawner_system,
    telemetry_snapshot::telemetry_snapshot_system,
};

/// Builds the tick schedule. Phases are chained in tick order;
/// [`apply_deferred`] between them makes fresh assignments visible to
/// movement and removed assignments visible to the sweep and the snapshot.
pub fn tick_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            request_spawner_system,
            allocation_system,
            apply_deferred,
            movement_system,
            apply_deferred,
            early_dropoff_system,
            apply_deferred,
            telemetry_snapshot_system,
        )
            .chain(),
    );
    schedule
}

/// Advances the clock by one tick and runs the schedule. Returns the number
/// of the tick that just executed.
pub fn run_tick(world: &mut World, schedule: &mut Schedule) -> u64 {
    let tick = world.resource_mut::<SimulationClock>().advance();
    schedule.run(world);
    tick
}

/// Runs `ticks` ticks back to back.
pub fn run_ticks(world: &mut World, schedule: &mut Schedule, ticks: u64) {
    for _ in 0..ticks {
        run_tick(world, schedule);
    }
}

/// Runs `ticks` ticks, invoking `hook` after each completed tick.
///
/// The hook is the reporting seam: it sees the world at a tick boundary with
/// every deferred change applied, and the core makes no assumption about
/// what it does with the state.
pub fn run_ticks_with_hook<F>(world: &mut World, schedule: &mut Schedule, ticks: u64, mut hook: F)
where
    F: FnMut(&mut World, u64),
{
    for _ in 0..ticks {
        let tick = run_tick(world, schedule);
        hook(world, tick);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::scenario::{build_scenario, ScenarioParams};
    use crate::telemetry::{SimSnapshots, SimTelemetry};

    #[test]
    fn run_tick_advances_the_clock_and_captures_a_snapshot() {
        let mut world = World::new();
        build_scenario(&mut world, ScenarioParams::default().with_seed(1));
        let mut schedule = tick_schedule();

        assert_eq!(run_tick(&mut world, &mut schedule), 1);
        assert_eq!(run_tick(&mut world, &mut schedule), 2);
        assert_eq!(world.resource::<SimulationClock>().now(), 2);

        let snapshots = world.resource::<SimSnapshots>();
        let snapshot = snapshots.latest.as_ref().expect("snapshot");
        assert_eq!(snapshot.tick, 2);
        assert_eq!(snapshot.vehicles.len(), 10);
    }

    #[test]
    fn hook_fires_once_per_tick_in_order() {
        let mut world = World::new();
        build_scenario(&mut world, ScenarioParams::default().with_seed(1));
        let mut schedule = tick_schedule();

        let mut seen = Vec::new();
        run_ticks_with_hook(&mut world, &mut schedule, 5, |_, tick| seen.push(tick));
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn each_tick_creates_the_configured_requests() {
        let mut world = World::new();
        build_scenario(
            &mut world,
            ScenarioParams::default().with_requests_per_tick(2).with_seed(1),
        );
        let mut schedule = tick_schedule();

        run_ticks(&mut world, &mut schedule, 10);
        assert_eq!(world.resource::<SimTelemetry>().requests_created, 20);
    }
}
