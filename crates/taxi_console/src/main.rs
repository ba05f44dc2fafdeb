//! Console front-end: builds a scenario from CLI arguments, runs the tick
//! loop at a fixed wall-clock cadence and renders each tick's status.
//!
//! The simulation core stays silent; this binary is the reporting
//! collaborator. Ctrl-C stops the loop between ticks, never mid-tick.

mod render;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use bevy_ecs::prelude::World;
use clap::Parser;
use tracing::{info, warn, Level};

use taxi_core::clock::SimulationClock;
use taxi_core::runner::{run_tick, tick_schedule};
use taxi_core::scenario::{build_scenario, ScenarioParams};
use taxi_core::telemetry::{capture_snapshot, SimSnapshot, SimSnapshots, SimTelemetry};

#[derive(Debug, Parser)]
#[command(name = "taxi_console", about = "Taxi fleet simulation on a bounded grid")]
struct Args {
    /// Fleet size.
    #[arg(long, default_value_t = 10)]
    vehicles: usize,

    /// RNG seed; the same seed replays the same run.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Grid extent in meters (square, both axes).
    #[arg(long, default_value_t = 20_000)]
    grid_extent: i64,

    /// Vehicle speed in meters per second.
    #[arg(long, default_value_t = 40)]
    speed: i64,

    /// Tick duration in seconds (simulated and, unless --fast, wall-clock).
    #[arg(long, default_value_t = 10)]
    tick_secs: u64,

    /// New ride requests per tick.
    #[arg(long, default_value_t = 1)]
    requests_per_tick: u32,

    /// Per-tick chance that a trip en route to dropoff ends early.
    #[arg(long, default_value_t = 0.20)]
    early_dropoff_probability: f64,

    /// Stop after this many ticks; 0 runs until Ctrl-C.
    #[arg(long, default_value_t = 0)]
    ticks: u64,

    /// Do not sleep between ticks.
    #[arg(long)]
    fast: bool,

    /// Emit one JSON snapshot per line instead of formatted text.
    #[arg(long)]
    json: bool,
}

impl Args {
    fn scenario_params(&self) -> ScenarioParams {
        ScenarioParams {
            num_vehicles: self.vehicles,
            grid_extent_m: self.grid_extent,
            speed_mps: self.speed,
            tick_secs: self.tick_secs,
            requests_per_tick: self.requests_per_tick,
            max_trip_offset_m: 2_000,
            early_dropoff_probability: self.early_dropoff_probability,
            seed: self.seed,
        }
    }
}

fn report(snapshot: &SimSnapshot, json: bool) {
    if json {
        match serde_json::to_string(snapshot) {
            Ok(line) => println!("{line}"),
            Err(error) => warn!(%error, "snapshot serialization failed"),
        }
    } else {
        println!("{}", render::render_text(snapshot));
    }
}

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
    let args = Args::parse();

    let running = Arc::new(AtomicBool::new(true));
    {
        let flag = Arc::clone(&running);
        if let Err(error) = ctrlc::set_handler(move || flag.store(false, Ordering::SeqCst)) {
            warn!(%error, "could not install the Ctrl-C handler; use --ticks to stop");
        }
    }

    let mut world = World::new();
    build_scenario(&mut world, args.scenario_params());
    let mut schedule = tick_schedule();
    info!(
        vehicles = args.vehicles,
        seed = args.seed,
        tick_secs = args.tick_secs,
        "starting simulation"
    );

    // Initial fleet layout, before any tick runs.
    report(&capture_snapshot(&mut world), args.json);

    let tick_wait = Duration::from_secs(args.tick_secs);
    while running.load(Ordering::SeqCst) {
        if args.ticks > 0 && world.resource::<SimulationClock>().now() >= args.ticks {
            break;
        }
        if !args.fast {
            thread::sleep(tick_wait);
        }
        // Re-check after the sleep so an interrupt never cuts into a tick.
        if !running.load(Ordering::SeqCst) {
            break;
        }
        run_tick(&mut world, &mut schedule);
        if let Some(snapshot) = world.resource::<SimSnapshots>().latest.as_ref() {
            report(snapshot, args.json);
        }
    }

    let telemetry = *world.resource::<SimTelemetry>();
    info!(
        ticks = world.resource::<SimulationClock>().now(),
        requests_created = telemetry.requests_created,
        requests_assigned = telemetry.requests_assigned,
        trips_completed = telemetry.trips_completed,
        trips_ended_early = telemetry.trips_ended_early,
        "simulation stopped"
    );
}
