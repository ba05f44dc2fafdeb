use bevy_ecs::prelude::Resource;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::clock::DEFAULT_TICK_SECS;
use crate::spatial::GridBounds;

/// Default fleet size.
const DEFAULT_NUM_VEHICLES: usize = 10;

/// Default grid extent: a 20 km square.
const DEFAULT_GRID_EXTENT_M: i64 = 20_000;

/// Default vehicle speed in meters per second.
const DEFAULT_SPEED_MPS: i64 = 40;

/// Default per-axis trip offset: dropoffs land within 2 km of the pickup.
const DEFAULT_MAX_TRIP_OFFSET_M: i64 = 2_000;

/// Default probability that a trip en route to dropoff ends early, per tick.
const DEFAULT_EARLY_DROPOFF_PROBABILITY: f64 = 0.20;

/// Everything needed to build a simulation world.
///
/// Defaults reproduce the reference model: 10 taxis on a 20 km grid, 40 m/s,
/// 10 s ticks, one request per tick, trips up to 2 km offset, 20 % early
/// dropoff chance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParams {
    pub num_vehicles: usize,
    pub grid_extent_m: i64,
    pub speed_mps: i64,
    pub tick_secs: u64,
    pub requests_per_tick: u32,
    pub max_trip_offset_m: i64,
    pub early_dropoff_probability: f64,
    /// Seed for the simulation RNG; the same seed replays the same run.
    pub seed: u64,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            num_vehicles: DEFAULT_NUM_VEHICLES,
            grid_extent_m: DEFAULT_GRID_EXTENT_M,
            speed_mps: DEFAULT_SPEED_MPS,
            tick_secs: DEFAULT_TICK_SECS,
            requests_per_tick: 1,
            max_trip_offset_m: DEFAULT_MAX_TRIP_OFFSET_M,
            early_dropoff_probability: DEFAULT_EARLY_DROPOFF_PROBABILITY,
            seed: 0,
        }
    }
}

impl ScenarioParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_num_vehicles(mut self, num_vehicles: usize) -> Self {
        self.num_vehicles = num_vehicles;
        self
    }

    pub fn with_grid_extent_m(mut self, extent: i64) -> Self {
        self.grid_extent_m = extent;
        self
    }

    pub fn with_requests_per_tick(mut self, per_tick: u32) -> Self {
        self.requests_per_tick = per_tick;
        self
    }

    pub fn with_early_dropoff_probability(mut self, probability: f64) -> Self {
        debug_assert!(
            (0.0..=1.0).contains(&probability),
            "probability must be in [0, 1]"
        );
        self.early_dropoff_probability = probability;
        self
    }
}

/// Simulation area bounds.
#[derive(Debug, Clone, Copy, Resource)]
pub struct GridConfig {
    pub bounds: GridBounds,
}

/// Fixed speed and tick duration; together they cap per-tick travel.
#[derive(Debug, Clone, Copy, Resource)]
pub struct DriveConfig {
    pub speed_mps: i64,
    pub tick_secs: u64,
}

impl DriveConfig {
    /// Maximum meters a vehicle may cover in one tick.
    pub fn budget_per_tick_m(&self) -> i64 {
        self.speed_mps * self.tick_secs as i64
    }
}

/// Request generation: how many requests arrive per tick and how far
/// dropoffs may land from their pickups.
#[derive(Debug, Clone, Copy, Resource)]
pub struct RequestSpawnerConfig {
    pub per_tick: u32,
    pub max_trip_offset_m: i64,
}

/// Per-tick, per-vehicle chance that a trip en route to dropoff ends early.
///
/// Applied fleet-wide as a flat coin flip, independent of position; the
/// vehicle goes idle wherever it stands.
#[derive(Debug, Clone, Copy, Resource)]
pub struct EarlyDropoffConfig {
    pub probability: f64,
}

/// The simulation's single random source.
///
/// Owned by the world and passed to every stochastic system; systems draw in
/// a fixed order, so seeding this once makes whole runs reproducible.
#[derive(Debug, Resource)]
pub struct SimRng(pub StdRng);
