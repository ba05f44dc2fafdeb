mod build;
mod params;

pub use build::build_scenario;
pub use params::{
    DriveConfig, EarlyDropoffConfig, GridConfig, RequestSpawnerConfig, ScenarioParams, SimRng,
};
