use bevy_ecs::prelude::Resource;

/// Default tick duration: 10 seconds of simulated time per tick.
pub const DEFAULT_TICK_SECS: u64 = 10;

/// Fixed-step simulation clock.
///
/// The simulation advances in whole ticks of a fixed duration; there is no
/// event queue. The runner advances the clock exactly once per schedule run,
/// so `now()` identifies the tick currently being (or just) executed.
#[derive(Debug, Resource)]
pub struct SimulationClock {
    tick: u64,
    tick_secs: u64,
}

impl SimulationClock {
    pub fn new(tick_secs: u64) -> Self {
        debug_assert!(tick_secs > 0, "tick duration must be positive");
        Self { tick: 0, tick_secs }
    }

    /// The current tick number. Tick 0 is the pre-run initial state.
    pub fn now(&self) -> u64 {
        self.tick
    }

    pub fn tick_secs(&self) -> u64 {
        self.tick_secs
    }

    /// Simulated seconds elapsed since the start of the run.
    pub fn elapsed_secs(&self) -> u64 {
        self.tick * self.tick_secs
    }

    /// Advances to the next tick and returns its number.
    pub fn advance(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_SECS)
    }
}
