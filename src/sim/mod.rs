/// Demand engine: statistics and series generation.
pub mod engine;
/// Fixed time-of-day curve and series shape constants.
pub mod profile;
pub mod types;

pub use engine::{DomainError, simulate, simulate_with_rng};
pub use types::{DerivedStatistics, HourlyPowerSample, SimulationResult, WeeklySample};
