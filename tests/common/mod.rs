//! Shared test fixtures for integration tests.

use ev_demand_sim::params::SimulationParameters;

/// The worked reference parameter set: 20 bays, 100%, 18 kWh, 11 kW.
///
/// Hand-computed expectations: visit duration 18/11 h, 293 events/day,
/// 5274 kWh/day, peak capped at 180 kW.
pub fn reference_params() -> SimulationParameters {
    SimulationParameters {
        charge_points: 20.0,
        arrival_multiplier: 100.0,
        consumption_per_visit: 18.0,
        charging_power: 11.0,
    }
}

/// A small uncapped station: 10 bays at 11 kW, peak 110 kW.
pub fn small_station() -> SimulationParameters {
    SimulationParameters {
        charge_points: 10.0,
        arrival_multiplier: 100.0,
        consumption_per_visit: 18.0,
        charging_power: 11.0,
    }
}

/// Default seed used across tests.
pub const SEED: u64 = 42;
