//! Plain-text rendering of a simulation result.

use crate::params::SimulationParameters;
use crate::sim::SimulationResult;

/// Prints the parameter echo, summary statistics, and both series tables.
pub fn print_report(params: &SimulationParameters, result: &SimulationResult) {
    println!(
        "Station: {} charge points @ {} kW | {} kWh/visit | arrival {}%",
        params.charge_points,
        params.charging_power,
        params.consumption_per_visit,
        params.arrival_multiplier
    );
    println!();
    println!("{}", result.statistics);

    println!("\n--- Hourly Power Demand ---");
    for sample in &result.hourly {
        println!("{:>5}  {:>7.2} kW", sample.hour_label, sample.power_kw);
    }

    println!("\n--- Weekly Overview ---");
    for day in &result.weekly {
        println!(
            "{}  {:>7} events  {:>9} kWh",
            day.day_label, day.events, day.energy_kwh
        );
    }
}
