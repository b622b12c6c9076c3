//! Demand simulation engine: parameters in, statistics and series out.

use std::error::Error;
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::params::SimulationParameters;

use super::profile::{
    DAY_LABELS, HOURLY_SAMPLES, POWER_FLOOR_KW, baseline_intensity_kw, hour_label, sample_hour,
};
use super::types::{
    DerivedStatistics, FEEDER_CAP_KW, HorizonTotals, HourlyPowerSample, SimulationResult,
    WeeklySample,
};

/// Raised when `simulate` receives a zero or negative divisor.
///
/// Validation excludes these values, so hitting this error means the caller
/// skipped the gate. It signals a contract violation, not user input to be
/// re-prompted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    /// Offending divisor field name.
    pub field: &'static str,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "domain error: `{}` must be strictly positive before simulation",
            self.field
        )
    }
}

impl Error for DomainError {}

/// Runs one simulation with a seeded random source.
///
/// Convenience wrapper over [`simulate_with_rng`] using `StdRng`. Identical
/// `(params, seed)` pairs produce identical results; production callers may
/// derive the seed from a time-varying source when fresh noise is wanted.
///
/// # Errors
///
/// Returns [`DomainError`] if `charging_power` or `consumption_per_visit`
/// is not strictly positive.
pub fn simulate(
    params: &SimulationParameters,
    seed: u64,
) -> Result<SimulationResult, DomainError> {
    let mut rng = StdRng::seed_from_u64(seed);
    simulate_with_rng(params, &mut rng)
}

/// Runs one simulation, drawing hourly-series noise from `rng`.
///
/// The statistics and the weekly series are fully deterministic in
/// `params`; only the hourly series consumes random draws.
///
/// # Errors
///
/// Returns [`DomainError`] if `charging_power` or `consumption_per_visit`
/// is not strictly positive.
pub fn simulate_with_rng<R: Rng + ?Sized>(
    params: &SimulationParameters,
    rng: &mut R,
) -> Result<SimulationResult, DomainError> {
    let statistics = derived_statistics(params)?;
    let hourly = hourly_profile(rng);
    let weekly = weekly_breakdown(&statistics);

    Ok(SimulationResult {
        statistics,
        hourly,
        weekly,
    })
}

/// Computes the aggregate statistics for one parameter set.
///
/// # Errors
///
/// Returns [`DomainError`] for a zero/negative (or non-finite) divisor.
pub fn derived_statistics(
    params: &SimulationParameters,
) -> Result<DerivedStatistics, DomainError> {
    // Guard the two divisors; `!(x > 0)` also catches NaN.
    if !(params.consumption_per_visit > 0.0 && params.consumption_per_visit.is_finite()) {
        return Err(DomainError {
            field: "consumption_per_visit",
        });
    }
    if !(params.charging_power > 0.0 && params.charging_power.is_finite()) {
        return Err(DomainError {
            field: "charging_power",
        });
    }

    // Each bay hosts 24/duration sequential visits per day at the nominal
    // arrival rate, scaled by the multiplier.
    let visit_duration_hr = params.consumption_per_visit / params.charging_power;
    let raw_events =
        params.charge_points * (params.arrival_multiplier / 100.0) * (24.0 / visit_duration_hr);
    let charging_events_per_day = raw_events.floor().max(0.0) as u64;

    let total_events = HorizonTotals::linear(charging_events_per_day as f64);
    let total_energy_kwh = total_events.scaled(params.consumption_per_visit);

    let peak_power_demand_kw = (params.charge_points * params.charging_power).min(FEEDER_CAP_KW);

    Ok(DerivedStatistics {
        charging_events_per_day,
        total_events,
        total_energy_kwh,
        peak_power_demand_kw,
    })
}

/// Samples the illustrative 12-point hourly demand curve.
///
/// Each point is uniform noise anchored to the time-of-day baseline, then
/// clamped to the floor/cap band. Intentionally decoupled from the
/// aggregate statistics.
fn hourly_profile<R: Rng + ?Sized>(rng: &mut R) -> Vec<HourlyPowerSample> {
    (0..HOURLY_SAMPLES)
        .map(|i| {
            let hour = sample_hour(i);
            let baseline = baseline_intensity_kw(hour);
            let draw: f64 = rng.random();
            let power_kw = (draw * baseline + POWER_FLOOR_KW).clamp(POWER_FLOOR_KW, FEEDER_CAP_KW);
            HourlyPowerSample {
                hour_label: hour_label(hour),
                power_kw,
            }
        })
        .collect()
}

/// Builds the uniform Mon..Sun breakdown from the day-level statistics.
fn weekly_breakdown(stats: &DerivedStatistics) -> Vec<WeeklySample> {
    let events = stats.charging_events_per_day;
    let energy_kwh = stats.total_energy_kwh.day.floor().max(0.0) as u64;
    DAY_LABELS
        .iter()
        .map(|&day_label| WeeklySample {
            day_label,
            events,
            energy_kwh,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_params() -> SimulationParameters {
        SimulationParameters {
            charge_points: 20.0,
            arrival_multiplier: 100.0,
            consumption_per_visit: 18.0,
            charging_power: 11.0,
        }
    }

    #[test]
    fn reference_parameters_match_hand_computation() {
        // duration = 18/11 h, events/day = floor(20 * 1.0 * 24*11/18) = 293
        let stats = derived_statistics(&reference_params()).expect("valid params");
        assert_eq!(stats.charging_events_per_day, 293);
        assert_eq!(stats.total_energy_kwh.day, 293.0 * 18.0);
        assert_eq!(stats.peak_power_demand_kw, 180.0);
    }

    #[test]
    fn peak_power_stays_below_cap() {
        let mut params = reference_params();
        params.charge_points = 10.0;
        params.charging_power = 11.0;
        let stats = derived_statistics(&params).expect("valid params");
        assert_eq!(stats.peak_power_demand_kw, 110.0);

        params.charge_points = 50.0;
        params.charging_power = 50.0;
        let stats = derived_statistics(&params).expect("valid params");
        assert_eq!(stats.peak_power_demand_kw, FEEDER_CAP_KW);
    }

    #[test]
    fn horizon_totals_are_exact_multiples_of_day() {
        let stats = derived_statistics(&reference_params()).expect("valid params");
        let day = stats.charging_events_per_day as f64;
        assert_eq!(stats.total_events.week, day * 7.0);
        assert_eq!(stats.total_events.month, day * 30.0);
        assert_eq!(stats.total_events.year, day * 365.0);
        assert_eq!(
            stats.total_energy_kwh.day,
            day * reference_params().consumption_per_visit
        );
    }

    #[test]
    fn zero_divisors_raise_domain_error() {
        let mut params = reference_params();
        params.charging_power = 0.0;
        let err = derived_statistics(&params).expect_err("zero power");
        assert_eq!(err.field, "charging_power");

        let mut params = reference_params();
        params.consumption_per_visit = -1.0;
        let err = derived_statistics(&params).expect_err("negative consumption");
        assert_eq!(err.field, "consumption_per_visit");

        assert!(simulate(&params, 42).is_err());
    }

    #[test]
    fn events_never_go_negative() {
        let mut params = reference_params();
        params.charge_points = -5.0;
        let stats = derived_statistics(&params).expect("divisors still positive");
        assert_eq!(stats.charging_events_per_day, 0);
    }

    #[test]
    fn hourly_series_has_twelve_bounded_samples() {
        let result = simulate(&reference_params(), 42).expect("valid params");
        assert_eq!(result.hourly.len(), 12);
        for (i, sample) in result.hourly.iter().enumerate() {
            assert_eq!(sample.hour_label, format!("{}:00", i * 2));
            assert!(
                sample.power_kw >= POWER_FLOOR_KW && sample.power_kw <= FEEDER_CAP_KW,
                "sample {i} out of band: {}",
                sample.power_kw
            );
        }
    }

    #[test]
    fn weekly_series_is_uniform_mon_through_sun() {
        let result = simulate(&reference_params(), 42).expect("valid params");
        assert_eq!(result.weekly.len(), 7);
        let labels: Vec<&str> = result.weekly.iter().map(|w| w.day_label).collect();
        assert_eq!(labels, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
        for w in &result.weekly {
            assert_eq!(w.events, 293);
            assert_eq!(w.energy_kwh, 5274);
        }
    }

    #[test]
    fn same_seed_reproduces_the_full_result() {
        let params = reference_params();
        let a = simulate(&params, 7).expect("valid params");
        let b = simulate(&params, 7).expect("valid params");
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_only_move_the_hourly_series() {
        let params = reference_params();
        let a = simulate(&params, 1).expect("valid params");
        let b = simulate(&params, 2).expect("valid params");
        assert_eq!(a.statistics, b.statistics);
        assert_eq!(a.weekly, b.weekly);
        assert_ne!(a.hourly, b.hourly);
    }
}
