//! Core result types: derived statistics and sample series.

use std::fmt;

use serde::Serialize;

/// Installed-capacity ceiling for the whole station (kW).
///
/// Models the feeder/transformer limit behind the station: no matter how
/// many bays are installed, simultaneous draw never exceeds this value.
/// A deployment constant, swapped per site rather than configured at runtime.
pub const FEEDER_CAP_KW: f64 = 180.0;

/// Totals extrapolated over the four reporting horizons.
///
/// Extrapolation is purely linear (multipliers 1/7/30/365, no compounding).
/// Only the day value is floored upstream; longer horizons carry whatever
/// the multiplication yields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HorizonTotals {
    /// Per-day total.
    pub day: f64,
    /// Per-week total (`day * 7`).
    pub week: f64,
    /// Per-month total (`day * 30`).
    pub month: f64,
    /// Per-year total (`day * 365`).
    pub year: f64,
}

impl HorizonTotals {
    /// Extrapolates a day-level value across all horizons.
    pub fn linear(day: f64) -> Self {
        Self {
            day,
            week: day * 7.0,
            month: day * 30.0,
            year: day * 365.0,
        }
    }

    /// Scales every horizon by the same factor.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            day: self.day * factor,
            week: self.week * factor,
            month: self.month * factor,
            year: self.year * factor,
        }
    }
}

/// Aggregate statistics derived from one parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedStatistics {
    /// Charging events the station hosts per day (floored, never negative).
    pub charging_events_per_day: u64,
    /// Event counts over the four horizons.
    pub total_events: HorizonTotals,
    /// Energy delivered over the four horizons (kWh).
    pub total_energy_kwh: HorizonTotals,
    /// Capacity-capped maximum simultaneous draw (kW).
    pub peak_power_demand_kw: f64,
}

impl fmt::Display for DerivedStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Demand Summary ---")?;
        writeln!(
            f,
            "Charging events:   day {:>10}  week {:>10}  month {:>10}  year {:>12}",
            self.charging_events_per_day,
            self.total_events.week,
            self.total_events.month,
            self.total_events.year
        )?;
        writeln!(
            f,
            "Energy (kWh):      day {:>10.2}  week {:>10.2}  month {:>10.2}  year {:>12.2}",
            self.total_energy_kwh.day,
            self.total_energy_kwh.week,
            self.total_energy_kwh.month,
            self.total_energy_kwh.year
        )?;
        write!(f, "Peak power demand: {:.0} kW", self.peak_power_demand_kw)
    }
}

/// One point of the illustrative hourly demand curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyPowerSample {
    /// Hour label, `"0:00"` through `"22:00"`.
    pub hour_label: String,
    /// Sampled power draw (kW), within the floor/cap band.
    pub power_kw: f64,
}

/// One day of the uniform weekly breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeeklySample {
    /// Day label, `Mon` through `Sun`.
    pub day_label: &'static str,
    /// Charging events on this day.
    pub events: u64,
    /// Energy delivered on this day (kWh, floored).
    pub energy_kwh: u64,
}

/// Complete simulation output: statistics plus the two chart series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    /// Aggregate derived statistics.
    pub statistics: DerivedStatistics,
    /// 12-point hourly power demand series.
    pub hourly: Vec<HourlyPowerSample>,
    /// 7-point weekly breakdown, Mon through Sun.
    pub weekly: Vec<WeeklySample>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizon_totals_linear_multipliers() {
        let t = HorizonTotals::linear(10.0);
        assert_eq!(t.day, 10.0);
        assert_eq!(t.week, 70.0);
        assert_eq!(t.month, 300.0);
        assert_eq!(t.year, 3650.0);
    }

    #[test]
    fn horizon_totals_scaled_applies_to_every_horizon() {
        let t = HorizonTotals::linear(4.0).scaled(18.0);
        assert_eq!(t.day, 72.0);
        assert_eq!(t.week, 504.0);
        assert_eq!(t.year, 26280.0);
    }

    #[test]
    fn statistics_display_does_not_panic() {
        let stats = DerivedStatistics {
            charging_events_per_day: 293,
            total_events: HorizonTotals::linear(293.0),
            total_energy_kwh: HorizonTotals::linear(5274.0),
            peak_power_demand_kw: 180.0,
        };
        let s = format!("{stats}");
        assert!(s.contains("Peak power demand: 180 kW"));
    }
}
