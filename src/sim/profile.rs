//! Fixed time-of-day demand curve and series shape constants.
//!
//! The baseline intensity is independent of the operator parameters; it
//! only shapes the illustrative hourly series.

/// Number of samples in the hourly demand series.
pub const HOURLY_SAMPLES: usize = 12;

/// Spacing between hourly samples, in hours.
pub const SAMPLE_INTERVAL_HOURS: u32 = 2;

/// Minimum power shown on the hourly curve (kW).
pub const POWER_FLOOR_KW: f64 = 10.0;

/// Weekly breakdown day labels, Monday first.
pub const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Baseline demand intensity (kW) for a given hour of day.
///
/// Piecewise-constant: quiet overnight, a morning ramp, a broad daytime
/// peak, and an evening shoulder.
pub fn baseline_intensity_kw(hour: u32) -> f64 {
    match hour {
        0..6 => 20.0,
        6..9 => 50.0,
        9..17 => 150.0,
        17..20 => 100.0,
        _ => 40.0,
    }
}

/// Renders an hour-of-day label, e.g. `"0:00"` or `"22:00"`.
pub fn hour_label(hour: u32) -> String {
    format!("{hour}:00")
}

/// The hour of day for the sample at `index`.
pub fn sample_hour(index: usize) -> u32 {
    index as u32 * SAMPLE_INTERVAL_HOURS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_matches_curve_breakpoints() {
        assert_eq!(baseline_intensity_kw(0), 20.0);
        assert_eq!(baseline_intensity_kw(5), 20.0);
        assert_eq!(baseline_intensity_kw(6), 50.0);
        assert_eq!(baseline_intensity_kw(8), 50.0);
        assert_eq!(baseline_intensity_kw(9), 150.0);
        assert_eq!(baseline_intensity_kw(16), 150.0);
        assert_eq!(baseline_intensity_kw(17), 100.0);
        assert_eq!(baseline_intensity_kw(19), 100.0);
        assert_eq!(baseline_intensity_kw(20), 40.0);
        assert_eq!(baseline_intensity_kw(23), 40.0);
    }

    #[test]
    fn sample_hours_cover_even_hours() {
        let hours: Vec<u32> = (0..HOURLY_SAMPLES).map(sample_hour).collect();
        assert_eq!(hours, [0, 2, 4, 6, 8, 10, 12, 14, 16, 18, 20, 22]);
    }

    #[test]
    fn labels_render_without_padding() {
        assert_eq!(hour_label(0), "0:00");
        assert_eq!(hour_label(22), "22:00");
    }
}
