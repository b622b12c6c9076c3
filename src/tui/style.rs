//! Color constants and axis-scaling helpers for the TUI.

use ratatui::style::Color;

/// Hourly demand line color.
pub const DEMAND_COLOR: Color = Color::Cyan;
/// Weekly events bar color.
pub const BAR_COLOR: Color = Color::Blue;
/// Selected parameter row color.
pub const SELECTED_FG: Color = Color::Yellow;
/// Validation message color.
pub const ERROR_FG: Color = Color::Red;
/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;

/// Computes Y-axis bounds for a power series with 10% padding.
///
/// The lower bound is pinned to zero so the floor/cap band stays readable.
pub fn power_bounds_y(points: &[(f64, f64)]) -> [f64; 2] {
    let max = points
        .iter()
        .map(|&(_, y)| y)
        .fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() {
        return [0.0, 1.0];
    }
    [0.0, (max * 1.1).max(1.0)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_bounds_pad_the_maximum() {
        let bounds = power_bounds_y(&[(0.0, 50.0), (2.0, 100.0)]);
        assert_eq!(bounds[0], 0.0);
        assert!((bounds[1] - 110.0).abs() < 1e-9);
    }

    #[test]
    fn empty_series_gets_default_bounds() {
        assert_eq!(power_bounds_y(&[]), [0.0, 1.0]);
    }
}
