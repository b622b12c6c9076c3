//! EV charging-station demand estimator.
//!
//! Turns four operator-supplied parameters into derived demand statistics,
//! an hourly power profile, and a weekly breakdown.

#[cfg(feature = "api")]
pub mod api;
pub mod config;
pub mod io;
/// Parameter model and range validator.
pub mod params;
pub mod reporting;
/// Demand simulation engine and result types.
pub mod sim;
#[cfg(feature = "tui")]
pub mod tui;
