//! Input/output helpers.

/// CSV export for the simulated series.
pub mod export;
