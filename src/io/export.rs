//! CSV export for the hourly and weekly series.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::sim::types::{HourlyPowerSample, WeeklySample};

/// Column header for the hourly series export.
const HOURLY_HEADER: &str = "hour,power_kw";

/// Column header for the weekly series export.
const WEEKLY_HEADER: &str = "day,events,energy_kwh";

/// Exports the hourly demand series to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_hourly_csv(samples: &[HourlyPowerSample], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_hourly_csv(samples, buf)
}

/// Writes the hourly demand series as CSV to any writer.
///
/// Produces deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_hourly_csv(samples: &[HourlyPowerSample], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(HOURLY_HEADER.split(','))?;
    for s in samples {
        wtr.write_record(&[s.hour_label.clone(), format!("{:.2}", s.power_kw)])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Exports the weekly breakdown to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_weekly_csv(samples: &[WeeklySample], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_weekly_csv(samples, buf)
}

/// Writes the weekly breakdown as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_weekly_csv(samples: &[WeeklySample], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(WEEKLY_HEADER.split(','))?;
    for s in samples {
        wtr.write_record(&[
            s.day_label.to_string(),
            s.events.to_string(),
            s.energy_kwh.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
